//! Domain types for the entities in §3. These are the in-memory shapes the
//! stores marshal to/from SQLite rows (nested structures are kept as JSON
//! columns; SQLite has no native array/map type).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type InstanceUid = [u8; 16];

/// Audit-row error reason C6 records when it skips offering a config to an
/// agent that never advertised `AcceptsRemoteConfig`, and C5 records when a
/// pending offer hits an agent whose capabilities dropped that bit between
/// offer and delivery. Not a genuine apply failure (§4.6).
pub const CAPABILITY_MISSING_REASON: &str = "capability_missing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RemoteConfigStatus {
    Unset,
    Applying,
    Applied,
    Failed,
}

impl Default for RemoteConfigStatus {
    fn default() -> Self {
        Self::Unset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Failed,
    NeverConnected,
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::NeverConnected
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PackageStatusEntry {
    pub version: String,
    pub hash: Vec<u8>,
    pub status: PackageInstallStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageInstallStatus {
    Installed,
    Installing,
    Failed,
    Uninstalled,
}

impl Default for PackageInstallStatus {
    fn default() -> Self {
        Self::Uninstalled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConnectionSettingsHash {
    pub hash: Vec<u8>,
    pub status: String,
    pub applied_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConnectionSettingsHashes {
    pub own_metrics: Option<ConnectionSettingsHash>,
    pub own_logs: Option<ConnectionSettingsHash>,
    pub own_traces: Option<ConnectionSettingsHash>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComponentHealth {
    pub healthy: bool,
    pub start_time_unix_nano: u64,
    pub last_error: String,
    pub component_tree: HashMap<String, ComponentHealth>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComponentDetails {
    pub metadata: HashMap<String, String>,
    pub sub_components: HashMap<String, ComponentDetails>,
}

/// Tree of receivers/processors/exporters/extensions the agent was built
/// with. Stored as an arena-free nested map (§9: "never as ownership
/// cycles" — a `HashMap` tree has no back-references, so the design note's
/// constraint is satisfied without an explicit arena).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AvailableComponents {
    pub components: HashMap<String, ComponentDetails>,
    pub hash: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AgentDescription {
    pub identifying_attributes: HashMap<String, String>,
    pub non_identifying_attributes: HashMap<String, String>,
}

/// Agent record (C2), keyed by `(org, instance_uid)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub org: String,
    pub instance_uid: InstanceUid,
    pub display_name: String,
    pub hostname: String,
    pub ip: String,
    pub tags: Vec<String>,
    pub agent_description: Option<AgentDescription>,
    pub agent_capabilities: u64,
    pub server_capabilities: u64,
    pub available_components: Option<AvailableComponents>,
    pub effective_config_hash: Option<Vec<u8>>,
    pub effective_config_yaml: Option<String>,
    pub effective_config_last_updated: Option<DateTime<Utc>>,
    pub remote_config_hash: Option<Vec<u8>>,
    pub remote_config_status: RemoteConfigStatus,
    pub remote_config_error: Option<String>,
    pub package_statuses: HashMap<String, PackageStatusEntry>,
    pub connection_settings_hashes: ConnectionSettingsHashes,
    pub health: Option<ComponentHealth>,
    pub last_sequence_num: u64,
    pub last_seen: Option<DateTime<Utc>>,
    pub connection_status: ConnectionStatus,
    pub registration_failed: bool,
    pub registration_failed_at: Option<DateTime<Utc>>,
    pub registration_failure_reason: Option<String>,
}

impl AgentRecord {
    pub fn new(org: impl Into<String>, instance_uid: InstanceUid) -> Self {
        Self {
            org: org.into(),
            instance_uid,
            display_name: String::new(),
            hostname: String::new(),
            ip: String::new(),
            tags: Vec::new(),
            agent_description: None,
            agent_capabilities: 0,
            server_capabilities: 0,
            available_components: None,
            effective_config_hash: None,
            effective_config_yaml: None,
            effective_config_last_updated: None,
            remote_config_hash: None,
            remote_config_status: RemoteConfigStatus::Unset,
            remote_config_error: None,
            package_statuses: HashMap::new(),
            connection_settings_hashes: ConnectionSettingsHashes::default(),
            health: None,
            last_sequence_num: 0,
            last_seen: None,
            connection_status: ConnectionStatus::NeverConnected,
            registration_failed: false,
            registration_failed_at: None,
            registration_failure_reason: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloutStrategy {
    Immediate,
    Canary,
    Staged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    RolledBack,
}

/// Deployment (C3). Immutable except `status`, `started_at`, `completed_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub org: String,
    pub name: String,
    pub config_version: i64,
    pub config_hash: Vec<u8>,
    pub config_yaml: String,
    pub rollout_strategy: RolloutStrategy,
    pub canary_percentage: u8,
    pub target_tags: Vec<String>,
    pub status: DeploymentStatus,
    pub status_reason: Option<String>,
    pub ignore_failures: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A new deployment as requested by the operator API, before a version and
/// hash have been assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentSpec {
    pub org: String,
    pub name: String,
    pub config_yaml: String,
    pub rollout_strategy: RolloutStrategy,
    pub canary_percentage: u8,
    pub target_tags: Vec<String>,
    pub ignore_failures: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditStatus {
    Unset,
    Applying,
    Applied,
    Failed,
}

/// Deployment audit row (C3). Exactly one row per `(deployment_id, instance_uid)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentAudit {
    pub deployment_id: String,
    pub instance_uid: InstanceUid,
    pub config_hash: Vec<u8>,
    pub status: AuditStatus,
    pub effective_config_hash: Option<Vec<u8>>,
    pub error: Option<String>,
    pub reported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigRequestStatus {
    Pending,
    Completed,
    Failed,
    Expired,
}

/// Config-request record (C7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRequestRecord {
    pub tracking_id: String,
    pub org: String,
    pub instance_uid: InstanceUid,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: ConfigRequestStatus,
    pub effective_config_yaml: Option<String>,
    pub effective_config_hash: Option<Vec<u8>>,
    pub error: Option<String>,
}

/// Registration token (C8).
#[derive(Debug, Clone)]
pub struct RegistrationToken {
    pub id: String,
    pub org: String,
    pub one_shot_secret: String,
    pub expires_at: DateTime<Utc>,
    pub consumed_at: Option<DateTime<Utc>>,
}

/// Cryptographic digest over canonical YAML bytes (§3, §8 P9). SHA-256 is
/// stable across process restarts and platform endianness.
pub fn hash_config_yaml(yaml: &str) -> Vec<u8> {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(yaml.as_bytes());
    hasher.finalize().to_vec()
}

/// Parses a lowercase-hex-encoded 16-byte instance UID from a URL path
/// segment, e.g. `0102030405060708090a0b0c0d0e0f10`.
pub fn parse_instance_uid(hex: &str) -> Option<InstanceUid> {
    if hex.len() != 32 {
        return None;
    }
    let mut out = [0u8; 16];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let byte_str = std::str::from_utf8(chunk).ok()?;
        out[i] = u8::from_str_radix(byte_str, 16).ok()?;
    }
    Some(out)
}

pub fn instance_uid_to_hex(instance_uid: &InstanceUid) -> String {
    instance_uid.iter().map(|b| format!("{b:02x}")).collect()
}
