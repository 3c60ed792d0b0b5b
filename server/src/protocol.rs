//! Protocol engine (C5): per-agent reconciliation of an inbound
//! `AgentToServer` against the stores, and composition of the matching
//! `ServerToAgent`.
//!
//! All mutation for one `instance_uid` is serialized behind a per-agent
//! `tokio::sync::Mutex` (§5) obtained from `locks`; across agents, handling
//! proceeds concurrently, mirroring the teacher's worker-per-connection
//! model generalized from a single transport to many.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use opamp_proto::proto::{
    server_error_response, AgentCapabilities, AgentConfigFile, AgentConfigMap, AgentRemoteConfig,
    AgentToServer, CommandType, ComponentHealth as ProtoComponentHealth,
    PackageStatuses as ProtoPackageStatuses, RemoteConfigStatuses, ServerErrorResponse,
    ServerErrorResponseType, ServerToAgent, ServerToAgentCommand, ServerToAgentFlags,
};
use prost::Message;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::Settings;
use crate::model::{
    self, AgentDescription, AuditStatus, AvailableComponents, ComponentDetails, ComponentHealth,
    InstanceUid, PackageInstallStatus, PackageStatusEntry, RemoteConfigStatus,
};
use crate::registry::{ConnectionRegistry, PendingOffer};
use crate::store::agent::AgentPatch;
use crate::store::{AgentStore, AuthStore, ConfigRequestStore, DeploymentStore};
use crate::wire::{self, DecodedCapabilities, WireError};

/// Capabilities this server advertises: effective-config intake, remote
/// config offers, and OpAMP connection settings offers (§6).
pub const SERVER_CAPABILITIES: u64 = AgentCapabilities::ReportsEffectiveConfig as u64
    | AgentCapabilities::AcceptsRemoteConfig as u64
    | AgentCapabilities::AcceptsOpAmpConnectionSettings as u64;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("authentication failed")]
    Unauthenticated,
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

pub struct ProtocolEngine {
    agents: AgentStore,
    deployments: DeploymentStore,
    config_requests: ConfigRequestStore,
    auth: AuthStore,
    registry: Arc<ConnectionRegistry>,
    settings: Arc<Settings>,
    locks: DashMap<InstanceUid, Arc<Mutex<()>>>,
}

impl ProtocolEngine {
    pub fn new(
        agents: AgentStore,
        deployments: DeploymentStore,
        config_requests: ConfigRequestStore,
        auth: AuthStore,
        registry: Arc<ConnectionRegistry>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            agents,
            deployments,
            config_requests,
            auth,
            registry,
            settings,
            locks: DashMap::new(),
        }
    }

    pub async fn authenticate(&self, bearer_token: &str) -> EngineResult<(String, InstanceUid)> {
        self.auth
            .validate_bearer_token(bearer_token)
            .await
            .map_err(|_| EngineError::Unauthenticated)
    }

    /// Decodes, reconciles, and composes the reply for one inbound frame.
    /// Decode failures produce a `BadRequest` `ServerToAgent` rather than an
    /// `Err` (§4.5 step 1: the connection stays open; state is unchanged).
    pub async fn handle_frame(&self, org: &str, instance_uid: InstanceUid, raw: &[u8]) -> Vec<u8> {
        let decoded = match wire::decode_agent_to_server(
            raw,
            self.settings.message_size_ceiling_bytes,
            self.settings.max_leading_null_bytes,
        ) {
            Ok(m) => m,
            Err(e) => return wire::encode_server_to_agent(&bad_request(&instance_uid, &e)),
        };

        let lock = self.lock_for(instance_uid);
        let _guard = lock.lock().await;

        self.registry.touch(&instance_uid);
        let response = self.reconcile(org, instance_uid, decoded).await;
        match wire::encode_server_to_agent_checked(&response, self.settings.message_size_ceiling_bytes) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "composed response exceeded the outbound size ceiling");
                wire::encode_server_to_agent(&bad_request(&instance_uid, &e))
            }
        }
    }

    fn lock_for(&self, instance_uid: InstanceUid) -> Arc<Mutex<()>> {
        self.locks
            .entry(instance_uid)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn reconcile(&self, org: &str, instance_uid: InstanceUid, msg: AgentToServer) -> ServerToAgent {
        let patch = build_patch(&msg);

        let outcome = match self.agents.upsert(org, &instance_uid, patch).await {
            Ok(o) => o,
            Err(e) => {
                tracing::error!(error = %e, "agent store upsert failed");
                return bad_request(&instance_uid, &e);
            }
        };

        if !outcome.replayed {
            if let Some(config_map) = msg.effective_config.as_ref().and_then(|c| c.config_map.as_ref()) {
                let yaml = flatten_config_map(config_map);
                let hash = model::hash_config_yaml(&yaml);
                if let Err(e) = self.config_requests.resolve(&instance_uid, &yaml, &hash).await {
                    tracing::warn!(error = %e, "config request resolution failed");
                }
            }

            if let Some(rcs) = msg.remote_config_status.as_ref() {
                let status = RemoteConfigStatuses::try_from(rcs.status)
                    .unwrap_or(RemoteConfigStatuses::Unset);
                if matches!(status, RemoteConfigStatuses::Applied | RemoteConfigStatuses::Failed) {
                    match self
                        .deployments
                        .get_by_hash(org, &rcs.last_remote_config_hash)
                        .await
                    {
                        Ok(Some(deployment)) => {
                            let audit_status = if matches!(status, RemoteConfigStatuses::Applied) {
                                AuditStatus::Applied
                            } else {
                                AuditStatus::Failed
                            };
                            let error = (!rcs.error_message.is_empty()).then(|| rcs.error_message.clone());
                            if let Err(e) = self
                                .deployments
                                .set_audit_row(
                                    &deployment.id,
                                    &instance_uid,
                                    audit_status,
                                    Some(&rcs.last_remote_config_hash),
                                    error.as_deref(),
                                )
                                .await
                            {
                                tracing::warn!(error = %e, "audit row update failed");
                            }
                            self.registry
                                .clear_pending_offer(&instance_uid, &rcs.last_remote_config_hash);
                        }
                        Ok(None) => {}
                        Err(e) => tracing::warn!(error = %e, "deployment lookup by hash failed"),
                    }
                }
            }
        }

        self.compose_response(instance_uid, outcome.record.agent_capabilities).await
    }

    async fn compose_response(&self, instance_uid: InstanceUid, agent_capabilities: u64) -> ServerToAgent {
        let mut response = ServerToAgent {
            instance_uid: instance_uid.to_vec(),
            capabilities: SERVER_CAPABILITIES,
            ..Default::default()
        };

        if self.registry.take_report_full_state(&instance_uid) {
            response.flags |= ServerToAgentFlags::ReportFullState as u64;
        }

        let decoded_caps = DecodedCapabilities::from_bits(agent_capabilities);

        // §4.5: a restart command is delivered alone (the proto docs say it
        // "should not be specified with fields other than instance_uid and
        // capabilities"), so this short-circuits before any config offer is
        // considered. An agent that never advertised AcceptsRestartCommand
        // just never gets the command drained from the queue; it stays
        // pending for whenever the agent reconnects with the bit set.
        if decoded_caps.has(AgentCapabilities::AcceptsRestartCommand)
            && self.registry.take_pending_restart(&instance_uid)
        {
            return ServerToAgent {
                instance_uid: instance_uid.to_vec(),
                capabilities: SERVER_CAPABILITIES,
                command: Some(ServerToAgentCommand {
                    r#type: CommandType::Restart as i32,
                }),
                ..Default::default()
            };
        }

        if let Some(offer) = self.registry.peek_pending_offer(&instance_uid) {
            if decoded_caps.has(AgentCapabilities::AcceptsRemoteConfig) {
                let candidate = AgentRemoteConfig {
                    config: Some(wrap_config_yaml(&offer.config_yaml)),
                    config_hash: offer.config_hash.clone(),
                };
                // §4.1's size ceiling binds both directions: a config this
                // large can never be delivered, so fail it now rather than
                // leave the audit row stuck APPLYING until the wave times out.
                if candidate.encoded_len() > self.settings.message_size_ceiling_bytes {
                    tracing::error!(
                        deployment_id = %offer.deployment_id,
                        size = candidate.encoded_len(),
                        ceiling = self.settings.message_size_ceiling_bytes,
                        "remote config offer exceeds the outbound size ceiling, dropping"
                    );
                    if let Err(e) = self
                        .deployments
                        .set_audit_row(
                            &offer.deployment_id,
                            &instance_uid,
                            AuditStatus::Failed,
                            None,
                            Some("oversized_config"),
                        )
                        .await
                    {
                        tracing::warn!(error = %e, "oversized-offer audit update failed");
                    }
                    self.registry
                        .clear_pending_offer(&instance_uid, &offer.config_hash);
                } else {
                    response.remote_config = Some(candidate);
                }
            } else {
                if let Err(e) = self
                    .deployments
                    .set_audit_row(
                        &offer.deployment_id,
                        &instance_uid,
                        AuditStatus::Failed,
                        None,
                        Some(model::CAPABILITY_MISSING_REASON),
                    )
                    .await
                {
                    tracing::warn!(error = %e, "capability-gated audit update failed");
                }
                self.registry
                    .clear_pending_offer(&instance_uid, &offer.config_hash);
            }
        }

        response
    }
}

fn bad_request(instance_uid: &InstanceUid, err: &dyn std::fmt::Display) -> ServerToAgent {
    ServerToAgent {
        instance_uid: instance_uid.to_vec(),
        error_response: Some(ServerErrorResponse {
            r#type: ServerErrorResponseType::BadRequest as i32,
            error_message: err.to_string(),
            details: None::<server_error_response::Details>,
        }),
        ..Default::default()
    }
}

fn build_patch(msg: &AgentToServer) -> AgentPatch {
    let mut patch = AgentPatch {
        sequence_num: msg.sequence_num,
        agent_capabilities: Some(msg.capabilities),
        ..Default::default()
    };

    if let Some(desc) = &msg.agent_description {
        patch.agent_description = Some(AgentDescription {
            identifying_attributes: key_values_to_map(&desc.identifying_attributes),
            non_identifying_attributes: key_values_to_map(&desc.non_identifying_attributes),
        });
    }

    if let Some(components) = &msg.available_components {
        patch.available_components = Some(convert_available_components(components));
    }

    if let Some(config) = msg.effective_config.as_ref().and_then(|c| c.config_map.as_ref()) {
        let yaml = flatten_config_map(config);
        patch.effective_config_hash = Some(model::hash_config_yaml(&yaml));
        patch.effective_config_yaml = Some(yaml);
        patch.effective_config_last_updated = Some(chrono::Utc::now());
    }

    if let Some(rcs) = &msg.remote_config_status {
        let status = RemoteConfigStatuses::try_from(rcs.status).unwrap_or(RemoteConfigStatuses::Unset);
        patch.remote_config_status = Some(convert_remote_config_status(status));
        patch.remote_config_hash = Some(rcs.last_remote_config_hash.clone());
        if !rcs.error_message.is_empty() {
            patch.remote_config_error = Some(rcs.error_message.clone());
        }
    }

    if let Some(health) = &msg.health {
        patch.health = Some(convert_health(health));
    }

    if let Some(statuses) = &msg.package_statuses {
        patch.package_statuses = Some(convert_package_statuses(statuses));
    }

    patch
}

fn key_values_to_map(kvs: &[opamp_proto::proto::KeyValue]) -> HashMap<String, String> {
    kvs.iter()
        .map(|kv| (kv.key.clone(), any_value_to_string(&kv.value)))
        .collect()
}

fn any_value_to_string(value: &Option<opamp_proto::proto::AnyValue>) -> String {
    use opamp_proto::proto::any_value::Value;
    match value.as_ref().and_then(|v| v.value.as_ref()) {
        Some(Value::StringValue(s)) => s.clone(),
        Some(Value::BoolValue(b)) => b.to_string(),
        Some(Value::IntValue(i)) => i.to_string(),
        Some(Value::DoubleValue(d)) => d.to_string(),
        Some(Value::BytesValue(b)) => String::from_utf8_lossy(b).to_string(),
        _ => String::new(),
    }
}

fn convert_available_components(components: &opamp_proto::proto::AvailableComponents) -> AvailableComponents {
    AvailableComponents {
        components: components
            .components
            .iter()
            .map(|(k, v)| (k.clone(), convert_component_details(v)))
            .collect(),
        hash: components.hash.clone(),
    }
}

fn convert_component_details(details: &opamp_proto::proto::ComponentDetails) -> ComponentDetails {
    ComponentDetails {
        metadata: details.metadata.clone(),
        sub_components: details
            .sub_components
            .iter()
            .map(|(k, v)| (k.clone(), convert_component_details(v)))
            .collect(),
    }
}

fn convert_health(health: &ProtoComponentHealth) -> ComponentHealth {
    ComponentHealth {
        healthy: health.healthy,
        start_time_unix_nano: health.start_time_unix_nano,
        last_error: health.last_error.clone(),
        component_tree: health
            .component_health_map
            .iter()
            .map(|(k, v)| (k.clone(), convert_health(v)))
            .collect(),
    }
}

fn convert_package_statuses(statuses: &ProtoPackageStatuses) -> HashMap<String, PackageStatusEntry> {
    statuses
        .packages
        .iter()
        .map(|(name, status)| {
            (
                name.clone(),
                PackageStatusEntry {
                    version: status.agent_has_version.clone(),
                    hash: status.agent_has_hash.clone(),
                    status: convert_package_install_status(status.status),
                    error: (!status.error_message.is_empty()).then(|| status.error_message.clone()),
                },
            )
        })
        .collect()
}

fn convert_package_install_status(raw: i32) -> PackageInstallStatus {
    use opamp_proto::proto::PackageStatusEnum;
    match PackageStatusEnum::try_from(raw).unwrap_or(PackageStatusEnum::Installed) {
        PackageStatusEnum::Installed => PackageInstallStatus::Installed,
        PackageStatusEnum::InstallFailed => PackageInstallStatus::Failed,
        PackageStatusEnum::InstallPending | PackageStatusEnum::Installing => {
            PackageInstallStatus::Installing
        }
    }
}

fn convert_remote_config_status(status: RemoteConfigStatuses) -> RemoteConfigStatus {
    match status {
        RemoteConfigStatuses::Unset => RemoteConfigStatus::Unset,
        RemoteConfigStatuses::Applying => RemoteConfigStatus::Applying,
        RemoteConfigStatuses::Applied => RemoteConfigStatus::Applied,
        RemoteConfigStatuses::Failed => RemoteConfigStatus::Failed,
    }
}

/// Collapses an `AgentConfigMap` to a single YAML document. Agents that
/// report more than one named section are out of scope (§1 Non-goals: the
/// control plane does not merge multi-file configs); the first entry wins.
fn flatten_config_map(config: &AgentConfigMap) -> String {
    config
        .config_map
        .values()
        .next()
        .map(|file| String::from_utf8_lossy(&file.body).to_string())
        .unwrap_or_default()
}

fn wrap_config_yaml(yaml: &str) -> AgentConfigMap {
    let mut config_map = HashMap::new();
    config_map.insert(
        String::new(),
        AgentConfigFile {
            body: yaml.as_bytes().to_vec(),
            content_type: "text/yaml".to_string(),
        },
    );
    AgentConfigMap { config_map }
}

/// Used by the rollout controller to hand C5 a new offer for an agent.
pub fn queue_offer(registry: &ConnectionRegistry, instance_uid: InstanceUid, offer: PendingOffer) {
    registry.set_pending_offer(instance_uid, offer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConfig;

    async fn engine() -> ProtocolEngine {
        let pool = DatabaseConfig::for_testing().connect().await.unwrap();
        ProtocolEngine::new(
            AgentStore::new(pool.clone()),
            DeploymentStore::new(pool.clone()),
            ConfigRequestStore::new(pool.clone()),
            AuthStore::new(pool),
            Arc::new(ConnectionRegistry::new()),
            Arc::new(Settings::default()),
        )
    }

    #[tokio::test]
    async fn replayed_sequence_leaves_capabilities_field_untouched() {
        let engine = engine().await;
        let instance_uid = [5u8; 16];
        let msg = AgentToServer {
            instance_uid: instance_uid.to_vec(),
            sequence_num: 5,
            capabilities: 0x3,
            ..Default::default()
        };
        let _ = engine.reconcile("acme", instance_uid, msg.clone()).await;

        let replay = AgentToServer {
            sequence_num: 5,
            capabilities: 0,
            ..msg
        };
        let _ = engine.reconcile("acme", instance_uid, replay).await;

        let stored = engine.agents.get("acme", &instance_uid).await.unwrap().unwrap();
        assert_eq!(stored.agent_capabilities, 0x3);
        assert_eq!(stored.last_sequence_num, 5);
    }

    #[tokio::test]
    async fn capability_missing_fails_pending_offer() {
        let engine = engine().await;
        let instance_uid = [6u8; 16];
        let msg = AgentToServer {
            instance_uid: instance_uid.to_vec(),
            sequence_num: 1,
            capabilities: 0,
            ..Default::default()
        };
        let _ = engine.reconcile("acme", instance_uid, msg).await;

        engine.registry.set_pending_offer(
            instance_uid,
            PendingOffer {
                deployment_id: "dep-1".to_string(),
                config_hash: vec![1, 2, 3],
                config_yaml: "receivers: {}".to_string(),
            },
        );

        let second = AgentToServer {
            instance_uid: instance_uid.to_vec(),
            sequence_num: 2,
            capabilities: 0,
            ..Default::default()
        };
        let response = engine.reconcile("acme", instance_uid, second).await;
        assert!(response.remote_config.is_none());
    }
}
