//! Agent store (C2): durable per-agent record, idempotent updates keyed on
//! instance-UID + sequence number (§4.2, P1).

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::error::ServerResult;
use crate::model::*;

/// Fields parsed out of an inbound `AgentToServer`. `None` means "unchanged
/// since the last message" per the OpAMP delta-reporting convention; the
/// store preserves whatever was previously stored for an absent field.
#[derive(Debug, Clone, Default)]
pub struct AgentPatch {
    pub sequence_num: u64,
    pub display_name: Option<String>,
    pub hostname: Option<String>,
    pub ip: Option<String>,
    pub tags: Option<Vec<String>>,
    pub agent_description: Option<AgentDescription>,
    pub agent_capabilities: Option<u64>,
    pub available_components: Option<AvailableComponents>,
    pub effective_config_hash: Option<Vec<u8>>,
    pub effective_config_yaml: Option<String>,
    pub effective_config_last_updated: Option<chrono::DateTime<Utc>>,
    pub remote_config_status: Option<RemoteConfigStatus>,
    pub remote_config_error: Option<String>,
    pub remote_config_hash: Option<Vec<u8>>,
    pub package_statuses: Option<HashMap<String, PackageStatusEntry>>,
    pub health: Option<ComponentHealth>,
}

#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub record: AgentRecord,
    /// True if `patch.sequence_num` was <= the previously stored value: the
    /// message was a replay and, aside from `last_seen`, nothing changed.
    pub replayed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AgentFilter {
    pub tag: Option<String>,
}

#[derive(Clone)]
pub struct AgentStore {
    pool: SqlitePool,
}

impl AgentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, org: &str, instance_uid: &InstanceUid) -> ServerResult<Option<AgentRecord>> {
        let row = sqlx::query("SELECT * FROM agents WHERE org = ?1 AND instance_uid = ?2")
            .bind(org)
            .bind(instance_uid.as_slice())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| row_to_record(&r)))
    }

    pub async fn list(&self, org: &str, filter: &AgentFilter) -> ServerResult<Vec<AgentRecord>> {
        let rows = sqlx::query("SELECT * FROM agents WHERE org = ?1")
            .bind(org)
            .fetch_all(&self.pool)
            .await?;
        let mut records: Vec<AgentRecord> = rows.iter().map(row_to_record).collect();
        if let Some(tag) = &filter.tag {
            records.retain(|r| r.tags.iter().any(|t| t == tag));
        }
        Ok(records)
    }

    /// §4.2: sequence-number-guarded merge. All callers for a single
    /// `instance_uid` must hold that agent's mutex (see `protocol`); this
    /// method itself only guarantees the single write is atomic.
    pub async fn upsert(
        &self,
        org: &str,
        instance_uid: &InstanceUid,
        patch: AgentPatch,
    ) -> ServerResult<UpsertOutcome> {
        let now = Utc::now();
        let existing = self.get(org, instance_uid).await?;

        let mut record = existing
            .clone()
            .unwrap_or_else(|| AgentRecord::new(org, *instance_uid));

        if existing.is_some() && patch.sequence_num <= record.last_sequence_num {
            record.last_seen = Some(now);
            self.write(&record).await?;
            return Ok(UpsertOutcome {
                record,
                replayed: true,
            });
        }

        if let Some(v) = patch.display_name {
            record.display_name = v;
        }
        if let Some(v) = patch.hostname {
            record.hostname = v;
        }
        if let Some(v) = patch.ip {
            record.ip = v;
        }
        if let Some(v) = patch.tags {
            record.tags = v;
        }
        if let Some(v) = patch.agent_description {
            record.agent_description = Some(v);
        }
        if let Some(v) = patch.agent_capabilities {
            record.agent_capabilities = v;
        }
        if let Some(v) = patch.available_components {
            record.available_components = Some(v);
        }
        if let Some(v) = patch.effective_config_hash {
            record.effective_config_hash = Some(v);
        }
        if let Some(v) = patch.effective_config_yaml {
            record.effective_config_yaml = Some(v);
        }
        if let Some(v) = patch.effective_config_last_updated {
            record.effective_config_last_updated = Some(v);
        }
        if let Some(v) = patch.remote_config_status {
            record.remote_config_status = v;
        }
        if let Some(v) = patch.remote_config_error {
            record.remote_config_error = Some(v);
        }
        if let Some(v) = patch.remote_config_hash {
            record.remote_config_hash = Some(v);
        }
        if let Some(v) = patch.package_statuses {
            record.package_statuses = v;
        }
        if let Some(v) = patch.health {
            record.health = Some(v);
        }

        record.last_sequence_num = patch.sequence_num;
        record.last_seen = Some(now);
        record.connection_status = ConnectionStatus::Connected;

        self.write(&record).await?;
        Ok(UpsertOutcome {
            record,
            replayed: false,
        })
    }

    pub async fn mark_disconnected(&self, org: &str, instance_uid: &InstanceUid) -> ServerResult<()> {
        if let Some(mut record) = self.get(org, instance_uid).await? {
            record.connection_status = ConnectionStatus::Disconnected;
            self.write(&record).await?;
        }
        Ok(())
    }

    pub async fn mark_registration_failed(
        &self,
        org: &str,
        instance_uid: &InstanceUid,
        reason: &str,
    ) -> ServerResult<()> {
        let mut record = self
            .get(org, instance_uid)
            .await?
            .unwrap_or_else(|| AgentRecord::new(org, *instance_uid));
        record.registration_failed = true;
        record.registration_failed_at = Some(Utc::now());
        record.registration_failure_reason = Some(reason.to_string());
        self.write(&record).await
    }

    pub async fn set_server_capabilities(
        &self,
        org: &str,
        instance_uid: &InstanceUid,
        bits: u64,
    ) -> ServerResult<()> {
        if let Some(mut record) = self.get(org, instance_uid).await? {
            record.server_capabilities = bits;
            self.write(&record).await?;
        }
        Ok(())
    }

    async fn write(&self, r: &AgentRecord) -> ServerResult<()> {
        sqlx::query(
            r#"
            INSERT INTO agents (
                org, instance_uid, display_name, hostname, ip, tags, agent_description,
                agent_capabilities, server_capabilities, available_components,
                effective_config_hash, effective_config_yaml, effective_config_last_updated,
                remote_config_hash, remote_config_status, remote_config_error,
                package_statuses, connection_settings_hashes, health,
                last_sequence_num, last_seen, connection_status,
                registration_failed, registration_failed_at, registration_failure_reason
            ) VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15,?16,?17,?18,?19,?20,?21,?22,?23,?24,?25)
            ON CONFLICT(org, instance_uid) DO UPDATE SET
                display_name = excluded.display_name,
                hostname = excluded.hostname,
                ip = excluded.ip,
                tags = excluded.tags,
                agent_description = excluded.agent_description,
                agent_capabilities = excluded.agent_capabilities,
                server_capabilities = excluded.server_capabilities,
                available_components = excluded.available_components,
                effective_config_hash = excluded.effective_config_hash,
                effective_config_yaml = excluded.effective_config_yaml,
                effective_config_last_updated = excluded.effective_config_last_updated,
                remote_config_hash = excluded.remote_config_hash,
                remote_config_status = excluded.remote_config_status,
                remote_config_error = excluded.remote_config_error,
                package_statuses = excluded.package_statuses,
                connection_settings_hashes = excluded.connection_settings_hashes,
                health = excluded.health,
                last_sequence_num = excluded.last_sequence_num,
                last_seen = excluded.last_seen,
                connection_status = excluded.connection_status,
                registration_failed = excluded.registration_failed,
                registration_failed_at = excluded.registration_failed_at,
                registration_failure_reason = excluded.registration_failure_reason
            "#,
        )
        .bind(&r.org)
        .bind(r.instance_uid.as_slice())
        .bind(&r.display_name)
        .bind(&r.hostname)
        .bind(&r.ip)
        .bind(serde_json::to_string(&r.tags).unwrap())
        .bind(r.agent_description.as_ref().map(|v| serde_json::to_string(v).unwrap()))
        .bind(r.agent_capabilities as i64)
        .bind(r.server_capabilities as i64)
        .bind(r.available_components.as_ref().map(|v| serde_json::to_string(v).unwrap()))
        .bind(r.effective_config_hash.clone())
        .bind(&r.effective_config_yaml)
        .bind(r.effective_config_last_updated.map(|t| t.to_rfc3339()))
        .bind(r.remote_config_hash.clone())
        .bind(serde_json::to_string(&r.remote_config_status).unwrap())
        .bind(&r.remote_config_error)
        .bind(serde_json::to_string(&r.package_statuses).unwrap())
        .bind(serde_json::to_string(&r.connection_settings_hashes).unwrap())
        .bind(r.health.as_ref().map(|v| serde_json::to_string(v).unwrap()))
        .bind(r.last_sequence_num as i64)
        .bind(r.last_seen.map(|t| t.to_rfc3339()))
        .bind(serde_json::to_string(&r.connection_status).unwrap())
        .bind(r.registration_failed)
        .bind(r.registration_failed_at.map(|t| t.to_rfc3339()))
        .bind(&r.registration_failure_reason)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> AgentRecord {
    let instance_uid_bytes: Vec<u8> = row.get("instance_uid");
    let mut instance_uid = [0u8; 16];
    instance_uid.copy_from_slice(&instance_uid_bytes[..16]);

    AgentRecord {
        org: row.get("org"),
        instance_uid,
        display_name: row.get("display_name"),
        hostname: row.get("hostname"),
        ip: row.get("ip"),
        tags: json_col(row, "tags").unwrap_or_default(),
        agent_description: json_col(row, "agent_description"),
        agent_capabilities: row.get::<i64, _>("agent_capabilities") as u64,
        server_capabilities: row.get::<i64, _>("server_capabilities") as u64,
        available_components: json_col(row, "available_components"),
        effective_config_hash: row.get("effective_config_hash"),
        effective_config_yaml: row.get("effective_config_yaml"),
        effective_config_last_updated: rfc3339_col(row, "effective_config_last_updated"),
        remote_config_hash: row.get("remote_config_hash"),
        remote_config_status: json_col(row, "remote_config_status").unwrap_or_default(),
        remote_config_error: row.get("remote_config_error"),
        package_statuses: json_col(row, "package_statuses").unwrap_or_default(),
        connection_settings_hashes: json_col(row, "connection_settings_hashes").unwrap_or_default(),
        health: json_col(row, "health"),
        last_sequence_num: row.get::<i64, _>("last_sequence_num") as u64,
        last_seen: rfc3339_col(row, "last_seen"),
        connection_status: json_col(row, "connection_status").unwrap_or_default(),
        registration_failed: row.get("registration_failed"),
        registration_failed_at: rfc3339_col(row, "registration_failed_at"),
        registration_failure_reason: row.get("registration_failure_reason"),
    }
}

fn json_col<T: serde::de::DeserializeOwned>(row: &sqlx::sqlite::SqliteRow, name: &str) -> Option<T> {
    let raw: Option<String> = row.get(name);
    raw.and_then(|s| serde_json::from_str(&s).ok())
}

fn rfc3339_col(row: &sqlx::sqlite::SqliteRow, name: &str) -> Option<chrono::DateTime<Utc>> {
    let raw: Option<String> = row.get(name);
    raw.and_then(|s| chrono::DateTime::parse_from_rfc3339(&s).ok())
        .map(|t| t.with_timezone(&Utc))
}
