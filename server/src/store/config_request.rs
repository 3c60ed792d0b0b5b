//! Config-request tracker (C7): correlates an operator's "fetch effective
//! config" request with the agent's later `AgentToServer` reply.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::error::{ServerError, ServerResult};
use crate::model::*;

#[derive(Clone)]
pub struct ConfigRequestStore {
    pool: SqlitePool,
}

impl ConfigRequestStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn request(&self, org: &str, instance_uid: &InstanceUid) -> ServerResult<ConfigRequestRecord> {
        let record = ConfigRequestRecord {
            tracking_id: uuid::Uuid::now_v7().to_string(),
            org: org.to_string(),
            instance_uid: *instance_uid,
            requested_at: Utc::now(),
            completed_at: None,
            status: ConfigRequestStatus::Pending,
            effective_config_yaml: None,
            effective_config_hash: None,
            error: None,
        };

        sqlx::query(
            r#"INSERT INTO config_requests (tracking_id, org, instance_uid, requested_at, status)
               VALUES (?1,?2,?3,?4,?5)"#,
        )
        .bind(&record.tracking_id)
        .bind(&record.org)
        .bind(record.instance_uid.as_slice())
        .bind(record.requested_at.to_rfc3339())
        .bind(serde_json::to_string(&record.status).unwrap())
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn get(&self, tracking_id: &str) -> ServerResult<ConfigRequestRecord> {
        let row = sqlx::query("SELECT * FROM config_requests WHERE tracking_id = ?1")
            .bind(tracking_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServerError::ConfigRequestNotFound)?;
        Ok(row_to_record(&row))
    }

    /// Closes the oldest still-pending request for this agent, attaching the
    /// effective config the agent reported. Later requests remain pending:
    /// each tracking ID round-trips to exactly one reply.
    pub async fn resolve(
        &self,
        instance_uid: &InstanceUid,
        effective_config_yaml: &str,
        effective_config_hash: &[u8],
    ) -> ServerResult<Option<ConfigRequestRecord>> {
        let row = sqlx::query(
            r#"SELECT tracking_id FROM config_requests
               WHERE instance_uid = ?1 AND status = ?2
               ORDER BY requested_at ASC LIMIT 1"#,
        )
        .bind(instance_uid.as_slice())
        .bind(serde_json::to_string(&ConfigRequestStatus::Pending).unwrap())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let tracking_id: String = row.get("tracking_id");

        sqlx::query(
            r#"UPDATE config_requests SET status = ?1, completed_at = ?2,
               effective_config_yaml = ?3, effective_config_hash = ?4
               WHERE tracking_id = ?5"#,
        )
        .bind(serde_json::to_string(&ConfigRequestStatus::Completed).unwrap())
        .bind(Utc::now().to_rfc3339())
        .bind(effective_config_yaml)
        .bind(effective_config_hash)
        .bind(&tracking_id)
        .execute(&self.pool)
        .await?;

        Ok(Some(self.get(&tracking_id).await?))
    }

    /// Marks every request older than `now - expiry` still pending as expired.
    pub async fn expire_overdue(&self, expiry: chrono::Duration) -> ServerResult<u64> {
        let cutoff: DateTime<Utc> = Utc::now() - expiry;
        let result = sqlx::query(
            r#"UPDATE config_requests SET status = ?1, completed_at = ?2
               WHERE status = ?3 AND requested_at < ?4"#,
        )
        .bind(serde_json::to_string(&ConfigRequestStatus::Expired).unwrap())
        .bind(Utc::now().to_rfc3339())
        .bind(serde_json::to_string(&ConfigRequestStatus::Pending).unwrap())
        .bind(cutoff.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}

fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> ConfigRequestRecord {
    let instance_uid_bytes: Vec<u8> = row.get("instance_uid");
    let mut instance_uid = [0u8; 16];
    instance_uid.copy_from_slice(&instance_uid_bytes[..16]);

    ConfigRequestRecord {
        tracking_id: row.get("tracking_id"),
        org: row.get("org"),
        instance_uid,
        requested_at: rfc3339(row, "requested_at").unwrap_or_else(Utc::now),
        completed_at: rfc3339(row, "completed_at"),
        status: json_str(row, "status").unwrap_or(ConfigRequestStatus::Pending),
        effective_config_yaml: row.get("effective_config_yaml"),
        effective_config_hash: row.get("effective_config_hash"),
        error: row.get("error"),
    }
}

fn json_str<T: serde::de::DeserializeOwned>(row: &sqlx::sqlite::SqliteRow, name: &str) -> Option<T> {
    let raw: String = row.get(name);
    serde_json::from_str(&raw).ok()
}

fn rfc3339(row: &sqlx::sqlite::SqliteRow, name: &str) -> Option<DateTime<Utc>> {
    let raw: Option<String> = row.get(name);
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConfig;

    async fn test_store() -> ConfigRequestStore {
        let pool = DatabaseConfig::for_testing().connect().await.unwrap();
        ConfigRequestStore::new(pool)
    }

    #[tokio::test]
    async fn resolve_closes_oldest_pending_request() {
        let store = test_store().await;
        let instance_uid = [7u8; 16];
        let first = store.request("acme", &instance_uid).await.unwrap();
        let _second = store.request("acme", &instance_uid).await.unwrap();

        let resolved = store
            .resolve(&instance_uid, "recv: {}", b"hash")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.tracking_id, first.tracking_id);
        assert!(matches!(resolved.status, ConfigRequestStatus::Completed));
    }
}
