//! Deployment store (C3): versioned configs, targets, per-agent audit rows.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::error::{ServerError, ServerResult};
use crate::model::*;

#[derive(Clone)]
pub struct DeploymentStore {
    pool: SqlitePool,
}

impl DeploymentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Assigns the next per-org `config_version`, computes `config_hash`,
    /// and inserts an UNSET audit row for every targeted instance.
    pub async fn create(
        &self,
        spec: DeploymentSpec,
        targets: &[InstanceUid],
    ) -> ServerResult<Deployment> {
        // §1: "a basic well-formedness check", not semantic validation.
        serde_yaml::from_str::<serde_yaml::Value>(&spec.config_yaml)
            .map_err(|e| ServerError::InvalidYaml(e.to_string()))?;

        let mut tx = self.pool.begin().await?;

        let next_version: i64 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(config_version), 0) + 1 FROM deployments WHERE org = ?1",
        )
        .bind(&spec.org)
        .fetch_one(&mut *tx)
        .await?;

        let deployment = Deployment {
            id: uuid::Uuid::now_v7().to_string(),
            org: spec.org.clone(),
            name: spec.name.clone(),
            config_version: next_version,
            config_hash: hash_config_yaml(&spec.config_yaml),
            config_yaml: spec.config_yaml.clone(),
            rollout_strategy: spec.rollout_strategy,
            canary_percentage: spec.canary_percentage,
            target_tags: spec.target_tags.clone(),
            status: DeploymentStatus::Pending,
            status_reason: None,
            ignore_failures: spec.ignore_failures,
            started_at: None,
            completed_at: None,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"INSERT INTO deployments (
                id, org, name, config_version, config_hash, config_yaml, rollout_strategy,
                canary_percentage, target_tags, status, status_reason, ignore_failures,
                started_at, completed_at, created_at
            ) VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15)"#,
        )
        .bind(&deployment.id)
        .bind(&deployment.org)
        .bind(&deployment.name)
        .bind(deployment.config_version)
        .bind(&deployment.config_hash)
        .bind(&deployment.config_yaml)
        .bind(serde_json::to_string(&deployment.rollout_strategy).unwrap())
        .bind(deployment.canary_percentage as i64)
        .bind(serde_json::to_string(&deployment.target_tags).unwrap())
        .bind(serde_json::to_string(&deployment.status).unwrap())
        .bind(&deployment.status_reason)
        .bind(deployment.ignore_failures)
        .bind(deployment.started_at.map(|t| t.to_rfc3339()))
        .bind(deployment.completed_at.map(|t| t.to_rfc3339()))
        .bind(deployment.created_at.to_rfc3339())
        .execute(&mut *tx)
        .await?;

        for instance_uid in targets {
            sqlx::query(
                r#"INSERT INTO deployment_audit (deployment_id, instance_uid, config_hash, status)
                   VALUES (?1,?2,?3,?4)"#,
            )
            .bind(&deployment.id)
            .bind(instance_uid.as_slice())
            .bind(&deployment.config_hash)
            .bind(serde_json::to_string(&AuditStatus::Unset).unwrap())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(deployment)
    }

    pub async fn get(&self, id: &str) -> ServerResult<Deployment> {
        let row = sqlx::query("SELECT * FROM deployments WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServerError::DeploymentNotFound)?;
        Ok(row_to_deployment(&row))
    }

    /// Looks up the deployment a reported `remote_config` hash belongs to,
    /// so C5 can update the right audit row on APPLIED/FAILED (§4.5 step 4).
    pub async fn get_by_hash(&self, org: &str, config_hash: &[u8]) -> ServerResult<Option<Deployment>> {
        let row = sqlx::query("SELECT * FROM deployments WHERE org = ?1 AND config_hash = ?2")
            .bind(org)
            .bind(config_hash)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| row_to_deployment(&r)))
    }

    pub async fn set_status(
        &self,
        id: &str,
        status: DeploymentStatus,
        reason: Option<&str>,
    ) -> ServerResult<()> {
        let now = Utc::now();
        let (started_clause, completed_clause) = match status {
            DeploymentStatus::InProgress => (Some(now), None),
            DeploymentStatus::Completed
            | DeploymentStatus::Failed
            | DeploymentStatus::RolledBack => (None, Some(now)),
            DeploymentStatus::Pending => (None, None),
        };

        sqlx::query(
            r#"UPDATE deployments SET status = ?1, status_reason = ?2,
               started_at = COALESCE(?3, started_at),
               completed_at = COALESCE(?4, completed_at)
               WHERE id = ?5"#,
        )
        .bind(serde_json::to_string(&status).unwrap())
        .bind(reason)
        .bind(started_clause.map(|t| t.to_rfc3339()))
        .bind(completed_clause.map(|t| t.to_rfc3339()))
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// §4.6 tie-break: a later deployment targeting an overlapping agent set
    /// supersedes earlier, still-active deployments for those agents.
    pub async fn supersede_overlapping(
        &self,
        org: &str,
        newer_id: &str,
        targets: &[InstanceUid],
    ) -> ServerResult<()> {
        let active_rows = sqlx::query(
            "SELECT id FROM deployments WHERE org = ?1 AND id != ?2 AND status IN ('\"pending\"','\"in_progress\"')",
        )
        .bind(org)
        .bind(newer_id)
        .fetch_all(&self.pool)
        .await?;

        for row in active_rows {
            let id: String = row.get("id");
            let audited = self.list_audit_by_deployment(&id).await?;
            let overlaps = audited
                .iter()
                .any(|a| targets.iter().any(|t| t == &a.instance_uid));
            if overlaps {
                self.set_status(&id, DeploymentStatus::Failed, Some("superseded"))
                    .await?;
            }
        }
        Ok(())
    }

    pub async fn set_audit_row(
        &self,
        deployment_id: &str,
        instance_uid: &InstanceUid,
        status: AuditStatus,
        effective_config_hash: Option<&[u8]>,
        error: Option<&str>,
    ) -> ServerResult<()> {
        sqlx::query(
            r#"UPDATE deployment_audit SET status = ?1, effective_config_hash = ?2, error = ?3, reported_at = ?4
               WHERE deployment_id = ?5 AND instance_uid = ?6"#,
        )
        .bind(serde_json::to_string(&status).unwrap())
        .bind(effective_config_hash)
        .bind(error)
        .bind(Utc::now().to_rfc3339())
        .bind(deployment_id)
        .bind(instance_uid.as_slice())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_audit_row(
        &self,
        deployment_id: &str,
        instance_uid: &InstanceUid,
    ) -> ServerResult<Option<DeploymentAudit>> {
        let row = sqlx::query(
            "SELECT * FROM deployment_audit WHERE deployment_id = ?1 AND instance_uid = ?2",
        )
        .bind(deployment_id)
        .bind(instance_uid.as_slice())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| row_to_audit(&r)))
    }

    pub async fn list_audit_by_deployment(&self, deployment_id: &str) -> ServerResult<Vec<DeploymentAudit>> {
        let rows = sqlx::query("SELECT * FROM deployment_audit WHERE deployment_id = ?1")
            .bind(deployment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(row_to_audit).collect())
    }

    /// History of deployments applied to a given agent, most recent first.
    /// Used to find "the previous successful config" for rollback (§4.6).
    pub async fn list_history_by_agent(&self, instance_uid: &InstanceUid) -> ServerResult<Vec<(Deployment, DeploymentAudit)>> {
        let rows = sqlx::query(
            r#"SELECT d.*, a.status as audit_status, a.effective_config_hash as audit_effective_config_hash,
                      a.error as audit_error, a.reported_at as audit_reported_at, a.config_hash as audit_config_hash
               FROM deployment_audit a JOIN deployments d ON d.id = a.deployment_id
               WHERE a.instance_uid = ?1 ORDER BY d.created_at DESC"#,
        )
        .bind(instance_uid.as_slice())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let deployment = row_to_deployment(row);
                let audit = DeploymentAudit {
                    deployment_id: deployment.id.clone(),
                    instance_uid: *instance_uid,
                    config_hash: row.get("audit_config_hash"),
                    status: json_str(row, "audit_status").unwrap_or(AuditStatus::Unset),
                    effective_config_hash: row.get("audit_effective_config_hash"),
                    error: row.get("audit_error"),
                    reported_at: rfc3339(row, "audit_reported_at"),
                };
                (deployment, audit)
            })
            .collect())
    }

    /// Most recent deployment this agent has APPLIED, excluding the given
    /// deployment id. Used to compute the rollback target.
    pub async fn last_applied_before(
        &self,
        instance_uid: &InstanceUid,
        excluding: &str,
    ) -> ServerResult<Option<Deployment>> {
        let history = self.list_history_by_agent(instance_uid).await?;
        Ok(history
            .into_iter()
            .find(|(d, a)| d.id != excluding && matches!(a.status, AuditStatus::Applied))
            .map(|(d, _)| d))
    }
}

fn row_to_deployment(row: &sqlx::sqlite::SqliteRow) -> Deployment {
    Deployment {
        id: row.get("id"),
        org: row.get("org"),
        name: row.get("name"),
        config_version: row.get("config_version"),
        config_hash: row.get("config_hash"),
        config_yaml: row.get("config_yaml"),
        rollout_strategy: json_str(row, "rollout_strategy").unwrap_or(RolloutStrategy::Immediate),
        canary_percentage: row.get::<i64, _>("canary_percentage") as u8,
        target_tags: json_str(row, "target_tags").unwrap_or_default(),
        status: json_str(row, "status").unwrap_or(DeploymentStatus::Pending),
        status_reason: row.get("status_reason"),
        ignore_failures: row.get("ignore_failures"),
        started_at: rfc3339(row, "started_at"),
        completed_at: rfc3339(row, "completed_at"),
        created_at: rfc3339(row, "created_at").unwrap_or_else(Utc::now),
    }
}

fn row_to_audit(row: &sqlx::sqlite::SqliteRow) -> DeploymentAudit {
    let instance_uid_bytes: Vec<u8> = row.get("instance_uid");
    let mut instance_uid = [0u8; 16];
    instance_uid.copy_from_slice(&instance_uid_bytes[..16]);
    DeploymentAudit {
        deployment_id: row.get("deployment_id"),
        instance_uid,
        config_hash: row.get("config_hash"),
        status: json_str(row, "status").unwrap_or(AuditStatus::Unset),
        effective_config_hash: row.get("effective_config_hash"),
        error: row.get("error"),
        reported_at: rfc3339(row, "reported_at"),
    }
}

fn json_str<T: serde::de::DeserializeOwned>(row: &sqlx::sqlite::SqliteRow, name: &str) -> Option<T> {
    let raw: String = row.get(name);
    serde_json::from_str(&raw).ok()
}

fn rfc3339(row: &sqlx::sqlite::SqliteRow, name: &str) -> Option<chrono::DateTime<Utc>> {
    let raw: Option<String> = row.get(name);
    raw.and_then(|s| chrono::DateTime::parse_from_rfc3339(&s).ok())
        .map(|t| t.with_timezone(&Utc))
}
