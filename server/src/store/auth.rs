//! Auth adapter (C8): one-shot registration tokens that mint a long-lived
//! OpAMP bearer token on first use, and validation of that bearer token on
//! every subsequent connection.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sqlx::{Row, SqlitePool};

use crate::error::{ServerError, ServerResult};
use crate::model::{InstanceUid, RegistrationToken};

#[derive(Clone)]
pub struct AuthStore {
    pool: SqlitePool,
}

/// Distinguishes "no such token" from "token resolved to a real org but is
/// expired or already consumed", so callers can decide whether a failed
/// registration attempt ever had an org to record against (§4.8).
#[derive(Debug)]
pub enum ConsumeError {
    NotFound,
    Invalid { org: String },
    Store(ServerError),
}

impl From<sqlx::Error> for ConsumeError {
    fn from(e: sqlx::Error) -> Self {
        ConsumeError::Store(e.into())
    }
}

impl From<ConsumeError> for ServerError {
    fn from(e: ConsumeError) -> Self {
        match e {
            ConsumeError::NotFound | ConsumeError::Invalid { .. } => ServerError::RegistrationTokenInvalid,
            ConsumeError::Store(e) => e,
        }
    }
}

impl AuthStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn issue_registration_token(
        &self,
        org: &str,
        ttl: Duration,
    ) -> ServerResult<RegistrationToken> {
        let token = RegistrationToken {
            id: uuid::Uuid::now_v7().to_string(),
            org: org.to_string(),
            one_shot_secret: random_secret(),
            expires_at: Utc::now() + ttl,
            consumed_at: None,
        };

        sqlx::query(
            r#"INSERT INTO registration_tokens (id, org, one_shot_secret, expires_at)
               VALUES (?1,?2,?3,?4)"#,
        )
        .bind(&token.id)
        .bind(&token.org)
        .bind(&token.one_shot_secret)
        .bind(token.expires_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(token)
    }

    /// Atomically consumes a one-shot registration secret (the `UPDATE`'s
    /// `WHERE consumed_at IS NULL` is the compare-and-swap: a second caller
    /// racing on the same secret affects zero rows), then mints a bearer
    /// token for the agent. Returns `ConsumeError::NotFound` when the secret
    /// never resolved to a token row (no org to attribute a failure to), and
    /// `ConsumeError::Invalid { org }` when it resolved to a real, expired or
    /// already-consumed token (§4.8: "if creation had already begun").
    pub async fn consume_registration_token(
        &self,
        one_shot_secret: &str,
        instance_uid: &InstanceUid,
    ) -> Result<String, ConsumeError> {
        let row = sqlx::query(
            "SELECT id, org, expires_at FROM registration_tokens WHERE one_shot_secret = ?1",
        )
        .bind(one_shot_secret)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ConsumeError::NotFound)?;

        let id: String = row.get("id");
        let org: String = row.get("org");
        let expires_at: String = row.get("expires_at");
        let expires_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&expires_at)
            .map_err(|e| {
                ConsumeError::Store(ServerError::Configuration {
                    field: "registration_tokens.expires_at".into(),
                    reason: e.to_string(),
                })
            })?
            .with_timezone(&Utc);
        if expires_at < Utc::now() {
            return Err(ConsumeError::Invalid { org });
        }

        let result = sqlx::query(
            "UPDATE registration_tokens SET consumed_at = ?1 WHERE id = ?2 AND consumed_at IS NULL",
        )
        .bind(Utc::now().to_rfc3339())
        .bind(&id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(ConsumeError::Invalid { org });
        }

        self.mint_bearer_token(&org, instance_uid)
            .await
            .map_err(ConsumeError::Store)
    }

    pub async fn mint_bearer_token(&self, org: &str, instance_uid: &InstanceUid) -> ServerResult<String> {
        let token = random_secret();
        sqlx::query(
            "INSERT INTO opamp_tokens (token, org, instance_uid, created_at) VALUES (?1,?2,?3,?4)",
        )
        .bind(&token)
        .bind(org)
        .bind(instance_uid.as_slice())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(token)
    }

    /// Returns the `(org, instance_uid)` a bearer token was minted for, or
    /// `BearerTokenInvalid` if it's unknown or has been revoked (deleted).
    pub async fn validate_bearer_token(&self, token: &str) -> ServerResult<(String, InstanceUid)> {
        let row = sqlx::query("SELECT org, instance_uid FROM opamp_tokens WHERE token = ?1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServerError::BearerTokenInvalid)?;

        let org: String = row.get("org");
        let instance_uid_bytes: Vec<u8> = row.get("instance_uid");
        let mut instance_uid = [0u8; 16];
        instance_uid.copy_from_slice(&instance_uid_bytes[..16]);
        Ok((org, instance_uid))
    }

    pub async fn revoke_bearer_token(&self, token: &str) -> ServerResult<()> {
        sqlx::query("DELETE FROM opamp_tokens WHERE token = ?1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn random_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex_encode(&bytes)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConfig;

    async fn test_store() -> AuthStore {
        let pool = DatabaseConfig::for_testing().connect().await.unwrap();
        AuthStore::new(pool)
    }

    #[tokio::test]
    async fn registration_token_is_single_use() {
        let store = test_store().await;
        let instance_uid = [9u8; 16];
        let token = store
            .issue_registration_token("acme", Duration::minutes(5))
            .await
            .unwrap();

        let bearer = store
            .consume_registration_token(&token.one_shot_secret, &instance_uid)
            .await
            .unwrap();
        assert!(store.validate_bearer_token(&bearer).await.is_ok());

        let second_attempt = store
            .consume_registration_token(&token.one_shot_secret, &instance_uid)
            .await;
        assert!(second_attempt.is_err());
    }

    #[tokio::test]
    async fn expired_registration_token_is_rejected() {
        let store = test_store().await;
        let token = store
            .issue_registration_token("acme", Duration::seconds(-1))
            .await
            .unwrap();
        let result = store
            .consume_registration_token(&token.one_shot_secret, &[1u8; 16])
            .await;
        assert!(result.is_err());
    }
}
