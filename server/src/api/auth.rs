//! Registration endpoints (§6): operators mint one-shot registration
//! tokens; agents redeem a token for a long-lived OpAMP bearer token.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::model::{instance_uid_to_hex, parse_instance_uid};
use crate::state::AppState;
use crate::store::auth::ConsumeError;

#[derive(Debug, Deserialize)]
pub struct IssueRegistrationTokenRequest {
    pub org: String,
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: i64,
}

fn default_ttl_secs() -> i64 {
    3600
}

#[derive(Debug, Serialize)]
pub struct IssueRegistrationTokenResponse {
    pub id: String,
    pub token: String,
}

pub async fn issue_registration_token(
    State(state): State<AppState>,
    Json(req): Json<IssueRegistrationTokenRequest>,
) -> ServerResult<Json<IssueRegistrationTokenResponse>> {
    let token = state
        .auth
        .issue_registration_token(&req.org, Duration::seconds(req.ttl_secs))
        .await?;
    Ok(Json(IssueRegistrationTokenResponse {
        id: token.id,
        token: token.one_shot_secret,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RegisterGatewayRequest {
    pub name: String,
    pub instance_id: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub metadata: std::collections::HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterGatewayResponse {
    pub id: String,
    pub opamp_token: String,
    pub opamp_endpoint: String,
}

/// `POST /gateways`. The one-shot registration token is consumed here; a
/// second call with the same token gets `RegistrationTokenInvalid` (401).
pub async fn register_gateway(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RegisterGatewayRequest>,
) -> ServerResult<Json<RegisterGatewayResponse>> {
    let secret = bearer_token(&headers).ok_or(ServerError::RegistrationTokenInvalid)?;
    let instance_uid =
        parse_instance_uid(&req.instance_id).ok_or(ServerError::RegistrationTokenInvalid)?;

    let bearer = match state.auth.consume_registration_token(secret, &instance_uid).await {
        Ok(token) => token,
        // Resolved to a real token row: a registration had already begun
        // for this org, so it's worth recording the failure against it.
        Err(ConsumeError::Invalid { org }) => {
            let _ = state
                .agents
                .mark_registration_failed(&org, &instance_uid, "registration token expired or already consumed")
                .await;
            return Err(ServerError::RegistrationTokenInvalid);
        }
        // No token ever matched this secret: nothing was ever created for
        // this instance_uid, so there's no org to attribute the row to.
        Err(ConsumeError::NotFound) => return Err(ServerError::RegistrationTokenInvalid),
        Err(ConsumeError::Store(e)) => return Err(e),
    };

    Ok(Json(RegisterGatewayResponse {
        id: instance_uid_to_hex(&instance_uid),
        opamp_token: bearer,
        opamp_endpoint: format!("ws://{}/v1/opamp", state.settings.bind_addr),
    }))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
