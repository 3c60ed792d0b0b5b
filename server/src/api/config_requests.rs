//! Effective-config fetch endpoints (§6, §4.7, P6): operators ask an agent
//! to report its effective config; the reply is correlated asynchronously
//! via a tracking ID once the agent's next `AgentToServer` arrives.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::{ServerError, ServerResult};
use crate::model::{parse_instance_uid, ConfigRequestRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RequestQuery {
    pub org: String,
}

pub async fn request(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
    Query(query): Query<RequestQuery>,
) -> ServerResult<Json<ConfigRequestRecord>> {
    let instance_uid = parse_instance_uid(&instance_id).ok_or(ServerError::AgentNotFound)?;
    let record = state.config_requests.request(&query.org, &instance_uid).await?;
    state.registry.request_full_state(instance_uid);
    Ok(Json(record))
}

pub async fn poll(
    State(state): State<AppState>,
    Path((_instance_id, tracking_id)): Path<(String, String)>,
) -> ServerResult<Json<ConfigRequestRecord>> {
    let record = state.config_requests.get(&tracking_id).await?;
    Ok(Json(record))
}
