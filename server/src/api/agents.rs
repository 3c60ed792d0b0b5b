//! Agent inventory and command endpoints (§6).

use axum::extract::{Path, Query, State};
use axum::Json;
use opamp_proto::proto::AgentCapabilities;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ServerError, ServerResult};
use crate::model::parse_instance_uid;
use crate::model::AgentRecord;
use crate::state::AppState;
use crate::store::agent::AgentFilter;
use crate::wire::DecodedCapabilities;

#[derive(Debug, Deserialize)]
pub struct ListAgentsQuery {
    pub org: String,
    pub tag: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListAgentsQuery>,
) -> ServerResult<Json<Vec<AgentRecord>>> {
    let filter = AgentFilter { tag: query.tag };
    let agents = state.agents.list(&query.org, &filter).await?;
    Ok(Json(agents))
}

#[derive(Debug, Deserialize)]
pub struct GetAgentQuery {
    pub org: String,
}

pub async fn get(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
    Query(query): Query<GetAgentQuery>,
) -> ServerResult<Json<AgentRecord>> {
    let instance_uid = parse_instance_uid(&instance_id).ok_or(ServerError::AgentNotFound)?;
    let agent = state
        .agents
        .get(&query.org, &instance_uid)
        .await?
        .ok_or(ServerError::AgentNotFound)?;
    Ok(Json(agent))
}

#[derive(Debug, Deserialize)]
pub struct RestartQuery {
    pub org: String,
}

/// Queues a restart command (§4.5), delivered on this agent's next
/// `ServerToAgent`. Requires `AcceptsRestartCommand`; the command sits
/// queued until an agent that dropped the bit reconnects with it set.
pub async fn restart(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
    Query(query): Query<RestartQuery>,
) -> ServerResult<Json<Value>> {
    let instance_uid = parse_instance_uid(&instance_id).ok_or(ServerError::AgentNotFound)?;
    let agent = state
        .agents
        .get(&query.org, &instance_uid)
        .await?
        .ok_or(ServerError::AgentNotFound)?;

    let caps = DecodedCapabilities::from_bits(agent.agent_capabilities);
    if !caps.has(AgentCapabilities::AcceptsRestartCommand) {
        return Err(ServerError::CapabilityMissing("AcceptsRestartCommand"));
    }

    state.registry.request_restart(instance_uid);
    Ok(Json(json!({ "status": "pending" })))
}
