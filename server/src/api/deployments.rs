//! Deployment endpoints (§6): create a rollout, poll its progress, trigger
//! a manual rollback.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::ServerResult;
use crate::model::{Deployment, DeploymentSpec};
use crate::rollout::DeploymentProgress;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(spec): Json<DeploymentSpec>,
) -> ServerResult<Json<Deployment>> {
    let deployment = state.rollout.create_and_run(spec).await?;
    Ok(Json(deployment))
}

#[derive(Debug, Serialize)]
pub struct DeploymentStatusResponse {
    #[serde(flatten)]
    pub deployment: Deployment,
    pub progress: DeploymentProgress,
}

pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<DeploymentStatusResponse>> {
    let deployment = state.deployments.get(&id).await?;
    let progress = state.rollout.progress(&id).await?;
    Ok(Json(DeploymentStatusResponse {
        deployment,
        progress,
    }))
}

pub async fn rollback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Deployment>> {
    let deployment = state.deployments.get(&id).await?;
    let targets: Vec<_> = state
        .deployments
        .list_audit_by_deployment(&id)
        .await?
        .into_iter()
        .map(|a| a.instance_uid)
        .collect();
    let result = state.rollout.rollback(&deployment, &targets).await?;
    Ok(Json(result))
}
