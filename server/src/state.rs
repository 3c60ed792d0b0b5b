//! Shared application state threaded through axum handlers and the OpAMP
//! transport endpoints. Cheap to clone: stores wrap a pooled `SqlitePool`,
//! everything else is behind an `Arc`.

use std::sync::Arc;

use crate::config::Settings;
use crate::protocol::ProtocolEngine;
use crate::registry::ConnectionRegistry;
use crate::rollout::RolloutController;
use crate::store::{AgentStore, AuthStore, ConfigRequestStore, DeploymentStore};

#[derive(Clone)]
pub struct AppState {
    pub agents: AgentStore,
    pub deployments: DeploymentStore,
    pub config_requests: ConfigRequestStore,
    pub auth: AuthStore,
    pub registry: Arc<ConnectionRegistry>,
    pub engine: Arc<ProtocolEngine>,
    pub rollout: Arc<RolloutController>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool, settings: Settings) -> Self {
        let settings = Arc::new(settings);
        let agents = AgentStore::new(pool.clone());
        let deployments = DeploymentStore::new(pool.clone());
        let config_requests = ConfigRequestStore::new(pool.clone());
        let auth = AuthStore::new(pool.clone());
        let registry = Arc::new(ConnectionRegistry::new());

        let engine = Arc::new(ProtocolEngine::new(
            agents.clone(),
            deployments.clone(),
            config_requests.clone(),
            auth.clone(),
            registry.clone(),
            settings.clone(),
        ));
        let rollout = Arc::new(RolloutController::new(
            agents.clone(),
            deployments.clone(),
            registry.clone(),
            settings.clone(),
        ));

        Self {
            agents,
            deployments,
            config_requests,
            auth,
            registry,
            engine,
            rollout,
            settings,
        }
    }
}
