//! Operator API surface (C9): thin query/command endpoints over C2-C7.
//! Routing is a static table of (method, path, handler), per §9's design
//! note against decorator-style routing — `axum::Router::route` is exactly
//! that table.

mod agents;
mod auth;
mod compare;
mod config_requests;
mod deployments;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registration-tokens", post(auth::issue_registration_token))
        .route("/gateways", post(auth::register_gateway))
        .route("/opamp-config/deployments", post(deployments::create))
        .route(
            "/opamp-config/deployments/{id}/status",
            get(deployments::status),
        )
        .route(
            "/opamp-config/deployments/{id}/rollback",
            post(deployments::rollback),
        )
        .route("/opamp-config/compare", post(compare::compare))
        .route(
            "/agents/{instance_id}/request-effective-config",
            post(config_requests::request),
        )
        .route(
            "/agents/{instance_id}/config-requests/{tracking_id}",
            get(config_requests::poll),
        )
        .route("/agents", get(agents::list))
        .route("/agents/{instance_id}", get(agents::get))
        .route("/agents/{instance_id}/restart", post(agents::restart))
}
