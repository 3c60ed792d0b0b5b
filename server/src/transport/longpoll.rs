//! HTTP long-poll transport: one `AgentToServer` per request body, one
//! `ServerToAgent` per response body. No session is registered in C4 for
//! this transport — there's nothing to push onto outside the request that's
//! already open, so queued offers wait for the agent's next poll.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;
use crate::state::AppState;

pub async fn handle(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(token) = super::bearer_token(&headers) else {
        return ServerError::BearerTokenInvalid.into_response();
    };
    let (org, instance_uid) = match state.engine.authenticate(token).await {
        Ok(pair) => pair,
        Err(_) => return ServerError::BearerTokenInvalid.into_response(),
    };

    let response = state.engine.handle_frame(&org, instance_uid, &body).await;
    (
        StatusCode::OK,
        [("content-type", "application/x-protobuf")],
        response,
    )
        .into_response()
}
