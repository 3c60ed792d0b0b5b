//! OpAMP transport (C1 framing + C4 session wiring): the WebSocket and HTTP
//! long-poll endpoints agents actually connect to, as opposed to the
//! operator-facing JSON API in `api`.

mod longpoll;
mod ws;

use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/opamp", get(ws::upgrade).post(longpoll::handle))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
