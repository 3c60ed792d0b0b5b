//! WebSocket transport: one logical OpAMP message per binary frame, in
//! either direction (§4.1). A session is registered in C4 for the lifetime
//! of the socket so C6 can push config offers without waiting for the agent
//! to speak first.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use futures::{SinkExt, StreamExt};

use crate::error::ServerError;
use crate::model::InstanceUid;
use crate::state::AppState;

pub async fn upgrade(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Response {
    let Some(token) = super::bearer_token(&headers) else {
        return ServerError::BearerTokenInvalid.into_response();
    };
    let token = token.to_string();

    let (org, instance_uid) = match state.engine.authenticate(&token).await {
        Ok(pair) => pair,
        Err(_) => return ServerError::BearerTokenInvalid.into_response(),
    };

    ws.on_upgrade(move |socket| run_session(socket, state, org, instance_uid))
}

async fn run_session(socket: WebSocket, state: AppState, org: String, instance_uid: InstanceUid) {
    let (mut sink, mut stream) = socket.split();
    let handle = state.registry.register(instance_uid);
    let session = handle.session;
    let mut outbound_rx = handle.outbound_rx;
    let cancellation = session.cancellation_token();

    loop {
        tokio::select! {
            _ = cancellation.cancelled() => break,
            push = outbound_rx.recv() => {
                let Some(msg) = push else { break };
                let bytes = crate::wire::encode_server_to_agent(&msg);
                if sink.send(Message::Binary(bytes.into())).await.is_err() {
                    break;
                }
            }
            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Binary(bytes))) => {
                        let response = state.engine.handle_frame(&org, instance_uid, &bytes).await;
                        if sink.send(Message::Binary(response.into())).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(_)) => break,
                }
            }
        }
    }

    state.registry.unregister(&instance_uid, &session);
    let _ = state.agents.mark_disconnected(&org, &instance_uid).await;
}
