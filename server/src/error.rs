//! Crate-wide error type. Per-message and per-connection errors never
//! escape as Rust errors past the protocol engine boundary (see
//! `protocol::EngineError`); this type covers the ambient failure surface:
//! configuration, persistence, and the operator-facing API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error in field '{field}': {reason}")]
    Configuration { field: String, reason: String },

    #[error("database error: {0}")]
    Database(String),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("agent not found")]
    AgentNotFound,

    #[error("deployment not found")]
    DeploymentNotFound,

    #[error("config request not found")]
    ConfigRequestNotFound,

    #[error("registration token invalid or already consumed")]
    RegistrationTokenInvalid,

    #[error("bearer token invalid")]
    BearerTokenInvalid,

    #[error("agent does not advertise capability '{0}'")]
    CapabilityMissing(&'static str),

    #[error("invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for ServerError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => ServerError::AgentNotFound,
            other => ServerError::Database(other.to_string()),
        }
    }
}

pub type ServerResult<T> = std::result::Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::AgentNotFound
            | ServerError::DeploymentNotFound
            | ServerError::ConfigRequestNotFound => StatusCode::NOT_FOUND,
            ServerError::RegistrationTokenInvalid | ServerError::BearerTokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            ServerError::Configuration { .. } | ServerError::InvalidYaml(_) => StatusCode::BAD_REQUEST,
            ServerError::CapabilityMissing(_) => StatusCode::CONFLICT,
            ServerError::Database(_) | ServerError::Migration(_) | ServerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
