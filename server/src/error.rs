use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Error)]
struct ServerMessageError(pub String);

impl Display for ServerMessageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}", self.0)
    }
}

impl From<String> for ServerError {
    fn from(message: String) -> Self {
        ServerError::Other(Box::new(ServerMessageError(message)))
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid header name in {setting}: {name:?}")]
    InvalidHeaderName { setting: &'static str, name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
