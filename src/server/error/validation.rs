use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::bad_request;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
    #[error("Unknown favorite kind {0:?}, expected planet, people or vehicle")]
    UnknownFavoriteKind(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        bad_request(self.to_string())
    }
}
