//! Error types for the Holocron server.
//!
//! Each domain (authentication, configuration, catalogue records, favorites, request validation)
//! has its own `thiserror` enum with an `IntoResponse` mapping. They are aggregated into
//! [`Error`], which is what every service and controller returns so `?` works across layers.

pub mod auth;
pub mod config;
pub mod favorite;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{
        auth::AuthError, config::ConfigError, favorite::FavoriteError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the Holocron server.
///
/// Domain errors render as client errors with a `{"msg": ...}` body. Library errors
/// (database, token signing, blocking task failures) render as a generic 500 and are logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variable.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Credential or bearer token problem.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Missing record or natural key already taken.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Favorite registry rule violated.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Malformed request body or path.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token signing error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// A blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing records, duplicate natural keys, favorite rule violations, malformed bodies
/// - 401 Unauthorized - Bad credentials, missing or invalid bearer token
/// - 404 Not Found - Token refers to a user that no longer exists
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}

/// Builds a 400 Bad Request response carrying `msg`.
pub(crate) fn bad_request(msg: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(MessageDto::new(msg))).into_response()
}
