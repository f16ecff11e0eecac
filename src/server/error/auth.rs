use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::MessageDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request is missing a bearer token in the Authorization header")]
    MissingToken,
    #[error("Bearer token failed validation: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
    /// Unknown username and wrong password share this variant so responses don't reveal
    /// which usernames exist.
    #[error("Login failed for username {0:?}")]
    InvalidCredentials(String),
    #[error("User ID {0:?} from a valid token was not found in database")]
    UserNotInDatabase(i32),
    #[error("Failed to hash or parse password hash: {0}")]
    PasswordHash(String),
}

impl AuthError {
    fn unauthorized(msg: &str) -> Response {
        (StatusCode::UNAUTHORIZED, Json(MessageDto::new(msg))).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => {
                tracing::debug!("{}", self);

                Self::unauthorized("Missing Authorization Header")
            }
            Self::InvalidToken(ref err) => {
                tracing::debug!(error = %err, "Rejected bearer token");

                Self::unauthorized("Invalid token")
            }
            Self::InvalidCredentials(ref username) => {
                tracing::debug!(username = %username, "{}", self);

                Self::unauthorized("Bad username or password")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::warn!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(MessageDto::new("User does not exist")),
                )
                    .into_response()
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
