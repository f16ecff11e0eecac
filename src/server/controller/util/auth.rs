use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// ID of the user a verified bearer token was issued to
///
/// Rejects with 401 when the `Authorization: Bearer <token>` header is missing or the
/// token fails signature or expiry checks. The user is not looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub i32);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let user_id = state.jwt.verify(token.trim())?;

        Ok(Self(user_id))
    }
}
