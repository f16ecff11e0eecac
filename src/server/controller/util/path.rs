use axum::{
    extract::{rejection::PathRejection, FromRequestParts},
    http::request::Parts,
};

use crate::server::error::{validation::ValidationError, Error};

/// Path parameter extractor rendering rejections as `{"msg": ...}` 400 responses
///
/// Wraps [`axum::extract::Path`], so an `{id}` that is not a valid `i32` is reported the
/// same way as a malformed body.
#[derive(Debug, Clone)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    axum::extract::Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationError::InvalidPath(rejection.body_text()).into()),
        }
    }
}
