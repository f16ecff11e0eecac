use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::{validation::ValidationError, Error};

/// JSON body extractor rendering rejections as `{"msg": ...}` 400 responses
///
/// Payload types keep every field optional, so a rejection here means the body is not
/// JSON or a field has the wrong type. Missing fields are reported by the input conversion.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationError::InvalidBody(rejection.body_text()).into()),
        }
    }
}
