use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::{error::bad_request, model::resource::Resource};

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{resource} ID {id} not found in database")]
    NotFound { resource: Resource, id: i32 },
    #[error("{0} with the same natural key already exists")]
    Conflict(Resource),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { resource, .. } => bad_request(resource.not_found_msg()),
            Self::Conflict(resource) => bad_request(resource.conflict_msg()),
        }
    }
}
