//! Service layer for business logic.
//!
//! Services own the transaction boundaries: every read-then-write path opens one
//! transaction, hands it to the repositories and commits only on success. Constraint
//! violations that slip past the pre-checks are mapped back to their domain error.

pub mod auth;
pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;

use sea_orm::DbErr;

use crate::server::{
    data::is_unique_violation,
    error::{resource::ResourceError, Error},
    model::resource::Resource,
};

/// Maps a unique violation on `resource` to [`ResourceError::Conflict`], any other error passes through
pub(crate) fn conflict_on_unique(err: DbErr, resource: Resource) -> Error {
    if is_unique_violation(&err) {
        ResourceError::Conflict(resource).into()
    } else {
        err.into()
    }
}

pub(crate) fn not_found(resource: Resource, id: i32) -> Error {
    ResourceError::NotFound { resource, id }.into()
}
