//! Data access layer repositories.
//!
//! One repository per table. Every repository borrows a [`sea_orm::ConnectionTrait`]
//! implementor so services can hand it either the pooled connection or an open transaction.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` was raised by a unique index or constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
