//! HTTP controller endpoints for the Holocron API.
//!
//! Handlers validate the request, call a service and render its result. They never
//! touch repositories directly, and every failure is returned as an [`Error`] whose
//! `IntoResponse` impl picks the status code.
//!
//! [`Error`]: crate::server::error::Error

pub mod auth;
pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod util;
pub mod vehicle;
