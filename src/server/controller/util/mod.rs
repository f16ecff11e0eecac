//! Extractors shared by the controllers.

pub mod auth;
pub mod path;
pub mod payload;
