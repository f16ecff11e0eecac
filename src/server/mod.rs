//! Server application core modules.
//!
//! HTTP routing and handlers, business services, repositories over the `entity` crate,
//! error types and startup configuration for the Holocron API.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
