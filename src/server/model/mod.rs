//! Server application models and type definitions.
//!
//! Application state, database model type aliases, validated service inputs and the
//! resource descriptors used to build response messages.

pub mod app;
pub mod db;
pub mod input;
pub mod resource;
