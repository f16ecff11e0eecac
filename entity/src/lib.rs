//! SeaORM entity models for the Holocron database schema.

pub mod prelude;

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
pub mod vehicle;
