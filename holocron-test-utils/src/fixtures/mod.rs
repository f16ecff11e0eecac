//! Database fixtures used during test execution.
//!
//! - `user` - users whose password is [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD)
//! - `catalogue` - planets, people and vehicles with standard test values
//! - `favorite` - favorite rows pointing at any catalogue record

pub mod catalogue;
pub mod favorite;
pub mod user;
