//! Shared test credentials.
//!
//! Placeholder values only, none of these are used outside of tests.

/// Secret used to sign access tokens in tests.
pub static TEST_JWT_SECRET: &str = "holocron_test_jwt_secret";

/// Plaintext password of every user inserted through the user fixtures.
pub static TEST_PASSWORD: &str = "may_the_force_be_with_you";
