use chrono::Duration;
use holocron_test_utils::prelude::*;

use crate::server::{
    error::{auth::AuthError, Error},
    model::input::Credentials,
    service::auth::{token::JwtKeys, AuthService},
};


fn jwt_keys() -> JwtKeys {
    JwtKeys::new(TEST_JWT_SECRET, Duration::hours(1))
}

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}
