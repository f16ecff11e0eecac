//! Access token issuing and verification.
//!
//! Tokens are HS256 JWTs whose `sub` claim is the user ID.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, Error};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Signing and verification keys derived from the configured secret
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issues a token for `user_id` expiring after the configured TTL
    pub fn issue(&self, user_id: i32) -> Result<String, Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verifies signature and expiry, returning the user ID from `sub`
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(AuthError::InvalidToken)?;

        data.claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(ErrorKind::InvalidSubject.into()))
    }
}
