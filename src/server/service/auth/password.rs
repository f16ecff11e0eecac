//! Argon2 password hashing.
//!
//! Hashing is CPU bound, both functions run on tokio's blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{auth::AuthError, Error};

/// Hashes `password` with a random salt, returning the PHC string
pub async fn hash_password(password: String) -> Result<String, Error> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash(e.to_string()))
    })
    .await??;

    Ok(hash)
}

/// Checks `password` against a stored PHC string
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(Error::AuthError(AuthError::PasswordHash))` - Stored hash could not be parsed
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, Error> {
    let verified = tokio::task::spawn_blocking(move || {
        let parsed =
            PasswordHash::new(&password_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        Ok::<bool, AuthError>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await??;

    Ok(verified)
}
