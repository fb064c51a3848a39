//! Argon2id password hashing shared by the identity adapters.
//!
//! Hashes are stored as PHC strings so the parameters travel with the hash.
//! Argon2 is CPU-bound, so both operations run on the blocking pool and never
//! occupy an async worker.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use tokio::task::{JoinError, spawn_blocking};
use zeroize::Zeroizing;

use crate::domain::ports::IdentityError;

fn join_error(err: JoinError) -> IdentityError {
    IdentityError::query(format!("password task failed: {err}"))
}

fn hash_blocking(password: &str) -> Result<String, IdentityError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| IdentityError::query(format!("password hashing failed: {err}")))
}

fn verify_blocking(password: &str, stored: &str) -> Result<bool, IdentityError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|err| IdentityError::query(format!("stored password hash is invalid: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Hash `password` with a fresh random salt.
pub async fn hash_password(password: &str) -> Result<String, IdentityError> {
    let password = Zeroizing::new(password.to_owned());
    spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(join_error)?
}

/// Check `password` against a stored PHC string.
///
/// A malformed stored hash is reported as a query error rather than a
/// credential mismatch.
pub async fn verify_password(password: &str, stored: &str) -> Result<bool, IdentityError> {
    let password = Zeroizing::new(password.to_owned());
    let stored = stored.to_owned();
    spawn_blocking(move || verify_blocking(&password, &stored))
        .await
        .map_err(join_error)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_only_the_original_password() {
        let hash = hash_password("correct horse").await.expect("hash");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash).await.expect("verify"));
        assert!(!verify_password("battery staple", &hash).await.expect("verify"));
    }

    #[tokio::test]
    async fn rejects_malformed_stored_hash() {
        let err = verify_password("pw", "not-a-phc-string")
            .await
            .expect_err("invalid hash");
        assert!(matches!(err, IdentityError::Query { .. }));
    }

    #[tokio::test]
    async fn panicked_task_maps_to_query_error() {
        fn explode() {
            panic!("hasher crashed");
        }

        let err = spawn_blocking(explode)
            .await
            .map_err(join_error)
            .expect_err("task panicked");

        assert!(matches!(err, IdentityError::Query { .. }));
    }
}
