//! Password authentication for admin users.
//!
//! Argon2id hashing via the `argon2` crate's `PasswordHasher` API. The
//! hash string embeds algorithm, parameters, and salt, so verification
//! needs no extra bookkeeping.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Minimum accepted password length for admin accounts.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password combination did not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The account exists but has been deactivated.
    #[error("account is deactivated")]
    InactiveAccount,

    /// Password rejected at account creation.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// Hashing backend failure.
    #[error("password hash error: {0}")]
    Hash(String),
}

/// Hash a password for storage.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` for passwords under
/// [`MIN_PASSWORD_LENGTH`] and `AuthError::Hash` on backend failure.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// A malformed stored hash is reported as an error; a clean mismatch is
/// just `false`.
///
/// # Errors
///
/// Returns `AuthError::Hash` if the stored hash cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("wrong horse battery", &hash).unwrap());
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(matches!(
            hash_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("correct horse battery").unwrap();
        let b = hash_password("correct horse battery").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("anything long enough", "not-a-phc-string"),
            Err(AuthError::Hash(_))
        ));
    }
}
