//! Account credentials.
//!
//! Passwords are stored as Argon2id PHC strings, never in plain text. Emails are
//! normalized (trimmed, lower-cased) before they are used as keys.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use thiserror::Error;

/// Normalize an email for use as a storage key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check the registration form fields.
pub fn validate_registration(
    email: &str,
    password: &str,
    name: &str,
    username: &str,
) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields("email and password are required"));
    }
    if !email.contains('@') {
        return Err(AuthError::InvalidEmail(email.trim().to_string()));
    }
    if name.trim().is_empty() || username.trim().is_empty() {
        return Err(AuthError::MissingFields("name and username are required"));
    }
    Ok(())
}

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}

/// Authentication errors, all user-visible.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please fill in all fields: {0}")]
    MissingFields(&'static str),

    #[error("Please enter a valid email: {0}")]
    InvalidEmail(String),

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}
