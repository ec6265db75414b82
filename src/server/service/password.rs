//! Password hashing and registration policy.
//!
//! Passwords are hashed with Argon2id using a random 16-byte salt and stored as PHC
//! strings. The policy check runs before hashing and reports every rule the password
//! breaks so the client can fix them in one round trip.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

const MIN_PASSWORD_LENGTH: usize = 6;

pub struct PasswordService;

impl PasswordService {
    /// Hashes a plaintext password into an Argon2id PHC string.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-formatted hash including algorithm parameters and salt
    /// - `Err(password_hash::Error)` - Salt encoding or hashing failed
    pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)?;

        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(password_hash::Error)` - Stored hash could not be parsed
    pub fn verify(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Returns a message for every policy rule the password violates.
    ///
    /// An empty vector means the password is acceptable.
    pub fn validate(password: &str) -> Vec<String> {
        let mut violations = Vec::new();

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            violations.push(format!(
                "Passwords must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            ));
        }
        if password.chars().all(|c| c.is_alphanumeric()) {
            violations
                .push("Passwords must have at least one non alphanumeric character.".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push("Passwords must have at least one digit ('0'-'9').".to_string());
        }
        if !password.chars().any(|c| c.is_lowercase()) {
            violations.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            violations.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
        }

        violations
    }
}
