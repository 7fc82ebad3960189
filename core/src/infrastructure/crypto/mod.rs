use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            tracing::error!("Stored password hash is malformed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash_password("testpassword").unwrap();

        assert_ne!(hash, "testpassword");
        assert!(hasher.verify_password("testpassword", &hash).unwrap());
        assert!(!hasher.verify_password("wrongpassword", &hash).unwrap());
        assert!(!hasher.verify_password("", &hash).unwrap());
    }
}
