use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::core::port::hasher::{Hasher, HasherError};

/// Argon2id password hasher, PHC string output.
pub struct Argon2Hasher;

impl Hasher for Argon2Hasher {
    fn hash(&self, value: &str) -> Result<String, HasherError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(value.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HasherError::HashError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn hash_verifies_against_the_plain_value() {
        let hash = Argon2Hasher.hash("any_password").unwrap();

        assert_ne!(hash, "any_password");
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"any_password", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"other_password", &parsed)
            .is_err());
    }

    #[test]
    fn same_value_gets_a_fresh_salt() {
        let first = Argon2Hasher.hash("any_password").unwrap();
        let second = Argon2Hasher.hash("any_password").unwrap();

        assert_ne!(first, second);
    }
}
