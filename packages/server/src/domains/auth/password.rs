//! Password hashing
//!
//! bcrypt with a fixed cost; the plaintext is never stored or logged.

use anyhow::Result;

const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with a per-hash random salt
pub fn hash_password(plain: &str) -> Result<String> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(Into::into)
}

/// Check a plaintext password against a stored hash
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(plain, hash).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("s3cret").unwrap();
        let second = hash_password("s3cret").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("s3cret").unwrap();
        assert!(!hash.contains("s3cret"));
    }
}
