//! bcrypt password hashing.

use crate::server::error::internal::InternalError;

pub fn hash_password(plain: &str, cost: u32) -> Result<String, InternalError> {
    Ok(bcrypt::hash(plain, cost)?)
}

/// Checks `plain` against a stored hash.
///
/// A stored value that is not a bcrypt hash counts as a mismatch rather than an error, so a
/// corrupt row cannot be logged into.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_hashed_password() {
        let hash = hash_password("hunter2", 4).unwrap();

        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-hash"));
    }
}
