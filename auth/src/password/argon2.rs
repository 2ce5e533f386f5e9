use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// One-way password hashing backed by Argon2id.
///
/// Cost parameters default to the `argon2` crate defaults and are fixed for
/// the lifetime of the hasher. Every digest carries its own random salt, so
/// hashing the same plaintext twice yields two different PHC strings.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit Argon2 parameters.
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    /// Hasher with the given memory (KiB), iteration and parallelism costs.
    ///
    /// # Errors
    /// * `InvalidParams` - A cost is outside the range Argon2 accepts
    pub fn with_costs(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        Params::new(memory_kib, iterations, parallelism, None)
            .map(Self::with_params)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC string.
    ///
    /// The digest comparison is constant-time. Parameters and salt are read
    /// from the stored string, so hashes produced under other cost settings
    /// still verify.
    ///
    /// # Returns
    /// `true` on match, `false` on mismatch
    ///
    /// # Errors
    /// * `MalformedHash` - Stored string is not a parseable PHC hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password123").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "password123");
        assert!(hasher.verify("password123", &hash).unwrap());
        assert!(!hasher.verify("password124", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differ() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("password123").unwrap();
        let second = hasher.hash("password123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password123", &first).unwrap());
        assert!(hasher.verify("password123", &second).unwrap());
    }

    #[test]
    fn test_verify_against_other_password_hash() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correct-horse").unwrap();

        assert!(!hasher.verify("battery-staple", &hash).unwrap());
        assert!(!hasher.verify("", &hash).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();

        assert!(matches!(
            hasher.verify("password123", "not-a-phc-string"),
            Err(PasswordError::MalformedHash(_))
        ));
        assert!(matches!(
            hasher.verify("password123", ""),
            Err(PasswordError::MalformedHash(_))
        ));
    }

    #[test]
    fn test_custom_costs_are_encoded_in_hash() {
        let hasher = PasswordHasher::with_costs(8 * 1024, 1, 1).unwrap();
        let hash = hasher.hash("password123").unwrap();

        assert!(hash.contains("m=8192,t=1,p=1"));
        // Verification reads parameters from the hash itself
        assert!(PasswordHasher::new().verify("password123", &hash).unwrap());
    }

    #[test]
    fn test_out_of_range_costs_are_rejected() {
        assert!(matches!(
            PasswordHasher::with_costs(8 * 1024, 0, 1),
            Err(PasswordError::InvalidParams(_))
        ));
        assert!(matches!(
            PasswordHasher::with_costs(8 * 1024, 1, 0),
            Err(PasswordError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_hash_fails_when_digest_exceeds_phc_limit() {
        // PHC strings hold at most 64 output bytes
        let params = Params::new(
            Params::DEFAULT_M_COST,
            Params::DEFAULT_T_COST,
            Params::DEFAULT_P_COST,
            Some(128),
        )
        .unwrap();

        assert!(matches!(
            PasswordHasher::with_params(params).hash("password123"),
            Err(PasswordError::HashingFailed(_))
        ));
    }
}
