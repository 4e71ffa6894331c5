use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::CredentialError;

/// Cost parameters for credential hashing.
///
/// Raising any of them makes both hashing and verification slower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory size in KiB
    pub memory_kib: u32,
    /// Number of passes over memory
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl HashCost {
    /// Largest cost accepted from a stored hash by default (256 MiB, 16 passes, 8 lanes).
    pub const VERIFY_LIMIT: HashCost = HashCost {
        memory_kib: 256 * 1024,
        iterations: 16,
        parallelism: 8,
    };

    /// Component-wise maximum of two costs.
    pub fn max(self, other: HashCost) -> HashCost {
        HashCost {
            memory_kib: self.memory_kib.max(other.memory_kib),
            iterations: self.iterations.max(other.iterations),
            parallelism: self.parallelism.max(other.parallelism),
        }
    }

    fn admits(&self, params: &Params) -> bool {
        params.m_cost() <= self.memory_kib
            && params.t_cost() <= self.iterations
            && params.p_cost() <= self.parallelism
    }
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// One-way credential hashing.
///
/// Uses Argon2id with a fresh random salt per hash and produces PHC
/// strings, so a stored hash carries its own algorithm, parameters and salt.
///
/// Stored hashes whose parameters exceed the verification limit are
/// rejected without running Argon2.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    verify_limit: HashCost,
}

impl CredentialHasher {
    /// Create a hasher with the library's recommended cost.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            verify_limit: HashCost::VERIFY_LIMIT,
        }
    }

    /// Create a hasher with an explicit cost.
    ///
    /// The verification limit is raised to `cost` if it is higher, so the
    /// hasher always accepts its own hashes.
    ///
    /// # Errors
    /// * `InvalidCost` - Parameters are outside what Argon2 accepts
    pub fn with_cost(cost: HashCost) -> Result<Self, CredentialError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| CredentialError::InvalidCost(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            verify_limit: HashCost::VERIFY_LIMIT.max(cost),
        })
    }

    /// Replace the largest cost accepted from a stored hash.
    pub fn with_verify_limit(mut self, limit: HashCost) -> Self {
        self.verify_limit = limit;
        self
    }

    /// Hash a plaintext secret.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `InvalidInput` - Plaintext is empty
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        if plaintext.is_empty() {
            return Err(CredentialError::InvalidInput(
                "plaintext must not be empty".to_string(),
            ));
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext secret against a stored hash.
    ///
    /// Parameters and salt are read from `encoded`; the hasher's own cost
    /// only applies to new hashes.
    ///
    /// # Returns
    /// True if the plaintext matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedHash` - `encoded` is not a usable PHC string, or its
    ///   parameters exceed the verification limit
    pub fn verify(&self, plaintext: &str, encoded: &str) -> Result<bool, CredentialError> {
        let parsed_hash =
            PasswordHash::new(encoded).map_err(|e| CredentialError::MalformedHash(e.to_string()))?;

        let params = Params::try_from(&parsed_hash)
            .map_err(|e| CredentialError::MalformedHash(e.to_string()))?;

        if !self.verify_limit.admits(&params) {
            tracing::debug!(
                m_cost = params.m_cost(),
                t_cost = params.t_cost(),
                p_cost = params.p_cost(),
                "Stored hash exceeds the verification limit"
            );
            return Err(CredentialError::MalformedHash(
                "hash parameters exceed the verification limit".to_string(),
            ));
        }

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => {
                tracing::debug!(error = %e, "Stored hash could not be used for verification");
                Err(CredentialError::MalformedHash(e.to_string()))
            }
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small cost so the test suite stays fast.
    fn fast_hasher() -> CredentialHasher {
        CredentialHasher::with_cost(HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build hasher")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash("pw123!").expect("Failed to hash password");

        assert!(hasher.verify("pw123!", &hash).expect("Failed to verify"));
        assert!(!hasher.verify("wrong", &hash).expect("Failed to verify"));
    }

    #[test]
    fn test_default_cost_produces_argon2id() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("my_secure_password").unwrap();

        assert!(hash.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
        assert!(hasher.verify("my_secure_password", &hash).unwrap());
    }

    #[test]
    fn test_hash_uses_fresh_salt() {
        let hasher = fast_hasher();
        let first = hasher.hash("same_password").unwrap();
        let second = hasher.hash("same_password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same_password", &first).unwrap());
        assert!(hasher.verify("same_password", &second).unwrap());
    }

    #[test]
    fn test_hash_empty_input() {
        let result = fast_hasher().hash("");
        assert!(matches!(result, Err(CredentialError::InvalidInput(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let result = fast_hasher().verify("pw123!", "not-a-hash");
        assert!(matches!(result, Err(CredentialError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_unsupported_algorithm() {
        let result = fast_hasher().verify(
            "pw123!",
            "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA",
        );
        assert!(matches!(result, Err(CredentialError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_reads_cost_from_hash() {
        let stored = CredentialHasher::new().hash("pw123!").unwrap();

        // A hasher configured with a different cost still verifies older hashes
        assert!(fast_hasher().verify("pw123!", &stored).unwrap());
    }

    #[test]
    fn test_with_cost_rejects_invalid_parameters() {
        let result = CredentialHasher::with_cost(HashCost {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(CredentialError::InvalidCost(_))));
    }

    #[test]
    fn test_hash_does_not_contain_plaintext() {
        let hash = fast_hasher().hash("visible_secret").unwrap();
        assert!(!hash.contains("visible_secret"));
    }

    #[test]
    fn test_verify_rejects_cost_above_limit() {
        // 4 GiB of memory requested by the stored hash
        let result = fast_hasher().verify(
            "pw123!",
            "$argon2id$v=19$m=4194304,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA",
        );
        assert!(matches!(result, Err(CredentialError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_limit_is_configurable() {
        let stored = fast_hasher().hash("pw123!").unwrap();
        let strict = fast_hasher().with_verify_limit(HashCost {
            memory_kib: 512,
            iterations: 1,
            parallelism: 1,
        });

        assert!(matches!(
            strict.verify("pw123!", &stored),
            Err(CredentialError::MalformedHash(_))
        ));
    }

    #[test]
    fn test_with_cost_above_limit_verifies_own_hashes() {
        let hasher = CredentialHasher::with_cost(HashCost {
            memory_kib: 1024,
            iterations: 20,
            parallelism: 1,
        })
        .unwrap();
        let hash = hasher.hash("pw123!").unwrap();

        assert!(hasher.verify("pw123!", &hash).unwrap());
    }
}
