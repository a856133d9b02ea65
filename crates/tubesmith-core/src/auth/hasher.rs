//! Password hashing for stored accounts.

use anyhow::{anyhow, Result};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

/// Hash-on-write, verify-on-read capability used by the credential store.
pub trait SecretHasher: Send + Sync {
    /// Produce a self-describing hash string for storage
    fn hash(&self, secret: &str) -> Result<String>;

    /// Check a candidate secret against a stored hash string.
    /// Anything that is not a well-formed hash never verifies.
    fn verify(&self, secret: &str, stored: &str) -> bool;
}

/// Argon2id hasher producing PHC-format strings (`$argon2id$v=19$...`).
#[derive(Clone)]
pub struct Argon2SecretHasher {
    argon2: Argon2<'static>,
}

impl Argon2SecretHasher {
    /// Hasher with the crate's recommended Argon2id parameters
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hasher with explicit memory (KiB), iteration, and lane costs
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| anyhow!("Failed to create argon2 params: {}", e))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2SecretHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretHasher for Argon2SecretHasher {
    fn hash(&self, secret: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    fn verify(&self, secret: &str, stored: &str) -> bool {
        // Parameters are read back from the PHC string, so hashes made with
        // other costs still verify.
        match PasswordHash::new(stored) {
            Ok(parsed) => self
                .argon2
                .verify_password(secret.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
