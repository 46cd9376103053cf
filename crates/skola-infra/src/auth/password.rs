//! Argon2 password hashing implementation.
//!
//! Output is a PHC string, so every hash self-describes its salt and cost
//! parameters: raising the work factor later never breaks stored hashes.

use argon2::{
    Argon2, Params,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use skola_core::ports::{AuthError, PasswordService};

/// Argon2-based password service.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Build a service with an explicit work factor (memory KiB, iterations,
    /// parallelism). Hashes produced earlier under other parameters keep
    /// verifying, since verification reads the parameters from the hash.
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, AuthError> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        })
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        // Fails closed: a corrupt stored hash is an error, never a match.
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let service = Argon2PasswordService::new();
        let password = "Abcdef1!";

        let hash = service.hash(password).unwrap();
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let service = Argon2PasswordService::new();

        let first = service.hash("Abcdef1!").unwrap();
        let second = service.hash("Abcdef1!").unwrap();

        // Fresh salt per call.
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_fails_closed() {
        let service = Argon2PasswordService::new();

        for corrupt in ["", "not-a-phc-string", "$argon2id$v=19$garbage"] {
            let result = service.verify("Abcdef1!", corrupt);
            assert!(matches!(result, Err(AuthError::HashingError(_))));
        }
    }

    #[test]
    fn old_hashes_survive_a_cost_bump() {
        let old = Argon2PasswordService::with_params(8192, 1, 1).unwrap();
        let hash = old.hash("Abcdef1!").unwrap();

        // Verification reads the parameters out of the PHC string, so a
        // service configured with a higher work factor still accepts it.
        let new = Argon2PasswordService::with_params(16384, 2, 1).unwrap();
        assert!(new.verify("Abcdef1!", &hash).unwrap());
    }
}
