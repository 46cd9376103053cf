//! Authentication ports.

use uuid::Uuid;

use crate::domain::PrincipalKind;

/// Claims decoded from a verified token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub principal_id: Uuid,
    pub kind: PrincipalKind,
    pub exp: i64,
}

/// Token service - issues and verifies signed principal tokens.
///
/// One secret per principal kind; the two trust domains share no key
/// material, so a token issued for one kind never verifies under the other.
pub trait TokenService: Send + Sync {
    /// Issue a signed token binding a principal identity to a kind.
    fn issue(&self, principal_id: Uuid, kind: PrincipalKind) -> Result<String, AuthError>;

    /// Verify a token against the secret of `kind` and decode its claims.
    ///
    /// Malformed, unsigned, wrong-signature and wrong-kind tokens are all
    /// rejected with the same error class; callers learn only valid/invalid.
    fn verify(&self, token: &str, kind: PrincipalKind) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash.
    ///
    /// A malformed stored hash fails closed with `Err`, never `Ok(true)`.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
