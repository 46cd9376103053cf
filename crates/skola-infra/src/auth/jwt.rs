//! JWT token service with one signing secret per principal kind.
//!
//! Admin and user tokens live in disjoint trust domains: each kind gets its
//! own key pair, and the kind is additionally embedded in the claims so that
//! even a misconfigured deployment with equal secrets cannot cross-validate.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skola_core::domain::PrincipalKind;
use skola_core::ports::{AuthError, TokenClaims, TokenService};

/// JWT token service configuration.
///
/// `admin_secret` and `user_secret` must differ; the config loader at the
/// application edge refuses to start otherwise.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub admin_secret: String,
    pub user_secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // principal id
    kind: PrincipalKind,
    exp: i64, // expiration timestamp
    iat: i64, // issued at
    iss: String,
}

struct KindKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KindKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT-based token service covering both principal kinds.
pub struct JwtTokenService {
    admin: KindKeys,
    user: KindKeys,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            admin: KindKeys::from_secret(&config.admin_secret),
            user: KindKeys::from_secret(&config.user_secret),
            config,
        }
    }

    fn keys(&self, kind: PrincipalKind) -> &KindKeys {
        match kind {
            PrincipalKind::Admin => &self.admin,
            PrincipalKind::User => &self.user,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, principal_id: Uuid, kind: PrincipalKind) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: principal_id.to_string(),
            kind,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.keys(kind).encoding)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn verify(&self, token: &str, kind: PrincipalKind) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<Claims>(token, &self.keys(kind).decoding, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })?;

        // A valid signature is not enough: the embedded kind must match the
        // trust domain this verification was asked for.
        if token_data.claims.kind != kind {
            return Err(AuthError::InvalidToken("principal kind mismatch".to_string()));
        }

        let principal_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims {
            principal_id,
            kind,
            exp: token_data.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            admin_secret: "admin-test-secret".to_string(),
            user_secret: "user-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn issue_and_verify_admin_token() {
        let service = JwtTokenService::new(test_config());
        let id = Uuid::new_v4();

        let token = service.issue(id, PrincipalKind::Admin).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token, PrincipalKind::Admin).unwrap();
        assert_eq!(claims.principal_id, id);
        assert_eq!(claims.kind, PrincipalKind::Admin);
    }

    #[test]
    fn admin_token_never_verifies_as_user() {
        let service = JwtTokenService::new(test_config());
        let token = service.issue(Uuid::new_v4(), PrincipalKind::Admin).unwrap();

        let result = service.verify(&token, PrincipalKind::User);
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn user_token_never_verifies_as_admin() {
        let service = JwtTokenService::new(test_config());
        let token = service.issue(Uuid::new_v4(), PrincipalKind::User).unwrap();

        assert!(service.verify(&token, PrincipalKind::Admin).is_err());
    }

    #[test]
    fn kind_claim_rejects_cross_validation_even_with_equal_secrets() {
        // Misconfigured deployment: both kinds share a secret. The embedded
        // kind claim must still keep the trust domains apart.
        let service = JwtTokenService::new(JwtConfig {
            admin_secret: "same-secret".to_string(),
            user_secret: "same-secret".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        });

        let token = service.issue(Uuid::new_v4(), PrincipalKind::Admin).unwrap();
        assert!(service.verify(&token, PrincipalKind::User).is_err());
    }

    #[test]
    fn malformed_token_is_invalid() {
        let service = JwtTokenService::new(test_config());

        for garbage in ["", "not-a-token", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.e30."] {
            let result = service.verify(garbage, PrincipalKind::Admin);
            assert!(
                matches!(result, Err(AuthError::InvalidToken(_))),
                "expected invalid for {garbage:?}"
            );
        }
    }

    #[test]
    fn tampered_signature_is_invalid() {
        let service = JwtTokenService::new(test_config());
        let mut token = service.issue(Uuid::new_v4(), PrincipalKind::Admin).unwrap();
        token.pop();
        token.push('x');

        assert!(service.verify(&token, PrincipalKind::Admin).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: -1,
            ..test_config()
        });
        let token = service.issue(Uuid::new_v4(), PrincipalKind::User).unwrap();

        let result = service.verify(&token, PrincipalKind::User);
        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let issuing = JwtTokenService::new(test_config());
        let verifying = JwtTokenService::new(JwtConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });

        let token = issuing.issue(Uuid::new_v4(), PrincipalKind::Admin).unwrap();
        assert!(verifying.verify(&token, PrincipalKind::Admin).is_err());
    }
}
