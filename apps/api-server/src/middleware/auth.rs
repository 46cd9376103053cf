//! Authentication extractors - one per principal kind.
//!
//! A request is either Unauthenticated or Authenticated; there is no third
//! state. A missing `authorization` header, a malformed token and a token
//! signed for the other kind all fail the same way: 403 with the uniform
//! "You are not signed in" body, before any handler code runs. Extraction is
//! side-effect-free, so running it twice on one request cannot change the
//! outcome.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};
use std::sync::Arc;

use skola_core::domain::{AdminId, PrincipalKind, UserId};
use skola_core::ports::{AuthError, TokenService};
use skola_shared::ErrorBody;

/// Authenticated admin identity extractor.
///
/// Use this in handlers to require an admin token:
/// ```ignore
/// async fn protected_route(identity: AdminIdentity) -> impl Responder {
///     format!("Hello, admin {}!", identity.id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminIdentity {
    pub id: AdminId,
}

/// Authenticated user identity extractor.
#[derive(Debug, Clone, Copy)]
pub struct UserIdentity {
    pub id: UserId,
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::FORBIDDEN
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        // Uniform body regardless of cause: the client never learns whether
        // the header was missing, the signature wrong, or the kind mismatched.
        actix_web::HttpResponse::build(self.status_code())
            .json(ErrorBody::new("You are not signed in"))
    }
}

/// Extract and verify the bearer token for `kind`, returning the raw
/// principal id from its claims.
fn authenticate(req: &HttpRequest, kind: PrincipalKind) -> Result<uuid::Uuid, AuthenticationError> {
    let token_service = match req.app_data::<actix_web::web::Data<Arc<dyn TokenService>>>() {
        Some(service) => service,
        None => {
            tracing::error!("TokenService not found in app data");
            return Err(AuthenticationError(AuthError::InvalidToken(
                "Server configuration error".to_string(),
            )));
        }
    };

    // The authorization header carries the raw token; a `Bearer ` prefix is
    // tolerated and stripped.
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthenticationError(AuthError::MissingAuth))?;

    let auth_str = auth_header.to_str().map_err(|_| {
        AuthenticationError(AuthError::InvalidToken(
            "Invalid authorization header".to_string(),
        ))
    })?;

    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = token_service
        .verify(token, kind)
        .map_err(AuthenticationError)?;

    Ok(claims.principal_id)
}

impl FromRequest for AdminIdentity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req, PrincipalKind::Admin).map(|id| AdminIdentity { id: AdminId(id) }))
    }
}

impl FromRequest for UserIdentity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req, PrincipalKind::User).map(|id| UserIdentity { id: UserId(id) }))
    }
}
