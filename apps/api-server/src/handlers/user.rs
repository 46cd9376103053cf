//! User-facing handlers: signup, signin and purchased-course listing.

use actix_web::{HttpResponse, web};

use skola_core::domain::{CourseId, PrincipalKind, User};
use skola_core::error::RepoError;
use skola_core::ports::{
    CourseRepository, PasswordService, PurchaseRepository, TokenService, UserRepository,
};
use skola_shared::FieldError;
use skola_shared::dto::{
    MessageResponse, PurchasesResponse, SigninRequest, SignupRequest, TokenResponse,
};
use skola_shared::validate::validate_signup;

use crate::handlers::{course_dto, purchase_dto};
use crate::middleware::auth::UserIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn duplicate_email() -> AppError {
    AppError::Validation(vec![FieldError::new("email", "Email already registered")])
}

/// POST /user/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validate_signup(&req).map_err(AppError::Validation)?;

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(duplicate_email());
    }

    let passwords = state.passwords.clone();
    let password = req.password;
    let password_hash = web::block(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(req.email, password_hash, req.first_name, req.last_name);

    match state.users.insert(user).await {
        Ok(_) => Ok(HttpResponse::Ok().json(MessageResponse::new("Signup succeeded"))),
        Err(RepoError::Constraint(_)) => Err(duplicate_email()),
        Err(e) => Err(e.into()),
    }
}

/// POST /user/signin
pub async fn signin(
    state: web::Data<AppState>,
    body: web::Json<SigninRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let Some(user) = state.users.find_by_email(&req.email).await? else {
        return Err(AppError::IncorrectCredentials);
    };

    let passwords = state.passwords.clone();
    let stored_hash = user.password_hash.clone();
    let valid = web::block(move || passwords.verify(&req.password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .unwrap_or_else(|e| {
            tracing::error!(user_id = %user.id, "Stored password hash unreadable: {e}");
            false
        });

    if !valid {
        return Err(AppError::IncorrectCredentials);
    }

    let token = state
        .tokens
        .issue(user.id.0, PrincipalKind::User)
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// GET /user/purchases
///
/// The caller's purchases joined with the details of the purchased courses.
pub async fn purchases(
    state: web::Data<AppState>,
    identity: UserIdentity,
) -> AppResult<HttpResponse> {
    let purchases = state.purchases.find_by_user(identity.id).await?;

    let course_ids: Vec<CourseId> = purchases.iter().map(|p| p.course_id).collect();
    let course_data = state.courses.find_by_ids(&course_ids).await?;

    Ok(HttpResponse::Ok().json(PurchasesResponse {
        purchases: purchases.iter().map(purchase_dto).collect(),
        course_data: course_data.iter().map(course_dto).collect(),
    }))
}
