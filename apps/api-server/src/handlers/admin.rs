//! Admin-facing handlers: signup, signin and course management.

use actix_web::{HttpResponse, web};

use skola_core::domain::{Admin, CourseContent, CourseId, PrincipalKind};
use skola_core::error::RepoError;
use skola_core::ports::{AdminRepository, PasswordService, TokenService};
use skola_shared::FieldError;
use skola_shared::dto::{
    CourseListResponse, CourseMutationResponse, CreateCourseRequest, MessageResponse,
    SigninRequest, SignupRequest, TokenResponse, UpdateCourseRequest,
};
use skola_shared::validate::validate_signup;

use crate::handlers::course_dto;
use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn duplicate_email() -> AppError {
    AppError::Validation(vec![FieldError::new("email", "Email already registered")])
}

/// POST /admin/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Reject before any hashing happens.
    validate_signup(&req).map_err(AppError::Validation)?;

    if state.admins.find_by_email(&req.email).await?.is_some() {
        return Err(duplicate_email());
    }

    // Argon2 is deliberately expensive; keep it off the worker event loop.
    let passwords = state.passwords.clone();
    let password = req.password;
    let password_hash = web::block(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let admin = Admin::new(req.email, password_hash, req.first_name, req.last_name);

    // The pre-check above can race a concurrent signup; the store's
    // uniqueness constraint is the final arbiter.
    match state.admins.insert(admin).await {
        Ok(_) => Ok(HttpResponse::Ok().json(MessageResponse::new("Signup succeeded"))),
        Err(RepoError::Constraint(_)) => Err(duplicate_email()),
        Err(e) => Err(e.into()),
    }
}

/// POST /admin/signin
pub async fn signin(
    state: web::Data<AppState>,
    body: web::Json<SigninRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Unknown email and wrong password produce the same response.
    let Some(admin) = state.admins.find_by_email(&req.email).await? else {
        return Err(AppError::IncorrectCredentials);
    };

    let passwords = state.passwords.clone();
    let stored_hash = admin.password_hash.clone();
    let valid = web::block(move || passwords.verify(&req.password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .unwrap_or_else(|e| {
            // Corrupt stored hash: fail closed, log the cause.
            tracing::error!(admin_id = %admin.id, "Stored password hash unreadable: {e}");
            false
        });

    if !valid {
        return Err(AppError::IncorrectCredentials);
    }

    let token = state
        .tokens
        .issue(admin.id.0, PrincipalKind::Admin)
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// POST /admin/course
pub async fn create_course(
    state: web::Data<AppState>,
    identity: AdminIdentity,
    body: web::Json<CreateCourseRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let course = state
        .guard
        .create(
            identity.id,
            CourseContent {
                title: req.title,
                description: req.description,
                price: req.price,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(CourseMutationResponse {
        message: "Course created".to_string(),
        course_id: course.id.0,
    }))
}

/// PUT /admin/course
///
/// A non-owner's update silently affects zero rows; the response is the same
/// either way so callers cannot probe other admins' courses.
pub async fn update_course(
    state: web::Data<AppState>,
    identity: AdminIdentity,
    body: web::Json<UpdateCourseRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let applied = state
        .guard
        .update(
            identity.id,
            CourseId(req.course_id),
            CourseContent {
                title: req.title,
                description: req.description,
                price: req.price,
                image_url: req.image_url,
            },
        )
        .await?;

    if !applied {
        tracing::debug!(course_id = %req.course_id, "Course update affected no rows");
    }

    Ok(HttpResponse::Ok().json(CourseMutationResponse {
        message: "Course updated".to_string(),
        course_id: req.course_id,
    }))
}

/// GET /admin/course/bulk
pub async fn my_courses(
    state: web::Data<AppState>,
    identity: AdminIdentity,
) -> AppResult<HttpResponse> {
    let courses = state.guard.owned_courses(identity.id).await?;

    Ok(HttpResponse::Ok().json(CourseListResponse {
        message: "Your courses".to_string(),
        courses: courses.iter().map(course_dto).collect(),
    }))
}
