//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire; the JSON contract predates this
//! implementation and is preserved exactly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to sign up a principal (admin or user).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Request to create a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Request to replace a course's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Plain `{message}` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Signin success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of a successful course create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMutationResponse {
    pub message: String,
    pub course_id: Uuid,
}

/// A course as exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub creator_id: Uuid,
}

/// Body of `GET /admin/course/bulk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub message: String,
    pub courses: Vec<CourseDto>,
}

/// A purchase as exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
}

/// Body of `GET /user/purchases` - purchases joined with course details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesResponse {
    pub purchases: Vec<PurchaseDto>,
    pub course_data: Vec<CourseDto>,
}
