use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AdminId, UserId};

/// Identifier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(pub Uuid);

impl fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The mutable payload of a course, as supplied by its creator.
///
/// Used both when creating a course and when replacing its content on update;
/// ownership (`creator_id`) is stamped separately and never part of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseContent {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Course entity - owned exclusively by the admin who created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub creator_id: AdminId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Create a new course stamped with its creator.
    pub fn new(creator_id: AdminId, content: CourseContent) -> Self {
        let now = Utc::now();
        Self {
            id: CourseId::generate(),
            title: content.title,
            description: content.description,
            price: content.price,
            image_url: content.image_url,
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Purchase - links a user to a course they may view.
///
/// Read-only from this crate's perspective; rows are written by the (external)
/// checkout flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub created_at: DateTime<Utc>,
}
