use async_trait::async_trait;

use crate::domain::{Admin, AdminId, Course, CourseContent, CourseId, Purchase, User, UserId};
use crate::error::RepoError;

/// Credential store for admin principals.
///
/// Email is unique within the kind; the store's uniqueness constraint is the
/// final arbiter for concurrent signups and surfaces as `RepoError::Constraint`.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepoError>;

    async fn insert(&self, admin: Admin) -> Result<Admin, RepoError>;
}

/// Credential store for user principals.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn insert(&self, user: User) -> Result<User, RepoError>;
}

/// Course store.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepoError>;

    /// Fetch the courses matching any of `ids`, in no particular order.
    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, RepoError>;

    /// All courses created by `creator_id`.
    async fn find_by_creator(&self, creator_id: AdminId) -> Result<Vec<Course>, RepoError>;

    async fn insert(&self, course: Course) -> Result<Course, RepoError>;

    /// Replace the content of the course `id` if and only if it is owned by
    /// `creator_id`. Returns the number of rows affected; a non-owner (or a
    /// missing course) affects zero rows, indistinguishably.
    async fn update_owned(
        &self,
        id: CourseId,
        creator_id: AdminId,
        content: CourseContent,
    ) -> Result<u64, RepoError>;
}

/// Purchase store - read-only from this crate's perspective.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Purchase>, RepoError>;
}
