//! In-memory stores using HashMaps behind async RwLocks.
//!
//! These back the server when `DATABASE_URL` is not set and every test that
//! does not need Postgres. Per-record operations are atomic under the lock,
//! and the email uniqueness constraint is enforced here just as a real store
//! would: a duplicate insert fails with `RepoError::Constraint`, making the
//! store the final arbiter for racing signups. Data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use skola_core::domain::{
    Admin, AdminId, Course, CourseContent, CourseId, Purchase, User, UserId,
};
use skola_core::error::RepoError;
use skola_core::ports::{AdminRepository, CourseRepository, PurchaseRepository, UserRepository};

/// In-memory admin credential store.
#[derive(Default)]
pub struct InMemoryAdminStore {
    rows: RwLock<HashMap<AdminId, Admin>>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminStore {
    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().find(|a| a.email == email).cloned())
    }

    async fn insert(&self, admin: Admin) -> Result<Admin, RepoError> {
        let mut rows = self.rows.write().await;

        if rows.values().any(|a| a.email == admin.email) {
            return Err(RepoError::Constraint("email already exists".to_string()));
        }

        rows.insert(admin.id, admin.clone());
        Ok(admin)
    }
}

/// In-memory user credential store.
#[derive(Default)]
pub struct InMemoryUserStore {
    rows: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;

        if rows.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("email already exists".to_string()));
        }

        rows.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory course store.
#[derive(Default)]
pub struct InMemoryCourseStore {
    rows: RwLock<HashMap<CourseId, Course>>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseStore {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, RepoError> {
        let rows = self.rows.read().await;
        Ok(ids.iter().filter_map(|id| rows.get(id).cloned()).collect())
    }

    async fn find_by_creator(&self, creator_id: AdminId) -> Result<Vec<Course>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|c| c.creator_id == creator_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, course: Course) -> Result<Course, RepoError> {
        let mut rows = self.rows.write().await;
        rows.insert(course.id, course.clone());
        Ok(course)
    }

    async fn update_owned(
        &self,
        id: CourseId,
        creator_id: AdminId,
        content: CourseContent,
    ) -> Result<u64, RepoError> {
        let mut rows = self.rows.write().await;

        match rows.get_mut(&id) {
            Some(course) if course.creator_id == creator_id => {
                course.title = content.title;
                course.description = content.description;
                course.price = content.price;
                course.image_url = content.image_url;
                course.updated_at = Utc::now();
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

/// In-memory purchase store.
///
/// The repository port is read-only; `add` exists so the (external) checkout
/// flow and tests can seed rows.
#[derive(Default)]
pub struct InMemoryPurchaseStore {
    rows: RwLock<Vec<Purchase>>,
}

impl InMemoryPurchaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, purchase: Purchase) {
        self.rows.write().await.push(purchase);
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchaseStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Purchase>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use skola_core::domain::PurchaseId;

    use super::*;

    fn admin(email: &str) -> Admin {
        Admin::new(
            email.to_string(),
            "$argon2id$stub".to_string(),
            "Jane".to_string(),
            "Doe".to_string(),
        )
    }

    fn content(title: &str) -> CourseContent {
        CourseContent {
            title: title.to_string(),
            description: "D".to_string(),
            price: 10.0,
            image_url: "u".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_admin_email_hits_constraint() {
        let store = InMemoryAdminStore::new();
        store.insert(admin("a@b.co")).await.unwrap();

        let result = store.insert(admin("a@b.co")).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn find_by_email_returns_inserted_admin() {
        let store = InMemoryAdminStore::new();
        let inserted = store.insert(admin("a@b.co")).await.unwrap();

        let found = store.find_by_email("a@b.co").await.unwrap().unwrap();
        assert_eq!(found.id, inserted.id);

        assert!(store.find_by_email("missing@b.co").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_owned_ignores_foreign_courses() {
        let store = InMemoryCourseStore::new();
        let owner = AdminId::generate();
        let other = AdminId::generate();
        let course = store
            .insert(Course::new(owner, content("original")))
            .await
            .unwrap();

        let affected = store
            .update_owned(course.id, other, content("stolen"))
            .await
            .unwrap();

        assert_eq!(affected, 0);
        let unchanged = store.find_by_id(course.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, "original");
    }

    #[tokio::test]
    async fn find_by_ids_skips_unknown() {
        let store = InMemoryCourseStore::new();
        let creator = AdminId::generate();
        let kept = store
            .insert(Course::new(creator, content("kept")))
            .await
            .unwrap();

        let found = store
            .find_by_ids(&[kept.id, CourseId::generate()])
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, kept.id);
    }

    #[tokio::test]
    async fn purchases_are_scoped_to_user() {
        let store = InMemoryPurchaseStore::new();
        let buyer = UserId::generate();
        let someone_else = UserId::generate();

        store
            .add(Purchase {
                id: PurchaseId(uuid::Uuid::new_v4()),
                user_id: buyer,
                course_id: CourseId::generate(),
                created_at: Utc::now(),
            })
            .await;

        assert_eq!(store.find_by_user(buyer).await.unwrap().len(), 1);
        assert!(store.find_by_user(someone_else).await.unwrap().is_empty());
    }
}
