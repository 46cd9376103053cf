//! PostgreSQL store implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter};

use skola_core::domain::{
    Admin, AdminId, Course, CourseContent, CourseId, Purchase, User, UserId,
};
use skola_core::error::RepoError;
use skola_core::ports::{AdminRepository, CourseRepository, PurchaseRepository, UserRepository};

use super::entity::admin::{self, Entity as AdminEntity};
use super::entity::course::{self, Entity as CourseEntity};
use super::entity::purchase::{self, Entity as PurchaseEntity};
use super::entity::user::{self, Entity as UserEntity};

/// PostgreSQL admin credential store.
pub struct PostgresAdminStore {
    db: DbConn,
}

/// PostgreSQL user credential store.
pub struct PostgresUserStore {
    db: DbConn,
}

/// PostgreSQL course store.
pub struct PostgresCourseStore {
    db: DbConn,
}

/// PostgreSQL purchase store.
pub struct PostgresPurchaseStore {
    db: DbConn,
}

impl PostgresAdminStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

impl PostgresUserStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

impl PostgresCourseStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

impl PostgresPurchaseStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

fn map_insert_err(e: sea_orm::DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("record already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminStore {
    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepoError> {
        let result = AdminEntity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepoError> {
        tracing::debug!(admin_email = %mask_email(email), "Finding admin by email");

        let result = AdminEntity::find()
            .filter(admin::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, record: Admin) -> Result<Admin, RepoError> {
        let model = admin::ActiveModel::from(record)
            .insert(&self.db)
            .await
            .map_err(map_insert_err)?;

        Ok(model.into())
    }
}

#[async_trait]
impl UserRepository for PostgresUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, record: User) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(record)
            .insert(&self.db)
            .await
            .map_err(map_insert_err)?;

        Ok(model.into())
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseStore {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepoError> {
        let result = CourseEntity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, RepoError> {
        let result = CourseEntity::find()
            .filter(course::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_creator(&self, creator_id: AdminId) -> Result<Vec<Course>, RepoError> {
        let result = CourseEntity::find()
            .filter(course::Column::CreatorId.eq(creator_id.0))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, record: Course) -> Result<Course, RepoError> {
        let model = course::ActiveModel::from(record)
            .insert(&self.db)
            .await
            .map_err(map_insert_err)?;

        Ok(model.into())
    }

    async fn update_owned(
        &self,
        id: CourseId,
        creator_id: AdminId,
        content: CourseContent,
    ) -> Result<u64, RepoError> {
        // The creator filter is the ownership check: a non-owner's update
        // matches zero rows, same as a nonexistent course.
        let result = CourseEntity::update_many()
            .col_expr(course::Column::Title, Expr::value(content.title))
            .col_expr(course::Column::Description, Expr::value(content.description))
            .col_expr(course::Column::Price, Expr::value(content.price))
            .col_expr(course::Column::ImageUrl, Expr::value(content.image_url))
            .col_expr(course::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(course::Column::Id.eq(id.0))
            .filter(course::Column::CreatorId.eq(creator_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl PurchaseRepository for PostgresPurchaseStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Purchase>, RepoError> {
        let result = PurchaseEntity::find()
            .filter(purchase::Column::UserId.eq(user_id.0))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
