//! Admin entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use skola_core::domain::AdminId;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for skola_core::domain::Admin {
    fn from(model: Model) -> Self {
        Self {
            id: AdminId(model.id),
            email: model.email,
            password_hash: model.password_hash,
            first_name: model.first_name,
            last_name: model.last_name,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<skola_core::domain::Admin> for ActiveModel {
    fn from(admin: skola_core::domain::Admin) -> Self {
        Self {
            id: Set(admin.id.0),
            email: Set(admin.email),
            password_hash: Set(admin.password_hash),
            first_name: Set(admin.first_name),
            last_name: Set(admin.last_name),
            created_at: Set(admin.created_at.into()),
            updated_at: Set(admin.updated_at.into()),
        }
    }
}
