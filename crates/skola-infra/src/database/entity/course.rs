//! Course entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use skola_core::domain::{AdminId, CourseId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub creator_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin::Entity",
        from = "Column::CreatorId",
        to = "super::admin::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Admin,
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for skola_core::domain::Course {
    fn from(model: Model) -> Self {
        Self {
            id: CourseId(model.id),
            title: model.title,
            description: model.description,
            price: model.price,
            image_url: model.image_url,
            creator_id: AdminId(model.creator_id),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<skola_core::domain::Course> for ActiveModel {
    fn from(course: skola_core::domain::Course) -> Self {
        Self {
            id: Set(course.id.0),
            title: Set(course.title),
            description: Set(course.description),
            price: Set(course.price),
            image_url: Set(course.image_url),
            creator_id: Set(course.creator_id.0),
            created_at: Set(course.created_at.into()),
            updated_at: Set(course.updated_at.into()),
        }
    }
}
