//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "Text")]
    pub contact_info: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog::Entity")]
    Blog,
}

impl Related<super::blog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for myblog_core::domain::Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            bio: model.bio,
            contact_info: model.contact_info,
            created_at: model.created_at.into(),
        }
    }
}

impl From<myblog_core::domain::Author> for ActiveModel {
    fn from(author: myblog_core::domain::Author) -> Self {
        Self {
            id: Set(author.id),
            username: Set(author.username),
            password_hash: Set(author.password_hash),
            bio: Set(author.bio),
            contact_info: Set(author.contact_info),
            created_at: Set(author.created_at.into()),
        }
    }
}
