//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, FromJsonQueryResult, QueryFilter, Select, Set};
use serde::{Deserialize, Serialize};

use quill_core::domain::{CreatePostRequest, Post};

/// Ordered tag list, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Tags(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub published_on: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Tags,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Predicate matching posts that have not been soft-deleted.
    ///
    /// Every read and update of a single post goes through this scope.
    pub fn live() -> Condition {
        Condition::all().add(Column::IsDeleted.eq(false))
    }

    /// Select over live posts only.
    pub fn find_live() -> Select<Entity> {
        Self::find().filter(Self::live())
    }
}

impl ActiveModel {
    /// Fresh row for a create request: new id, not deleted, both timestamps now.
    pub fn for_create(request: &CreatePostRequest, now: DateTimeWithTimeZone) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            title: Set(request.title.clone()),
            content: Set(request.content.clone()),
            author: Set(request.author.clone()),
            published_on: Set(request.published_on.into()),
            tags: Set(Tags(request.tags.clone())),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            published_on: model.published_on.into(),
            tags: model.tags.0,
            is_deleted: model.is_deleted,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
