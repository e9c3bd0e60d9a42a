//! Article database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{Article, ArticleDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category_id: Option<i32>,
    /// Not a foreign key: the author may already be gone
    pub author_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Article {
    fn from(model: Model) -> Self {
        Article {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category_id,
            author: model.author_id,
        }
    }
}

/// Build a row from a checked draft. The id stays unset; callers set it
/// for updates.
impl From<ArticleDraft> for ActiveModel {
    fn from(draft: ArticleDraft) -> Self {
        Self {
            id: NotSet,
            name: Set(draft.name.unwrap_or_default()),
            description: Set(draft.description.unwrap_or_default()),
            category_id: Set(draft.category),
            author_id: Set(draft.author),
        }
    }
}
