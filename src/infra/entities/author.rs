//! Author database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{Author, AuthorDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article::Entity")]
    Article,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
        }
    }
}

impl From<AuthorDraft> for ActiveModel {
    fn from(draft: AuthorDraft) -> Self {
        Self {
            id: NotSet,
            firstname: Set(draft.firstname.unwrap_or_default()),
            lastname: Set(draft.lastname.unwrap_or_default()),
        }
    }
}
