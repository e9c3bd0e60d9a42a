//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod user;

#[allow(unused_imports)]
pub use article::{ActiveModel as ArticleActiveModel, Entity as ArticleEntity, Model as ArticleModel};
#[allow(unused_imports)]
pub use author::{ActiveModel as AuthorActiveModel, Entity as AuthorEntity, Model as AuthorModel};
#[allow(unused_imports)]
pub use category::{
    ActiveModel as CategoryActiveModel, Entity as CategoryEntity, Model as CategoryModel,
};
#[allow(unused_imports)]
pub use comment::{ActiveModel as CommentActiveModel, Entity as CommentEntity, Model as CommentModel};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
