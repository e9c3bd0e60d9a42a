//! Domain layer - blog entities, payloads and the validation gate
//!
//! Contains no storage code. Drafts are what the services validate
//! before anything reaches the store.

pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod password;
pub mod user;
pub mod validation;

use serde::{Deserialize, Deserializer};

pub use article::{Article, ArticleDraft, ArticlePayload, AuthorCascade};
pub use author::{Author, AuthorDraft, AuthorPayload};
pub use category::{Category, CategoryDraft, CategoryPayload};
pub use comment::{Comment, CommentDraft, CommentPayload};
pub use password::Password;
pub use user::NewUser;
pub use validation::{Candidate, FieldOrderGate, ValidationGate, Violation, Violations};

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field
/// (`None`, via `#[serde(default)]`).
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
