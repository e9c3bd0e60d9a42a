//! Comment domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::Candidate;

/// Comment domain entity. Removed together with its article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    #[schema(example = 12)]
    pub id: i32,
    #[schema(example = "Clear and to the point.")]
    pub content: String,
    /// Id of the commented article
    #[schema(example = 1)]
    pub article: i32,
}

/// Comment create/update payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CommentPayload {
    #[schema(example = "Clear and to the point.")]
    pub content: Option<String>,
    #[schema(example = 1)]
    pub article: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CommentDraft {
    #[validate(
        required(message = "This value should not be null."),
        length(min = 1, message = "This value should not be blank.")
    )]
    pub content: Option<String>,
    #[validate(required(message = "This value should not be null."))]
    pub article: Option<i32>,
}

impl CommentDraft {
    pub const FIELDS: &'static [&'static str] = &["content", "article"];

    pub fn apply(&mut self, payload: CommentPayload) {
        if let Some(content) = payload.content {
            self.content = Some(content);
        }
        if let Some(article) = payload.article {
            self.article = Some(article);
        }
    }
}

impl From<CommentPayload> for CommentDraft {
    fn from(payload: CommentPayload) -> Self {
        let mut draft = Self::default();
        draft.apply(payload);
        draft
    }
}

impl From<Comment> for CommentDraft {
    fn from(comment: Comment) -> Self {
        Self {
            content: Some(comment.content),
            article: Some(comment.article),
        }
    }
}

impl Candidate for CommentDraft {
    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }
}
