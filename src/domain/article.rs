//! Article domain entity, payload and validation candidate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::Candidate;

/// Article domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ownership in practice")]
    pub name: String,
    #[schema(example = "How the borrow checker shapes API design")]
    pub description: String,
    /// Category id, null once the category is deleted
    #[schema(example = 3)]
    pub category: Option<i32>,
    /// Author id
    #[schema(example = 7)]
    pub author: Option<i32>,
}

/// Article create/update payload. Absent fields are left untouched on
/// update; `null` clears a reference.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ArticlePayload {
    #[schema(example = "Ownership in practice")]
    pub name: Option<String>,
    #[schema(example = "How the borrow checker shapes API design")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<i32>, example = 3)]
    pub category: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<i32>, example = 7)]
    pub author: Option<Option<i32>>,
}

/// Article as it would be written, before it reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ArticleDraft {
    #[validate(
        required(message = "This value should not be null."),
        length(min = 1, message = "This value should not be blank.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "This value should not be null."),
        length(min = 1, message = "This value should not be blank.")
    )]
    pub description: Option<String>,
    pub category: Option<i32>,
    pub author: Option<i32>,
}

impl ArticleDraft {
    pub const FIELDS: &'static [&'static str] = &["name", "description", "category", "author"];

    /// Overwrite the fields present in the payload.
    pub fn apply(&mut self, payload: ArticlePayload) {
        if let Some(name) = payload.name {
            self.name = Some(name);
        }
        if let Some(description) = payload.description {
            self.description = Some(description);
        }
        if let Some(category) = payload.category {
            self.category = category;
        }
        if let Some(author) = payload.author {
            self.author = author;
        }
    }
}

impl From<ArticlePayload> for ArticleDraft {
    fn from(payload: ArticlePayload) -> Self {
        let mut draft = Self::default();
        draft.apply(payload);
        draft
    }
}

impl From<Article> for ArticleDraft {
    fn from(article: Article) -> Self {
        Self {
            name: Some(article.name),
            description: Some(article.description),
            category: article.category,
            author: article.author,
        }
    }
}

impl Candidate for ArticleDraft {
    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }
}

/// What deleting an article does to the author it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorCascade {
    /// Always remove the author, even when other articles reference it.
    #[default]
    Always,
    /// Remove the author only when no other article references it.
    Unshared,
}

impl FromStr for AuthorCascade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(AuthorCascade::Always),
            "unshared" => Ok(AuthorCascade::Unshared),
            other => Err(format!("Unknown author cascade policy '{}'", other)),
        }
    }
}

impl std::fmt::Display for AuthorCascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthorCascade::Always => write!(f, "always"),
            AuthorCascade::Unshared => write!(f, "unshared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            id: 1,
            name: "Old name".to_string(),
            description: "Old description".to_string(),
            category: Some(2),
            author: Some(5),
        }
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut draft = ArticleDraft::from(article());
        draft.apply(ArticlePayload {
            name: Some("New name".to_string()),
            ..Default::default()
        });

        assert_eq!(draft.name.as_deref(), Some("New name"));
        assert_eq!(draft.description.as_deref(), Some("Old description"));
        assert_eq!(draft.category, Some(2));
        assert_eq!(draft.author, Some(5));
    }

    #[test]
    fn test_null_clears_category_but_absent_keeps_it() {
        let cleared: ArticlePayload = serde_json::from_str(r#"{"category": null}"#).unwrap();
        let untouched: ArticlePayload = serde_json::from_str(r#"{"name": "x"}"#).unwrap();

        let mut draft = ArticleDraft::from(article());
        draft.apply(untouched);
        assert_eq!(draft.category, Some(2));

        draft.apply(cleared);
        assert_eq!(draft.category, None);
    }

    #[test]
    fn test_payload_rejects_unknown_fields() {
        let result = serde_json::from_str::<ArticlePayload>(r#"{"name": "x", "slug": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_author_cascade_parsing() {
        assert_eq!("always".parse::<AuthorCascade>(), Ok(AuthorCascade::Always));
        assert_eq!(" Unshared ".parse::<AuthorCascade>(), Ok(AuthorCascade::Unshared));
        assert!("sometimes".parse::<AuthorCascade>().is_err());
        assert_eq!(AuthorCascade::Unshared.to_string(), "unshared");
    }
}
