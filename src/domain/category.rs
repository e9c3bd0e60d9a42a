//! Category domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::Candidate;

/// Category domain entity. Articles point at it; it owns none of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Systems programming")]
    pub name: String,
}

/// Category create/update payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryPayload {
    #[schema(example = "Systems programming")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CategoryDraft {
    #[validate(
        required(message = "This value should not be null."),
        length(min = 1, message = "This value should not be blank.")
    )]
    pub name: Option<String>,
}

impl CategoryDraft {
    pub const FIELDS: &'static [&'static str] = &["name"];

    pub fn apply(&mut self, payload: CategoryPayload) {
        if let Some(name) = payload.name {
            self.name = Some(name);
        }
    }
}

impl From<CategoryPayload> for CategoryDraft {
    fn from(payload: CategoryPayload) -> Self {
        let mut draft = Self::default();
        draft.apply(payload);
        draft
    }
}

impl From<Category> for CategoryDraft {
    fn from(category: Category) -> Self {
        Self {
            name: Some(category.name),
        }
    }
}

impl Candidate for CategoryDraft {
    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }
}
