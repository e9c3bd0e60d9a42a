//! Author domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::Candidate;

/// Author domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "Grace")]
    pub firstname: String,
    #[schema(example = "Hopper")]
    pub lastname: String,
}

/// Author create/update payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AuthorPayload {
    #[schema(example = "Grace")]
    pub firstname: Option<String>,
    #[schema(example = "Hopper")]
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct AuthorDraft {
    #[validate(
        required(message = "This value should not be null."),
        length(min = 1, message = "This value should not be blank.")
    )]
    pub firstname: Option<String>,
    #[validate(
        required(message = "This value should not be null."),
        length(min = 1, message = "This value should not be blank.")
    )]
    pub lastname: Option<String>,
}

impl AuthorDraft {
    pub const FIELDS: &'static [&'static str] = &["firstname", "lastname"];

    pub fn apply(&mut self, payload: AuthorPayload) {
        if let Some(firstname) = payload.firstname {
            self.firstname = Some(firstname);
        }
        if let Some(lastname) = payload.lastname {
            self.lastname = Some(lastname);
        }
    }
}

impl From<AuthorPayload> for AuthorDraft {
    fn from(payload: AuthorPayload) -> Self {
        let mut draft = Self::default();
        draft.apply(payload);
        draft
    }
}

impl From<Author> for AuthorDraft {
    fn from(author: Author) -> Self {
        Self {
            firstname: Some(author.firstname),
            lastname: Some(author.lastname),
        }
    }
}

impl Candidate for AuthorDraft {
    fn fields(&self) -> &'static [&'static str] {
        Self::FIELDS
    }
}
