//! Validation gate.
//!
//! Candidates are checked with `validator` derives; the gate turns the
//! resulting error map into a list ordered by the candidate's declared
//! field order, so "the first violation" is deterministic.

use validator::{Validate, ValidationErrors};

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
    /// Property path of the offending field, e.g. `name`
    pub field: String,
}

impl Violation {
    pub fn new(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// Ordered list of violations. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The violation callers report; only this one is surfaced.
    pub fn first(&self) -> Option<&Violation> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// `Ok` when empty, otherwise the first violation.
    pub fn into_result(self) -> Result<(), Violation> {
        match self.0.into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Something the gate can check: derives `Validate` and declares its
/// field order.
pub trait Candidate: Validate + Send + Sync {
    fn fields(&self) -> &'static [&'static str];
}

/// Checks a candidate entity before a write proceeds.
pub trait ValidationGate: Send + Sync {
    fn check(&self, candidate: &dyn Candidate) -> Violations;
}

/// Default gate: `validator` rules, ranked by declared field order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldOrderGate;

impl ValidationGate for FieldOrderGate {
    fn check(&self, candidate: &dyn Candidate) -> Violations {
        match candidate.validate() {
            Ok(()) => Violations::default(),
            Err(errors) => ordered(&errors, candidate.fields()),
        }
    }
}

fn ordered(errors: &ValidationErrors, fields: &[&str]) -> Violations {
    let mut ranked: Vec<(usize, String, Vec<Violation>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            // Undeclared fields sort after declared ones
            let rank = fields
                .iter()
                .position(|declared| *declared == field)
                .unwrap_or(fields.len());
            let violations = errs
                .iter()
                .map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    Violation::new(message, field.clone())
                })
                .collect();
            (rank, field, violations)
        })
        .collect();

    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    ranked.into_iter().flat_map(|(_, _, v)| v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArticleDraft, CommentDraft};

    #[test]
    fn test_valid_candidate_has_no_violations() {
        let draft = ArticleDraft {
            name: Some("Rust".to_string()),
            description: Some("Ownership explained".to_string()),
            category: None,
            author: None,
        };

        let violations = FieldOrderGate.check(&draft);
        assert!(violations.is_empty());
        assert!(violations.into_result().is_ok());
    }

    #[test]
    fn test_violations_follow_declared_field_order() {
        // Both fields missing: name is declared before description
        let draft = ArticleDraft::default();

        let violations = FieldOrderGate.check(&draft);
        assert_eq!(violations.len(), 2);
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "description"]);
        assert_eq!(violations.first().unwrap().field, "name");
    }

    #[test]
    fn test_blank_string_is_rejected() {
        let draft = ArticleDraft {
            name: Some("Rust".to_string()),
            description: Some(String::new()),
            category: None,
            author: None,
        };

        let first = FieldOrderGate.check(&draft).into_result().unwrap_err();
        assert_eq!(first.field, "description");
        assert_eq!(first.message, "This value should not be blank.");
    }

    #[test]
    fn test_missing_reference_is_rejected() {
        let draft = CommentDraft {
            content: Some("Nice".to_string()),
            article: None,
        };

        let first = FieldOrderGate.check(&draft).into_result().unwrap_err();
        assert_eq!(first, Violation::new("This value should not be null.", "article"));
    }
}
