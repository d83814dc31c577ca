//! Triple definitions - the subject-predicate-object fact record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a triple by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripleError {
    #[error("triple {0} must not be empty")]
    EmptyComponent(&'static str),
}

/// A single stored fact.
///
/// All three components are non-empty. Ordering is derived field by field
/// (subject, predicate, object) so store lookups come back in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TripleParts")]
pub struct Triple {
    subject: String,
    predicate: String,
    object: String,
}

impl Triple {
    /// Create a triple, rejecting empty components.
    pub fn try_new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Result<Self, TripleError> {
        let subject = subject.into();
        let predicate = predicate.into();
        let object = object.into();

        if subject.is_empty() {
            return Err(TripleError::EmptyComponent("subject"));
        }
        if predicate.is_empty() {
            return Err(TripleError::EmptyComponent("predicate"));
        }
        if object.is_empty() {
            return Err(TripleError::EmptyComponent("object"));
        }

        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    /// Build a triple from whitespace-split tokens.
    ///
    /// Tokens from `split_whitespace` are never empty, and `predicate` holds at
    /// least one of them, so every component is non-empty.
    pub(crate) fn from_tokens(subject: &str, predicate: &[&str], object: &str) -> Self {
        debug_assert!(!subject.is_empty() && !predicate.is_empty() && !object.is_empty());
        Self {
            subject: subject.to_string(),
            predicate: predicate.join(" "),
            object: object.to_string(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn object(&self) -> &str {
        &self.object
    }
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
struct TripleParts {
    subject: String,
    predicate: String,
    object: String,
}

impl TryFrom<TripleParts> for Triple {
    type Error = TripleError;

    fn try_from(parts: TripleParts) -> Result<Self, Self::Error> {
        Triple::try_new(parts.subject, parts.predicate, parts.object)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
