//! The seam to the language model.
//!
//! The core never talks to a provider directly. It hands a message list and
//! an optional credential to a [`ChatCompletion`] and gets a reply back.

use async_trait::async_trait;
use thiserror::Error;

use crate::conversation::Message;

/// Errors that a completion provider can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("Completion provider error: {0}")]
    Provider(String),

    #[error("Completion provider returned an empty reply")]
    EmptyReply,
}

/// An API key passed along with a single completion call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the provider to put on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Anything that can turn a conversation into a reply.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        credential: Option<&Credential>,
    ) -> Result<String, CompletionError>;
}
