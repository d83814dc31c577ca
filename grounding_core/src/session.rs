//! A session owns one fact store and one conversation.
//!
//! Turns run against the session's own history only; nothing is shared
//! between sessions.

use fact_store::{IngestReport, TripleStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::completion::{ChatCompletion, CompletionError, Credential};
use crate::config::GroundingConfig;
use crate::conversation::{Conversation, Message};
use crate::resolver::resolve;

/// Unique identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from running a turn.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),
}

/// One dialogue with its own facts and history.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    store: TripleStore,
    conversation: Conversation,
}

impl Session {
    /// Create a session seeded from the config.
    ///
    /// Seed facts are ingested here, once. Resolving never re-inserts them.
    pub fn new(config: &GroundingConfig) -> Self {
        Self::with_history(config, config.preamble.clone())
    }

    /// Create a session whose conversation starts from existing messages
    /// instead of the configured preamble.
    pub fn with_history(config: &GroundingConfig, history: Vec<Message>) -> Self {
        let session = Self {
            id: SessionId::new(),
            store: TripleStore::seeded(&config.seed_facts),
            conversation: Conversation::from(history),
        };
        tracing::debug!(
            session = %session.id,
            facts = session.store.len(),
            messages = session.conversation.len(),
            "Created session"
        );
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn store(&self) -> &TripleStore {
        &self.store
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Add statements to this session's store.
    pub fn ingest(&mut self, text: &str) -> IngestReport {
        self.store.ingest(text)
    }

    /// The context string the store produces for `prompt`.
    pub fn resolve_context(&self, prompt: &str) -> String {
        resolve(&self.store, prompt).to_context_string()
    }

    /// Answer `prompt` with the store's facts injected as context.
    ///
    /// On success the conversation gains, in order, the context (assistant),
    /// the prompt (user) and the reply (assistant). On failure it is left
    /// unchanged.
    pub async fn respond_grounded(
        &mut self,
        prompt: &str,
        completion: &dyn ChatCompletion,
        credential: Option<&Credential>,
    ) -> Result<String, SessionError> {
        let context = self.resolve_context(prompt);
        let staged = vec![Message::assistant(context), Message::user(prompt)];
        self.run_turn(staged, completion, credential).await
    }

    /// Answer `prompt` without consulting the store.
    ///
    /// On success the conversation gains the prompt (user) and the reply
    /// (assistant).
    pub async fn respond_ungrounded(
        &mut self,
        prompt: &str,
        completion: &dyn ChatCompletion,
        credential: Option<&Credential>,
    ) -> Result<String, SessionError> {
        self.run_turn(vec![Message::user(prompt)], completion, credential)
            .await
    }

    async fn run_turn(
        &mut self,
        staged: Vec<Message>,
        completion: &dyn ChatCompletion,
        credential: Option<&Credential>,
    ) -> Result<String, SessionError> {
        let mut outgoing = self.conversation.messages().to_vec();
        outgoing.extend(staged.iter().cloned());

        tracing::debug!(
            session = %self.id,
            messages = outgoing.len(),
            "Requesting completion"
        );
        let reply = completion.complete(&outgoing, credential).await?;

        self.conversation.extend(staged);
        self.conversation.push_assistant(reply.clone());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::demo_dialogue;
    use crate::conversation::Role;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replies with a fixed string and records what it was sent.
    #[derive(Default)]
    struct Scripted {
        reply: Option<String>,
        seen: Mutex<Vec<(Vec<Message>, Option<String>)>>,
    }

    impl Scripted {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self::default()
        }

        fn calls(&self) -> Vec<(Vec<Message>, Option<String>)> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatCompletion for Scripted {
        async fn complete(
            &self,
            messages: &[Message],
            credential: Option<&Credential>,
        ) -> Result<String, CompletionError> {
            self.seen.lock().unwrap().push((
                messages.to_vec(),
                credential.map(|c| c.expose().to_string()),
            ));
            self.reply
                .clone()
                .ok_or_else(|| CompletionError::Provider("unavailable".to_string()))
        }
    }

    #[test]
    fn test_new_session_is_seeded_once() {
        let session = Session::new(&GroundingConfig::default());

        assert_eq!(session.store().len(), 1);
        assert_eq!(session.conversation().messages(), demo_dialogue().as_slice());
        assert!(session
            .resolve_context("Has Baer looked?")
            .contains("Baer hasn't viewed fracture_reports"));
        // Resolving does not re-seed.
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let config = GroundingConfig::empty();
        assert_ne!(Session::new(&config).id(), Session::new(&config).id());
    }

    #[tokio::test]
    async fn test_grounded_turn_appends_in_order() {
        let mut session = Session::new(&GroundingConfig::empty());
        session.ingest("Baer consults_for headaches.");
        let model = Scripted::replying("Yes, Dr. Baer consults for headaches.");

        let reply = session
            .respond_grounded("Does Dr. Baer consult for headaches?", &model, None)
            .await
            .unwrap();

        assert_eq!(reply, "Yes, Dr. Baer consults for headaches.");
        assert_eq!(
            session.conversation().tail(3),
            &[
                Message::assistant("Baer consults_for headaches"),
                Message::user("Does Dr. Baer consult for headaches?"),
                Message::assistant("Yes, Dr. Baer consults for headaches."),
            ]
        );
    }

    #[tokio::test]
    async fn test_model_sees_session_history() {
        let config = GroundingConfig::empty().with_preamble(vec![Message::system("Be brief.")]);
        let mut session = Session::new(&config);
        let model = Scripted::replying("ok");

        session.respond_grounded("Hello", &model, None).await.unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        let sent = &calls[0].0;
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0], Message::system("Be brief."));
        assert_eq!(sent[1].role, Role::Assistant);
        assert!(sent[1].content.contains("not found in the database"));
        assert_eq!(sent[2], Message::user("Hello"));
    }

    #[tokio::test]
    async fn test_ungrounded_turn() {
        let mut session = Session::new(&GroundingConfig::default());
        let model = Scripted::replying("Nice to meet you, Ken.");

        session
            .respond_ungrounded("Great! I'm Ken by the way", &model, None)
            .await
            .unwrap();

        assert_eq!(session.conversation().len(), demo_dialogue().len() + 2);
        assert_eq!(
            session.conversation().tail(2),
            &[
                Message::user("Great! I'm Ken by the way"),
                Message::assistant("Nice to meet you, Ken."),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_turn_leaves_history_unchanged() {
        let mut session = Session::new(&GroundingConfig::default());
        let before = session.conversation().clone();

        let result = session
            .respond_grounded("Baer?", &Scripted::failing(), None)
            .await;

        assert!(matches!(
            result,
            Err(SessionError::Completion(CompletionError::Provider(_)))
        ));
        assert_eq!(session.conversation(), &before);
    }

    #[tokio::test]
    async fn test_credential_is_passed_per_call() {
        let mut session = Session::new(&GroundingConfig::empty());
        let model = Scripted::replying("ok");

        let key = Credential::new("sk-first");
        session.respond_ungrounded("a", &model, Some(&key)).await.unwrap();
        session.respond_ungrounded("b", &model, None).await.unwrap();

        let calls = model.calls();
        assert_eq!(calls[0].1.as_deref(), Some("sk-first"));
        assert_eq!(calls[1].1, None);
    }

    #[test]
    fn test_with_history_replaces_preamble() {
        let session = Session::with_history(
            &GroundingConfig::default(),
            vec![Message::user("I would like to meet Dr.Baer .")],
        );

        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.store().len(), 1);
    }
}
