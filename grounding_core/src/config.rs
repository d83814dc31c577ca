//! Session configuration - demonstration facts and the opening conversation.
//!
//! ```toml
//! seed_facts = ["Baer hasn't viewed fracture_reports."]
//!
//! [[preamble]]
//! role = "system"
//! content = "You are a helpful assistant."
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversation::{Message, Role};

/// Fact loaded into every new session's store.
pub const DEMO_FACT: &str = "Baer hasn't viewed fracture_reports.";

/// The scripted clinic dialogue new conversations open with.
const DEMO_DIALOGUE: &[(Role, &str)] = &[
    (Role::System, "You are a helpful assistant."),
    (Role::Assistant, "Hi, I'm the Medaid chatbot at Fondationhs. We want to promote health access for urban youth around the world. Describe your health problem in your own words."),
    (Role::User, "I would like to meet Dr.Baer ."),
    (Role::Assistant, "Do you have an appointment already? If not we can set up a meeting with Dr. Bawa instead."),
    (Role::User, "Yes, I have an appointment"),
    (Role::Assistant, "Dr. Baer works on Orthopaedics, specifically around bone joint problems at the Irvine Central clinic."),
    (Role::User, "Okay understood. I had an appointment to meet him to check in on my fractured foot"),
    (Role::Assistant, "Sure! Dr. Baer is well versed in fracture joint operations and surgeries. At what time is your appointment?"),
    (Role::User, "1pm. Does Dr. Baer also consult for migraines and headaches"),
    (Role::Assistant, "Dr. Baer does consult for headaches, though today his schedule is completely packed. He has a freer schedule on Monday, when I could book an appointment."),
    (Role::User, "Sounds good. Its 1pm already, will Dr. Baer be coming?"),
    (Role::Assistant, "He should be here any moment. Dr. Baer got a little late today with his previous surgery."),
    (Role::User, "Great! I'm Ken by the way"),
];

/// The demo dialogue as messages.
pub fn demo_dialogue() -> Vec<Message> {
    DEMO_DIALOGUE
        .iter()
        .map(|(role, content)| Message::new(*role, *content))
        .collect()
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings applied when a session is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundingConfig {
    /// Statements ingested once into each new session's store.
    pub seed_facts: Vec<String>,

    /// Messages every new conversation starts with.
    pub preamble: Vec<Message>,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            seed_facts: vec![DEMO_FACT.to_string()],
            preamble: demo_dialogue(),
        }
    }
}

impl GroundingConfig {
    /// A config with no seed facts and no preamble.
    pub fn empty() -> Self {
        Self {
            seed_facts: Vec::new(),
            preamble: Vec::new(),
        }
    }

    /// Parse a config from TOML. Missing fields keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn with_seed_facts(mut self, facts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.seed_facts = facts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preamble(mut self, preamble: Vec<Message>) -> Self {
        self.preamble = preamble;
        self
    }
}
