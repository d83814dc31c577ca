//! # Grounding Core
//!
//! Grounds chat turns in a small fact store. Statements live in the
//! `fact_store` crate; this crate scans each user prompt for known terms,
//! turns matching statements into a context block, and runs the turn against a
//! language model behind the [`ChatCompletion`] trait.
//!
//! ## Core Components
//!
//! - **terms**: Splits prompts into lookup terms
//! - **resolver**: Two-sided store lookup, dedupe, and the not-found fallback
//! - **conversation**: Role-tagged, append-only dialogue history
//! - **session**: One store and one conversation per dialogue
//! - **registry**: Concurrent map of open sessions
//! - **config**: Seed facts and conversation preamble, loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Owned State**: Every session owns its facts and history; nothing is process-wide
//! - **Explicit Seeding**: Demonstration facts are loaded once when a session is created
//! - **Graceful Degradation**: Unknown prompts produce a fallback directive, never an error

pub mod completion;
pub mod config;
pub mod conversation;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod terms;

pub use completion::*;
pub use config::*;
pub use conversation::*;
pub use registry::*;
pub use resolver::*;
pub use session::*;
pub use terms::*;

pub use fact_store;
