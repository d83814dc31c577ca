//! # Fact Store
//!
//! The fact layer of the grounded chat core - statements, the statement parser,
//! and the in-memory triple store. This crate holds facts and answers exact-match
//! lookups; it does not contain any prompt or language-model logic.

pub mod statement;
pub mod store;
pub mod triple;

pub use statement::*;
pub use store::*;
pub use triple::*;
