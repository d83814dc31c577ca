//! Grounding Resolver - looks up every prompt term on both sides of the store
//! and builds the context block handed to the language model.
//!
//! 1. **Extract**: split the prompt into terms
//! 2. **Lookup**: match each term as an object, then as a subject
//! 3. **Dedupe**: keep each rendered fact once, in first-seen order
//! 4. **Format**: join facts with `". "`, or fall back to the not-found directive

use std::collections::HashSet;

use fact_store::TripleStore;

use crate::terms::extract_terms;

/// Separator between facts in the context block.
pub const FACT_DELIMITER: &str = ". ";

/// What the store knows about a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grounding {
    /// Distinct facts rendered as `"subject predicate object"`.
    Facts(Vec<String>),

    /// Nothing matched. Carries the prompt verbatim for the fallback message.
    NotFound { prompt: String },
}

impl Grounding {
    /// Check if any facts were found.
    pub fn is_found(&self) -> bool {
        matches!(self, Grounding::Facts(_))
    }

    /// The matched facts, empty for [`Grounding::NotFound`].
    pub fn facts(&self) -> &[String] {
        match self {
            Grounding::Facts(facts) => facts,
            Grounding::NotFound { .. } => &[],
        }
    }

    /// Render the context string sent to the model.
    pub fn to_context_string(&self) -> String {
        match self {
            Grounding::Facts(facts) => facts.join(FACT_DELIMITER),
            Grounding::NotFound { prompt } => not_found_message(prompt),
        }
    }
}

impl std::fmt::Display for Grounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_context_string())
    }
}

/// The directive used when the store has nothing on the prompt.
pub fn not_found_message(prompt: &str) -> String {
    format!(
        "No data found about {}. Say that the answer is not found in the database. Do not say anything else.",
        prompt
    )
}

/// Resolve a prompt against the store.
///
/// An empty prompt, or one made only of punctuation, yields
/// [`Grounding::NotFound`]. The store is never modified.
pub fn resolve(store: &TripleStore, prompt: &str) -> Grounding {
    let terms = extract_terms(prompt);

    let mut seen: HashSet<String> = HashSet::new();
    let mut facts = Vec::new();

    for term in &terms {
        let hits = store
            .match_as_object(term.as_str())
            .into_iter()
            .chain(store.match_as_subject(term.as_str()));

        for triple in hits {
            let rendered = triple.to_string();
            if seen.insert(rendered.clone()) {
                facts.push(rendered);
            }
        }
    }

    tracing::debug!(
        terms = terms.len(),
        facts = facts.len(),
        "Resolved prompt against fact store"
    );

    if facts.is_empty() {
        Grounding::NotFound {
            prompt: prompt.to_string(),
        }
    } else {
        Grounding::Facts(facts)
    }
}

/// Resolve a prompt straight to its context string.
pub fn resolve_context(store: &TripleStore, prompt: &str) -> String {
    resolve(store, prompt).to_context_string()
}
