//! Triple Store - the in-memory fact set with subject and object lookups.

use std::collections::{BTreeSet, HashMap};

use super::{parse_statements, MalformedStatement, Triple};

/// Outcome of ingesting a block of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Triples that were not in the store before.
    pub inserted: usize,

    /// Well-formed triples that were already stored.
    pub duplicates: usize,

    /// Fragments that could not be parsed.
    pub skipped: Vec<MalformedStatement>,
}

impl IngestReport {
    /// Number of fragments that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// An append-only set of triples.
///
/// Duplicate insertions collapse. Lookups are exact, case-sensitive string
/// matches against the subject or object, and return triples in their
/// derived order.
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    triples: BTreeSet<Triple>,

    /// Index: subject -> triples with that subject.
    by_subject: HashMap<String, BTreeSet<Triple>>,

    /// Index: object -> triples with that object.
    by_object: HashMap<String, BTreeSet<Triple>>,
}

impl TripleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store and ingest the given facts once.
    pub fn seeded<I, S>(facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for text in facts {
            store.ingest(text.as_ref());
        }
        store
    }

    /// Insert a triple. Returns `false` if it was already stored.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.triples.contains(&triple) {
            return false;
        }

        self.by_subject
            .entry(triple.subject().to_string())
            .or_default()
            .insert(triple.clone());
        self.by_object
            .entry(triple.object().to_string())
            .or_default()
            .insert(triple.clone());
        self.triples.insert(triple)
    }

    /// Parse `text` as statements and insert every well-formed one.
    ///
    /// Malformed fragments are skipped and listed in the report; the rest of
    /// the batch is still stored.
    pub fn ingest(&mut self, text: &str) -> IngestReport {
        let parsed = parse_statements(text);
        let mut report = IngestReport {
            skipped: parsed.skipped,
            ..IngestReport::default()
        };

        for triple in parsed.triples {
            if self.insert(triple) {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
            }
        }

        for malformed in &report.skipped {
            tracing::warn!("Skipping malformed statement: {}", malformed);
        }
        tracing::debug!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            skipped = report.skipped.len(),
            "Ingested statements"
        );

        report
    }

    /// All triples whose subject equals `term`.
    pub fn match_as_subject(&self, term: &str) -> Vec<&Triple> {
        self.by_subject
            .get(term)
            .map(|triples| triples.iter().collect())
            .unwrap_or_default()
    }

    /// All triples whose object equals `term`.
    pub fn match_as_object(&self, term: &str) -> Vec<&Triple> {
        self.by_object
            .get(term)
            .map(|triples| triples.iter().collect())
            .unwrap_or_default()
    }

    /// Check whether a triple is stored.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterate over all stored triples.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get the total number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}
