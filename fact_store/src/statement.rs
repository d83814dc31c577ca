//! Statement parser - turns short declarative sentences into triples.
//!
//! Input is split into sentences on `.`, and each sentence is split on
//! whitespace: the first token is the subject, the last token is the object,
//! and everything in between (joined by single spaces) is the predicate.

use thiserror::Error;

use super::Triple;

/// Sentence delimiter for ingestion text.
pub const SENTENCE_DELIMITER: char = '.';

/// A sentence fragment that could not be turned into a triple.
///
/// These are reported back to the caller and never abort a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedStatement {
    #[error("statement {fragment:?} has {tokens} token(s), at least two are required")]
    TooFewTokens { fragment: String, tokens: usize },

    #[error("statement {fragment:?} has a subject and an object but no predicate")]
    MissingPredicate { fragment: String },
}

impl MalformedStatement {
    /// The offending fragment, trimmed.
    pub fn fragment(&self) -> &str {
        match self {
            MalformedStatement::TooFewTokens { fragment, .. } => fragment,
            MalformedStatement::MissingPredicate { fragment } => fragment,
        }
    }
}

/// Result of parsing one ingestion string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStatements {
    /// Triples in sentence order. May contain duplicates.
    pub triples: Vec<Triple>,

    /// Fragments that were skipped.
    pub skipped: Vec<MalformedStatement>,
}

/// Parse a single sentence fragment.
///
/// Returns `Ok(None)` for whitespace-only fragments, which are not statements
/// at all (every trailing `.` produces one).
pub fn parse_sentence(fragment: &str) -> Result<Option<Triple>, MalformedStatement> {
    let tokens: Vec<&str> = fragment.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Ok(None),
        [_] => Err(MalformedStatement::TooFewTokens {
            fragment: fragment.trim().to_string(),
            tokens: 1,
        }),
        [_, _] => Err(MalformedStatement::MissingPredicate {
            fragment: fragment.trim().to_string(),
        }),
        [subject, predicate @ .., object] => {
            Ok(Some(Triple::from_tokens(subject, predicate, object)))
        }
    }
}

/// Parse an ingestion string into triples, collecting malformed fragments.
pub fn parse_statements(text: &str) -> ParsedStatements {
    let mut parsed = ParsedStatements::default();

    for fragment in text.split(SENTENCE_DELIMITER) {
        match parse_sentence(fragment) {
            Ok(Some(triple)) => parsed.triples.push(triple),
            Ok(None) => {}
            Err(malformed) => parsed.skipped.push(malformed),
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_statement() {
        let parsed = parse_statements("Baer hasnt viewed fracture_reports.");

        assert_eq!(parsed.triples.len(), 1);
        assert!(parsed.skipped.is_empty());

        let triple = &parsed.triples[0];
        assert_eq!(triple.subject(), "Baer");
        assert_eq!(triple.predicate(), "hasnt viewed");
        assert_eq!(triple.object(), "fracture_reports");
    }

    #[test]
    fn test_parse_multiple_sentences() {
        let parsed = parse_statements(
            "Baer works_at Irvine_Central. Baer consults for headaches. Bawa treats migraines",
        );

        assert_eq!(parsed.triples.len(), 3);
        assert_eq!(parsed.triples[1].predicate(), "consults for");
        assert_eq!(parsed.triples[2].subject(), "Bawa");
    }

    #[test]
    fn test_predicate_whitespace_is_normalized() {
        let parsed = parse_statements("  Baer   is \t well versed   in   fractures  ");

        assert_eq!(parsed.triples.len(), 1);
        assert_eq!(parsed.triples[0].predicate(), "is well versed in");
    }

    #[test]
    fn test_blank_fragments_are_ignored() {
        let parsed = parse_statements(". .  Baer treats fractures. ..");

        assert_eq!(parsed.triples.len(), 1);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_single_token_is_reported() {
        let parsed = parse_statements("Baer treats fractures. Hello. Bawa treats migraines.");

        assert_eq!(parsed.triples.len(), 2);
        assert_eq!(
            parsed.skipped,
            vec![MalformedStatement::TooFewTokens {
                fragment: "Hello".to_string(),
                tokens: 1,
            }]
        );
    }

    #[test]
    fn test_two_tokens_is_missing_predicate() {
        let result = parse_sentence(" Baer fractures ");

        assert_eq!(
            result,
            Err(MalformedStatement::MissingPredicate {
                fragment: "Baer fractures".to_string(),
            })
        );
        assert_eq!(result.unwrap_err().fragment(), "Baer fractures");
    }

    #[test]
    fn test_three_or_more_tokens_always_parse() {
        for fragment in ["a b c", " Baer\u{a0}treats  fractures ", "x y z w v"] {
            let triple = parse_sentence(fragment).unwrap().unwrap();
            assert!(!triple.subject().is_empty());
            assert!(!triple.predicate().is_empty());
            assert!(!triple.object().is_empty());
        }
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_statements("");
        assert!(parsed.triples.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}
