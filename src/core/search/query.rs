//! Query classification.
//!
//! Groups tokens into MUST / SHOULD / NOT clauses. Precedence is
//! NOT > single-term OR > implicit AND:
//!
//! - `-term` is always an exclusion, whatever precedes it
//! - `OR` marks exactly the next non-negated term as optional, then clears
//! - everything else is required
//!
//! A trailing `*` on a term turns it into a wildcard (prefix) term.

use serde::{Deserialize, Serialize};

use super::tokenizer::{tokenize, Token, TokenKind};

/// A token after negation-stripping and wildcard detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub kind: TokenKind,
    /// Literal value without the leading `-` or trailing `*`
    pub value: String,
    pub wildcard: bool,
}

impl Term {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Plain,
            value: value.into(),
            wildcard: false,
        }
    }

    pub fn phrase(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Phrase,
            value: value.into(),
            wildcard: false,
        }
    }

    pub fn wildcard(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Plain,
            value: value.into(),
            wildcard: true,
        }
    }
}

/// Query split into required, optional and excluded terms.
///
/// Each term lands in exactly one of the three sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedQuery {
    pub must: Vec<Term>,
    pub should: Vec<Term>,
    pub not: Vec<Term>,
}

impl ClassifiedQuery {
    /// True when there is nothing that could produce a match
    pub fn is_unmatchable(&self) -> bool {
        self.must.is_empty() && self.should.is_empty()
    }
}

fn is_or_operator(token: &Token) -> bool {
    token.kind == TokenKind::Plain && token.value.eq_ignore_ascii_case("OR")
}

/// Classify tokens into MUST / SHOULD / NOT sets.
pub fn classify(tokens: &[Token]) -> ClassifiedQuery {
    let mut query = ClassifiedQuery::default();
    let mut pending_or = false;

    for token in tokens {
        if is_or_operator(token) {
            pending_or = true;
            continue;
        }

        let (negated, raw) = match token.value.strip_prefix('-') {
            Some(rest) if token.kind == TokenKind::Plain => (true, rest),
            _ => (false, token.value.as_str()),
        };

        let (wildcard, value) = match raw.strip_suffix('*') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let term = Term {
            kind: token.kind,
            value: value.to_string(),
            wildcard,
        };

        if negated {
            query.not.push(term);
        } else if pending_or {
            query.should.push(term);
            pending_or = false;
        } else {
            query.must.push(term);
        }
    }

    query
}

/// Tokenize and classify a raw query string.
///
/// # Examples
///
/// ```
/// use docsift::core::search::{parse_query, Term};
///
/// let query = parse_query("fox -slow");
/// assert_eq!(query.must, vec![Term::plain("fox")]);
/// assert_eq!(query.not, vec![Term::plain("slow")]);
/// ```
pub fn parse_query(raw: &str) -> ClassifiedQuery {
    classify(&tokenize(raw))
}
