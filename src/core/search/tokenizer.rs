//! Query tokenizer.
//!
//! Splits a raw query into quoted-phrase and plain tokens. A phrase is
//! recognized only when the scan position sits on a `"` that closes
//! later with at least one character in between; anything else falls
//! through to whitespace-delimited plain runs, so an unterminated quote
//! simply becomes part of an ordinary token.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use regex::Regex;

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)"|(\S+)"#).unwrap());

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Phrase,
    Plain,
}

/// A single lexical unit from the raw query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn phrase(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Phrase,
            value: value.into(),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Plain,
            value: value.into(),
        }
    }
}

/// Tokenize a raw query string, preserving source order.
///
/// # Examples
///
/// ```
/// use docsift::core::search::{tokenize, Token};
///
/// let tokens = tokenize(r#""quick fox" -slow"#);
/// assert_eq!(tokens, vec![Token::phrase("quick fox"), Token::plain("-slow")]);
/// ```
pub fn tokenize(query: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .captures_iter(query)
        .filter_map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(phrase), _) => Some(Token::phrase(phrase.as_str())),
            (None, Some(plain)) => Some(Token::plain(plain.as_str())),
            (None, None) => None,
        })
        .collect()
}
