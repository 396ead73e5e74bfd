//! Paragraph matching and highlighting.
//!
//! Each term becomes one regex. Case sensitivity, whole-word mode and
//! wildcards are decided when the pattern is built, so matching a
//! paragraph is a plain scan with no per-paragraph branching.
//!
//! Highlighting rewrites the paragraph one pattern at a time, and every
//! pattern runs over the output of the previous one. A later pattern can
//! therefore match inside text that is already marked (or inside the
//! marker text itself), and overlapping spans may end up wrapped twice.
//!
//! Word characters are ASCII only (`[0-9A-Za-z_]`) for both wildcards
//! and whole-word boundaries, so `caf*` stops before the `é` in `café`.

use regex::{Captures, Regex, RegexBuilder};

use super::query::{ClassifiedQuery, Term};
use super::tokenizer::TokenKind;
use crate::core::error::{DocsiftError, Result};
use crate::core::types::{MatchOptions, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};

/// Build the regex source for a single term.
///
/// # Examples
///
/// ```
/// use docsift::core::search::{term_pattern, Term};
/// use docsift::core::types::MatchOptions;
///
/// let opts = MatchOptions { case_sensitive: false, whole_word: true };
/// assert_eq!(
///     term_pattern(&Term::wildcard("jump"), opts),
///     r"(?-u:\b)jump(?-u:\w)*(?-u:\b)"
/// );
/// assert_eq!(term_pattern(&Term::phrase("a.b"), MatchOptions::default()), r"a\.b");
/// ```
const WORD_CHARS: &str = r"(?-u:\w)*";
const WORD_BOUNDARY: &str = r"(?-u:\b)";

pub fn term_pattern(term: &Term, opts: MatchOptions) -> String {
    let mut body = regex::escape(&term.value);

    if term.kind == TokenKind::Plain && term.wildcard {
        body.push_str(WORD_CHARS);
    }

    if opts.whole_word {
        body = format!("{WORD_BOUNDARY}{body}{WORD_BOUNDARY}");
    }

    body
}

/// Compile a term into a regex honoring the match options
pub fn compile_term(term: &Term, opts: MatchOptions) -> Result<Regex> {
    RegexBuilder::new(&term_pattern(term, opts))
        .case_insensitive(!opts.case_sensitive)
        .build()
        .map_err(|e| DocsiftError::InvalidQuery(format!("Failed to compile '{}': {e}", term.value)))
}

fn compile_all(terms: &[Term], opts: MatchOptions) -> Result<Vec<Regex>> {
    terms.iter().map(|t| compile_term(t, opts)).collect()
}

/// A classified query with every term compiled.
///
/// Compile once per search and reuse it for every paragraph.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    must: Vec<Regex>,
    should: Vec<Regex>,
    not: Vec<Regex>,
}

impl CompiledQuery {
    pub fn compile(query: &ClassifiedQuery, opts: MatchOptions) -> Result<Self> {
        Ok(Self {
            must: compile_all(&query.must, opts)?,
            should: compile_all(&query.should, opts)?,
            not: compile_all(&query.not, opts)?,
        })
    }

    /// Evaluate the query against one paragraph.
    ///
    /// Returns the highlighted paragraph, or `None` when it does not match.
    pub fn annotate(&self, paragraph: &str) -> Option<String> {
        if self.not.iter().any(|re| re.is_match(paragraph)) {
            return None;
        }

        if !self.must.iter().all(|re| re.is_match(paragraph)) {
            return None;
        }

        if self.must.is_empty() && self.should.is_empty() {
            return None;
        }

        let mut marked = paragraph.to_string();
        for re in self.must.iter().chain(self.should.iter()) {
            marked = re
                .replace_all(&marked, |caps: &Captures| {
                    format!("{HIGHLIGHT_OPEN}{}{HIGHLIGHT_CLOSE}", &caps[0])
                })
                .into_owned();
        }

        Some(marked)
    }
}

/// Match a single paragraph against a classified query.
///
/// Convenience wrapper that compiles the query on every call; the search
/// engine compiles once and calls [`CompiledQuery::annotate`] instead.
pub fn match_paragraph(
    paragraph: &str,
    query: &ClassifiedQuery,
    opts: MatchOptions,
) -> Result<Option<String>> {
    Ok(CompiledQuery::compile(query, opts)?.annotate(paragraph))
}
