//! Search module for structured paragraph search.
//!
//! Pipeline: raw query → [`tokenize`] → [`classify`] → [`CompiledQuery`]
//! → per-paragraph [`CompiledQuery::annotate`] → ordered results.

mod engine;
mod matcher;
mod query;
mod tokenizer;

pub use engine::{search, SearchResponse, SearchService};
pub use matcher::{compile_term, match_paragraph, term_pattern, CompiledQuery};
pub use query::{classify, parse_query, ClassifiedQuery, Term};
pub use tokenizer::{tokenize, Token, TokenKind};
