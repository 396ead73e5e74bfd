//! Search over the paragraphs of a loaded document.
//!
//! Results come back in paragraph order; there is no scoring.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::matcher::CompiledQuery;
use super::query::{parse_query, ClassifiedQuery};
use crate::core::error::{DocsiftError, Result};
use crate::core::types::{MatchOptions, SearchResult};

/// Run a query over every paragraph, keeping document order.
///
/// Fails with [`DocsiftError::EmptyDocument`] when there are no
/// paragraphs and with [`DocsiftError::EmptyQuery`] when the query is
/// blank; in both cases no matching is attempted.
pub fn search(
    paragraphs: &[String],
    raw_query: &str,
    opts: MatchOptions,
) -> Result<Vec<SearchResult>> {
    if paragraphs.is_empty() {
        return Err(DocsiftError::EmptyDocument);
    }

    let query_str = raw_query.trim();
    if query_str.is_empty() {
        return Err(DocsiftError::EmptyQuery);
    }

    let query = parse_query(query_str);
    run(paragraphs, &query, opts)
}

fn run(
    paragraphs: &[String],
    query: &ClassifiedQuery,
    opts: MatchOptions,
) -> Result<Vec<SearchResult>> {
    if query.is_unmatchable() {
        return Ok(Vec::new());
    }

    let compiled = CompiledQuery::compile(query, opts)?;

    Ok(paragraphs
        .iter()
        .enumerate()
        .filter_map(|(idx, paragraph)| {
            compiled.annotate(paragraph).map(|annotated_text| SearchResult {
                paragraph_index: idx,
                annotated_text,
                raw_text: paragraph.clone(),
            })
        })
        .collect())
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query string as submitted (trimmed)
    pub query: String,

    /// How the query was understood
    pub classified: ClassifiedQuery,

    /// Matching paragraphs in document order
    pub results: Vec<SearchResult>,

    /// Number of matching paragraphs
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Search service applying configured limits
#[derive(Debug, Clone)]
pub struct SearchService {
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(max_query_length: usize) -> Self {
        Self { max_query_length }
    }

    /// Execute a query against a set of paragraphs
    pub fn search(
        &self,
        paragraphs: &[String],
        raw_query: &str,
        opts: MatchOptions,
    ) -> Result<SearchResponse> {
        let start = Instant::now();

        if paragraphs.is_empty() {
            return Err(DocsiftError::EmptyDocument);
        }

        let query_str = raw_query.trim();
        if query_str.is_empty() {
            return Err(DocsiftError::EmptyQuery);
        }

        let length = query_str.chars().count();
        if length > self.max_query_length {
            return Err(DocsiftError::InvalidQuery(format!(
                "Query is {length} characters long, the limit is {}",
                self.max_query_length
            )));
        }

        let classified = parse_query(query_str);
        tracing::debug!(
            must = classified.must.len(),
            should = classified.should.len(),
            not = classified.not.len(),
            "Query classified"
        );

        let results = run(paragraphs, &classified, opts)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::info!(
            query = %query_str,
            paragraphs = paragraphs.len(),
            matches = count,
            duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            query: query_str.to_string(),
            classified,
            results,
            count,
            duration_ms,
        })
    }
}
