//! Core data types for docsift.
//!
//! This module defines the data structures shared between the
//! search core, the session and the adapters: match options,
//! search results, extraction payloads and the render contract.

use serde::{Deserialize, Serialize};

/// Marker inserted before a highlighted span
pub const HIGHLIGHT_OPEN: &str = "<mark>";

/// Marker inserted after a highlighted span
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// External toggles read at match time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Match case exactly
    pub case_sensitive: bool,

    /// Constrain matches to start and end at word boundaries
    pub whole_word: bool,
}

/// One matching paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 0-based paragraph index within the loaded document
    pub paragraph_index: usize,

    /// Paragraph text with highlight markers
    pub annotated_text: String,

    /// Paragraph text as loaded
    pub raw_text: String,
}

impl SearchResult {
    /// 1-based paragraph number shown to users
    pub fn paragraph_number(&self) -> usize {
        self.paragraph_index + 1
    }

    /// Human locator, e.g. `Paragraph 3`
    pub fn locator(&self) -> String {
        format!("Paragraph {}", self.paragraph_number())
    }
}

/// Payload returned by the extraction service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, rename = "textContent")]
    pub text_content: Option<String>,
}

/// Entry in the document outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// 0-based paragraph index
    pub index: usize,

    /// Leading characters of the paragraph, `…` appended when cut
    pub preview: String,
}

/// Display unit for one result on the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub paragraph_number: usize,
    pub locator: String,
    pub annotated_text: String,
    pub source: String,
}

/// Pager affordances for the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerView {
    /// 0-based page index
    pub page_index: usize,
    pub page_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// `Page X of Y`
    pub label: String,
}

/// Everything an adapter needs to render the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub status: String,
    pub total_results: usize,
    pub results: Vec<ResultView>,

    /// Absent when there are no results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<PagerView>,
}
