//! Search session state.
//!
//! A [`Session`] owns everything that belongs to one loaded document:
//! the paragraphs, the current results, the page state, the match
//! options and the status line. Loading replaces the document wholesale
//! and searching replaces the results wholesale; nothing is updated
//! incrementally.

use std::fmt;

use crate::core::config::Config;
use crate::core::document::Document;
use crate::core::error::{DocsiftError, Result};
use crate::core::extract::Extractor;
use crate::core::pagination::{Page, PageState};
use crate::core::search::SearchService;
use crate::core::types::{MatchOptions, PagerView, ResultView, SearchResult, SessionView};

/// User-visible status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Ready,
    Searching,
    Matches(usize),
    NoMatches,
    Failed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Loading => write!(f, "Extracting content…"),
            Status::Ready => write!(f, "Ready. Type a query and search."),
            Status::Searching => write!(f, "Searching…"),
            Status::Matches(n) => write!(f, "Matches: {n}"),
            Status::NoMatches => write!(f, "No matches."),
            Status::Failed(message) => write!(f, "{message}"),
        }
    }
}

/// State for one loaded document and its latest search
#[derive(Debug)]
pub struct Session {
    document: Option<Document>,
    results: Vec<SearchResult>,
    page: PageState,
    options: MatchOptions,
    status: Status,
    search: SearchService,
}

impl Session {
    /// Create an empty session from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            document: None,
            results: Vec::new(),
            page: PageState::new(config.search.page_size),
            options: config.search.match_options(),
            status: Status::Idle,
            search: SearchService::new(config.search.max_query_length),
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Replace match options; applies from the next search
    pub fn set_options(&mut self, options: MatchOptions) {
        self.options = options;
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    fn fail(&mut self, err: DocsiftError) -> DocsiftError {
        if err.is_bad_request() {
            tracing::debug!(error = %err, "Rejected input");
        } else {
            tracing::warn!(error = %err, "Operation failed");
        }
        self.status = Status::Failed(err.status_message());
        err
    }

    /// Load a document through `extractor`.
    ///
    /// The new document is committed only once extraction succeeded.
    /// On failure the previous document and results stay untouched and
    /// only the status line changes.
    pub async fn load(&mut self, extractor: &dyn Extractor, source: &str) -> Result<&Document> {
        let source = source.trim();
        self.status = Status::Loading;
        tracing::info!(source = %source, "Loading document");

        let content = match extractor.extract(source).await {
            Ok(content) => content,
            Err(e) => return Err(self.fail(e)),
        };

        let document = Document::from_extracted(source, content);
        tracing::info!(
            source = %source,
            paragraphs = document.paragraph_count(),
            chars = document.char_count,
            "Document loaded"
        );

        self.results.clear();
        self.page.reset();
        self.status = Status::Ready;
        Ok(&*self.document.insert(document))
    }

    /// Run a query over the loaded document.
    ///
    /// Previous results are dropped and the page index reset before
    /// anything else, including when the query is rejected.
    pub fn search(&mut self, query: &str) -> Result<usize> {
        self.results.clear();
        self.page.reset();

        let paragraphs: &[String] = self
            .document
            .as_ref()
            .map(|d| d.paragraphs.as_slice())
            .unwrap_or(&[]);

        self.status = Status::Searching;
        let response = match self.search.search(paragraphs, query, self.options) {
            Ok(response) => response,
            Err(e) => return Err(self.fail(e)),
        };

        self.results = response.results;
        self.status = if self.results.is_empty() {
            Status::NoMatches
        } else {
            Status::Matches(self.results.len())
        };

        Ok(self.results.len())
    }

    pub fn next_page(&mut self) -> usize {
        self.page.next(self.results.len())
    }

    pub fn prev_page(&mut self) -> usize {
        self.page.prev(self.results.len())
    }

    /// Jump to a 0-based page, clamped
    pub fn go_to_page(&mut self, index: usize) -> usize {
        self.page.go_to(index, self.results.len())
    }

    pub fn current_page(&self) -> Page<'_, SearchResult> {
        self.page.page(&self.results)
    }

    /// Render contract for the current page
    pub fn view(&self) -> SessionView {
        let source = self
            .document
            .as_ref()
            .map(|d| d.source.clone())
            .unwrap_or_default();

        let page = self.current_page();
        let results = page
            .items
            .iter()
            .map(|r| ResultView {
                paragraph_number: r.paragraph_number(),
                locator: r.locator(),
                annotated_text: r.annotated_text.clone(),
                source: source.clone(),
            })
            .collect();

        let pager = (!self.results.is_empty()).then(|| PagerView {
            page_index: page.page_index,
            page_count: page.page_count,
            has_prev: page.has_prev,
            has_next: page.has_next,
            label: page.label(),
        });

        SessionView {
            status: self.status.to_string(),
            total_results: self.results.len(),
            results,
            pager,
        }
    }
}
