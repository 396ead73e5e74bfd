//! docsift - structured offline search over a web page's text
//!
//! Loads the readable text of a page through an extraction service,
//! splits it into paragraphs and searches them with a small query
//! language: bare words, "exact phrases", `-exclusions`, `prefix*`
//! wildcards and single-term `OR` alternatives.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types, xdg
//!   - search (tokenizer, classifier, matcher, engine)
//!   - pagination, document, session
//!   - extract (extraction service client, local files)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output
//!
//! # Example
//!
//! ```
//! use docsift::core::search::search;
//! use docsift::core::types::MatchOptions;
//!
//! let paragraphs = vec![
//!     "The quick brown fox".to_string(),
//!     "A slow green turtle".to_string(),
//! ];
//! let results = search(&paragraphs, "fox OR turtle -green", MatchOptions::default()).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].annotated_text, "The quick brown <mark>fox</mark>");
//! ```

// Core domain logic (adapter-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocsiftError, Result};
pub use core::services::Services;
pub use core::session::{Session, Status};
pub use core::types::*;
