//! Core domain logic
//!
//! Everything here is independent of the command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Shared data structures and the render contract
//! - **xdg**: XDG directory handling
//! - **search**: Tokenizer, classifier, matcher and engine
//! - **pagination**: Page slicing and navigation state
//! - **document**: Paragraph derivation, outline, metadata
//! - **extract**: Extraction service client and file reader
//! - **session**: Per-document search state
//! - **services**: Unified service container

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod search;
pub mod services;
pub mod session;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsiftError, Result};
pub use services::Services;
pub use session::{Session, Status};
