//! Unified service container for docsift
//!
//! Provides shared access to configuration and the extractors.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::extract::{Extractor, FileExtractor, HttpExtractor};
use crate::core::session::Session;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Client for the extraction service
    pub http: Arc<HttpExtractor>,

    /// Local text file reader
    pub file: Arc<FileExtractor>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let http = Arc::new(HttpExtractor::from_config(&config.extraction)?);

        Ok(Self {
            http,
            file: Arc::new(FileExtractor),
            config: Arc::new(config),
        })
    }

    /// Extractor for a source given on the command line
    pub fn extractor(&self, from_file: bool) -> &dyn Extractor {
        if from_file {
            &*self.file
        } else {
            &*self.http
        }
    }

    /// Fresh session using the configured page size and match options
    pub fn new_session(&self) -> Session {
        Session::new(&self.config)
    }
}
