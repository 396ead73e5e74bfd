//! Search command - load a page and run one query

use crate::cli::output::{colors, format_duration, print_header, print_json, write_view};
use crate::cli::OutputFormat;
use crate::core::error::DocsiftError;
use crate::core::services::Services;
use crate::core::session::Session;
use crate::core::types::{MatchOptions, SessionView};
use clap::Args;
use serde::Serialize;
use std::io;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Page URL (or file path with --file)
    pub source: String,

    /// Search query ("exact phrase", -exclude, prefix*, a OR b)
    pub query: String,

    /// Read SOURCE as a local text file instead of calling the extraction service
    #[arg(long)]
    pub file: bool,

    /// Match case exactly
    #[arg(long, short = 'c')]
    pub case_sensitive: bool,

    /// Match whole words only
    #[arg(long, short = 'w')]
    pub whole_word: bool,

    /// Page of results to show (1-based)
    #[arg(long, short = 'p', default_value = "1")]
    pub page: usize,

    /// Results per page (defaults to search.page_size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub source: String,
    pub title: String,
    pub query: String,
    #[serde(flatten)]
    pub view: SessionView,
}

/// Turn a core error into a CLI error carrying the status line
pub(crate) fn cli_error(e: DocsiftError) -> Box<dyn std::error::Error> {
    match e {
        DocsiftError::Extraction(_) | DocsiftError::InvalidUrl(_) => {
            format!("{} ({})", e.status_message(), e.message()).into()
        }
        _ => e.status_message().into(),
    }
}

/// Create a session, overriding the page size when asked
pub(crate) fn session_for(services: &Services, page_size: Option<usize>) -> Session {
    match page_size {
        Some(size) => {
            let mut config = (*services.config).clone();
            config.search.page_size = size;
            Session::new(&config)
        }
        None => services.new_session(),
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = session_for(services, args.page_size);

    // Flags only ever switch an option on; config provides the default
    let defaults = session.options();
    session.set_options(MatchOptions {
        case_sensitive: defaults.case_sensitive || args.case_sensitive,
        whole_word: defaults.whole_word || args.whole_word,
    });

    let extractor = services.extractor(args.file);
    let document = session
        .load(extractor, &args.source)
        .await
        .map_err(cli_error)?;
    let title = document.title.clone();
    let paragraphs = document.paragraph_count();

    let started = Instant::now();
    session.search(&args.query).map_err(cli_error)?;
    let elapsed = started.elapsed().as_secs_f64();
    session.go_to_page(args.page.saturating_sub(1));

    let output = SearchOutput {
        source: args.source.trim().to_string(),
        title,
        query: args.query,
        view: session.view(),
    };

    match format {
        OutputFormat::Human => {
            print_header(&output.title);
            write_view(&mut io::stdout().lock(), &output.view)?;
            println!(
                "{}",
                colors::dim(&format!(
                    "Searched {paragraphs} paragraph(s) in {}",
                    format_duration(elapsed)
                ))
            );
        }
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}
