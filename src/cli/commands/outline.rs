//! Outline command - show a page's title and leading paragraphs

use crate::cli::commands::search::cli_error;
use crate::cli::output::{colors, print_header, print_json, print_warning, write_outline};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::OutlineEntry;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;

/// Arguments for the outline command
#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Page URL (or file path with --file)
    pub source: String,

    /// Read SOURCE as a local text file instead of calling the extraction service
    #[arg(long)]
    pub file: bool,

    /// Number of paragraphs to list (defaults to display.outline_limit)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Outline response
#[derive(Debug, Serialize)]
pub struct OutlineOutput {
    pub source: String,
    pub title: String,
    pub meta: String,
    pub paragraph_count: usize,
    pub char_count: usize,
    pub loaded_at: DateTime<Utc>,
    pub outline: Vec<OutlineEntry>,
}

/// Execute the outline command
pub async fn execute(
    args: OutlineArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let display = &services.config.display;
    let limit = args.limit.unwrap_or(display.outline_limit);

    let mut session = services.new_session();
    let document = session
        .load(services.extractor(args.file), &args.source)
        .await
        .map_err(cli_error)?;

    let output = OutlineOutput {
        source: document.source.clone(),
        title: document.title.clone(),
        meta: document.meta_line(),
        paragraph_count: document.paragraph_count(),
        char_count: document.char_count,
        loaded_at: document.loaded_at,
        outline: document.outline(limit, display.outline_preview_chars),
    };

    match format {
        OutputFormat::Human => {
            print_header(&output.title);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", colors::dim(&output.meta))?;
            writeln!(out)?;
            write_outline(&mut out, &output.outline)?;
            if output.paragraph_count > output.outline.len() {
                writeln!(
                    out,
                    "{}",
                    colors::dim(&format!(
                        "… {} more paragraph(s)",
                        output.paragraph_count - output.outline.len()
                    ))
                )?;
            }
            if output.paragraph_count == 0 {
                print_warning("The page has no readable paragraphs");
            }
        }
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}
