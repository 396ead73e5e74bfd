//! docsift CLI - structured search over a web page's text
//!
//! Loads the readable text of a page through an extraction service and
//! searches it paragraph by paragraph.
//!
//! # Examples
//!
//! ```bash
//! # Search a page
//! docsift search https://example.com/article '"exact phrase" fox* -slow'
//!
//! # Show the second page of results as JSON
//! docsift --format json search https://example.com/article 'cat OR dog' --page 2
//!
//! # Search a local text file interactively
//! docsift interactive --file notes.txt
//!
//! # Show configuration
//! docsift show-config
//! ```

use clap::Parser;
use docsift::cli::output::print_error;
use docsift::cli::{init_logging, run, Cli};

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
