//! CLI adapter for docsift
//!
//! Loads a document through the extraction service (or from a local
//! text file) and searches it, either once or interactively.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              |  (clap adapter)  |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docsift - structured search over a web page's text
///
/// Loads the readable text of a page and searches it paragraph by
/// paragraph. Queries support "exact phrases", -exclusions, prefix*
/// wildcards and `OR` alternatives.
#[derive(Parser, Debug)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "Structured search over a web page's text", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a page and run one search
    Search(commands::SearchArgs),

    /// Load a page and show its title and paragraph outline
    Outline(commands::OutlineArgs),

    /// Load a page and search it interactively
    Interactive(commands::InteractiveArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsift completions bash > ~/.local/share/bash-completion/completions/docsift
    ///   zsh:   docsift completions zsh > ~/.zfunc/_docsift
    ///   fish:  docsift completions fish > ~/.config/fish/completions/docsift.fish
    Completions(commands::CompletionsArgs),
}

/// Initialize tracing on stderr.
///
/// `RUST_LOG` controls the filter (default `docsift=warn`);
/// `DOCSIFT_LOG_FORMAT=json` switches to JSON lines.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "docsift=warn".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let json = std::env::var("DOCSIFT_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Resolve XDG directories
    XdgDirs::new().log_paths();

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Outline(args) => commands::outline::execute(args, &services, cli.format).await,
        Commands::Interactive(args) => {
            commands::interactive::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
