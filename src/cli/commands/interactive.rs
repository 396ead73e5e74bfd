//! Interactive command - load a page and search it line by line
//!
//! Each input line is either a query or a `:command`:
//!
//! ```text
//! > fox -slow            search
//! > :next / :prev        move between pages
//! > :page 3              jump to page 3
//! > :case / :word        toggle match options (apply on the next search)
//! > :load <source>       load another page
//! > :outline             list the loaded page's paragraphs
//! > :quit                leave
//! ```

use crate::cli::commands::search::{cli_error, session_for};
use crate::cli::output::{colors, write_outline, write_view};
use crate::cli::OutputFormat;
use crate::core::error::DocsiftError;
use crate::core::services::Services;
use crate::core::session::{Session, Status};
use crate::core::types::MatchOptions;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Arguments for the interactive command
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Page URL to load first (or file path with --file)
    pub source: Option<String>,

    /// Read sources as local text files instead of calling the extraction service
    #[arg(long)]
    pub file: bool,

    /// Start with case-sensitive matching
    #[arg(long, short = 'c')]
    pub case_sensitive: bool,

    /// Start with whole-word matching
    #[arg(long, short = 'w')]
    pub whole_word: bool,

    /// Results per page (defaults to search.page_size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Query(String),
    Next,
    Prev,
    /// 1-based page number
    Page(usize),
    ToggleCase,
    ToggleWord,
    Load(String),
    Outline,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse an input line. Anything not starting with `:` is a query.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return ReplCommand::Query(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("next" | "n", "") => ReplCommand::Next,
            ("prev" | "p", "") => ReplCommand::Prev,
            ("page", n) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => ReplCommand::Page(n),
                _ => ReplCommand::Unknown(line.to_string()),
            },
            ("case", "") => ReplCommand::ToggleCase,
            ("word", "") => ReplCommand::ToggleWord,
            ("load", "") => ReplCommand::Unknown(line.to_string()),
            ("load", source) => ReplCommand::Load(source.to_string()),
            ("outline", "") => ReplCommand::Outline,
            ("help" | "h" | "?", "") => ReplCommand::Help,
            ("quit" | "q" | "exit", "") => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

const HELP: &str = "\
Type a query to search the loaded page:
  word            paragraphs containing word
  \"exact phrase\"  paragraphs containing the phrase
  -word           exclude paragraphs containing word
  pre*            words starting with pre
  a OR b          either a or b
Commands:
  :next, :prev    move between result pages
  :page N         jump to page N
  :case           toggle case-sensitive matching
  :word           toggle whole-word matching
  :load SOURCE    load another page
  :outline        list the loaded page's paragraphs
  :help           show this help
  :quit           leave";

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Print the session view in the requested format
fn render<W: Write>(
    output: &mut W,
    session: &Session,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = session.view();
    match format {
        OutputFormat::Human => write_view(output, &view)?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(&view)?)?,
    }
    Ok(())
}

/// Print a line that is not a session view.
///
/// JSON mode wraps `message` as `{"notice": ...}` so every output line
/// stays a JSON object.
fn notice<W: Write>(
    output: &mut W,
    format: OutputFormat,
    message: &str,
    styled: impl std::fmt::Display,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => writeln!(output, "{styled}")?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::json!({ "notice": message }))?,
    }
    Ok(())
}

/// Render after a failed operation, or give up if the session is unusable
fn recover<W: Write>(
    output: &mut W,
    session: &Session,
    format: OutputFormat,
    err: DocsiftError,
) -> Result<(), Box<dyn std::error::Error>> {
    if !err.is_recoverable() {
        return Err(cli_error(err));
    }
    tracing::debug!(error = %err, "Recovered from failed operation");
    render(output, session, format)
}

async fn load<W: Write>(
    output: &mut W,
    session: &mut Session,
    services: &Services,
    from_file: bool,
    source: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if format == OutputFormat::Human {
        writeln!(output, "{}", colors::dim(&Status::Loading.to_string()))?;
    }

    match session.load(services.extractor(from_file), source).await {
        Ok(document) => {
            if format == OutputFormat::Human {
                writeln!(output, "{}", colors::title(&document.title))?;
                writeln!(output, "{}", colors::dim(&document.meta_line()))?;
            }
            render(output, session, format)
        }
        Err(e) => recover(output, session, format, e),
    }
}

/// Read commands from `input` until it ends or `:quit` is entered
pub async fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    services: &Services,
    from_file: bool,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let human = format == OutputFormat::Human;
    let prompt = |output: &mut W| -> io::Result<()> {
        if human {
            write!(output, "{} ", colors::label(">"))?;
            output.flush()?;
        }
        Ok(())
    };

    prompt(&mut *output)?;
    for line in input.lines() {
        let line = line?;

        match ReplCommand::parse(&line) {
            ReplCommand::Query(query) => match session.search(&query) {
                Ok(_) => render(output, session, format)?,
                Err(e) => recover(output, session, format, e)?,
            },
            ReplCommand::Next => {
                session.next_page();
                render(output, session, format)?;
            }
            ReplCommand::Prev => {
                session.prev_page();
                render(output, session, format)?;
            }
            ReplCommand::Page(n) => {
                session.go_to_page(n - 1);
                render(output, session, format)?;
            }
            ReplCommand::ToggleCase => {
                let options = session.options();
                session.set_options(MatchOptions {
                    case_sensitive: !options.case_sensitive,
                    ..options
                });
                let message = format!(
                    "Case sensitive: {}",
                    on_off(session.options().case_sensitive)
                );
                notice(output, format, &message, &message)?;
            }
            ReplCommand::ToggleWord => {
                let options = session.options();
                session.set_options(MatchOptions {
                    whole_word: !options.whole_word,
                    ..options
                });
                let message = format!("Whole word: {}", on_off(session.options().whole_word));
                notice(output, format, &message, &message)?;
            }
            ReplCommand::Load(source) => {
                load(output, session, services, from_file, &source, format).await?;
            }
            ReplCommand::Outline => match session.document() {
                Some(document) => {
                    let display = &services.config.display;
                    let outline =
                        document.outline(display.outline_limit, display.outline_preview_chars);
                    match format {
                        OutputFormat::Human => write_outline(output, &outline)?,
                        OutputFormat::Json => {
                            writeln!(output, "{}", serde_json::to_string(&outline)?)?
                        }
                    }
                }
                None => {
                    let message = DocsiftError::EmptyDocument.status_message();
                    notice(output, format, &message, colors::warning(&message))?;
                }
            },
            ReplCommand::Help => notice(output, format, HELP, HELP)?,
            ReplCommand::Quit => break,
            ReplCommand::Unknown(text) => notice(
                output,
                format,
                &format!("Unknown command: {text} (type :help for commands)"),
                format!(
                    "{} {text} (type :help for commands)",
                    colors::warning("Unknown command:")
                ),
            )?,
        }

        prompt(&mut *output)?;
    }

    Ok(())
}

/// Execute the interactive command
pub async fn execute(
    args: InteractiveArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = session_for(services, args.page_size);
    let defaults = session.options();
    session.set_options(MatchOptions {
        case_sensitive: defaults.case_sensitive || args.case_sensitive,
        whole_word: defaults.whole_word || args.whole_word,
    });

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if format == OutputFormat::Human {
        writeln!(output, "{}", colors::dim("Type :help for commands, :quit to leave."))?;
    }

    if let Some(source) = &args.source {
        load(&mut output, &mut session, services, args.file, source, format).await?;
    }

    let stdin = io::stdin();
    run_repl(
        &mut session,
        services,
        args.file,
        stdin.lock(),
        &mut output,
        format,
    )
    .await
}
