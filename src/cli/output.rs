//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use std::io::{self, Write};

use crate::core::types::{OutlineEntry, SessionView, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document titles
    pub fn title(s: &str) -> ColoredString {
        s.cyan().bold()
    }

    /// Style for paragraph locators
    pub fn locator(s: &str) -> ColoredString {
        s.green().bold()
    }

    /// Style for links and file paths
    pub fn source(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for highlighted matches
    pub fn highlight(s: &str) -> ColoredString {
        s.black().on_yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Replace highlight markers with terminal colors.
///
/// Nested markers (from overlapping highlights) are flattened; a closing
/// marker with no open highlight is kept as literal text. Highlights may
/// span newlines, and each line is colored on its own.
pub fn render_highlights(annotated: &str) -> String {
    let mut out = String::with_capacity(annotated.len());
    let mut depth = 0usize;
    let mut rest = annotated;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(HIGHLIGHT_OPEN) {
            depth += 1;
            rest = after;
            continue;
        }
        if depth > 0 {
            if let Some(after) = rest.strip_prefix(HIGHLIGHT_CLOSE) {
                depth -= 1;
                rest = after;
                continue;
            }
        }

        if let Some(after) = rest.strip_prefix('\n') {
            out.push('\n');
            rest = after;
            continue;
        }

        let first_len = rest.chars().next().map_or(1, char::len_utf8);
        let next = rest[first_len..]
            .find(['<', '\n'])
            .map_or(rest.len(), |i| i + first_len);
        let (segment, tail) = rest.split_at(next);

        if depth > 0 {
            out.push_str(&colors::highlight(segment).to_string());
        } else {
            out.push_str(segment);
        }
        rest = tail;
    }

    out
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Write the current page of a session view
pub fn write_view<W: Write>(w: &mut W, view: &SessionView) -> io::Result<()> {
    writeln!(w, "{}", colors::label(&view.status))?;

    let Some(pager) = &view.pager else {
        return Ok(());
    };

    writeln!(w)?;
    for result in &view.results {
        writeln!(
            w,
            "[{}] {}",
            colors::locator(&result.locator),
            colors::source(&result.source)
        )?;
        for line in render_highlights(&result.annotated_text).lines() {
            writeln!(w, "    {line}")?;
        }
        writeln!(w)?;
    }

    let prev = if pager.has_prev {
        colors::label("‹ prev")
    } else {
        colors::dim("‹ prev")
    };
    let next = if pager.has_next {
        colors::label("next ›")
    } else {
        colors::dim("next ›")
    };
    writeln!(w, "{}  {prev} | {next}", colors::number(&pager.label))
}

/// Write a document outline
pub fn write_outline<W: Write>(w: &mut W, outline: &[OutlineEntry]) -> io::Result<()> {
    for entry in outline {
        writeln!(
            w,
            "{:>5}  {}",
            colors::dim(&(entry.index + 1).to_string()),
            entry.preview.replace('\n', " ")
        )?;
    }
    Ok(())
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(data: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::title(title));
}
