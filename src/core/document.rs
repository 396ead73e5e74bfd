//! Loaded documents and paragraph derivation.
//!
//! A document is the extracted text of one source split into paragraphs.
//! Paragraph indices are stable for as long as the document is loaded;
//! loading another source replaces the whole document.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::Path;

use crate::core::types::{ExtractedContent, OutlineEntry};

/// Title used when the source provides none
pub const UNTITLED: &str = "(Untitled)";

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Drop carriage returns and trim surrounding whitespace
fn normalize_text(text: &str) -> String {
    text.replace('\r', "").trim().to_string()
}

/// Split text into paragraphs on blank-line boundaries.
///
/// Pieces are trimmed and empty pieces dropped.
pub fn paragraphs_from_text(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);
    PARAGRAPH_BREAK
        .split(&normalized)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Group digits in threes: `12345` -> `12,345`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A loaded document
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// URL or file path the document was loaded from
    pub source: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    /// Characters in the normalized text
    pub char_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Document {
    /// Build a document from an extraction payload
    pub fn from_extracted(source: impl Into<String>, content: ExtractedContent) -> Self {
        let title = content
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());
        let text = normalize_text(content.text_content.as_deref().unwrap_or(""));

        Self {
            source: source.into(),
            title,
            paragraphs: paragraphs_from_text(&text),
            char_count: text.chars().count(),
            loaded_at: Utc::now(),
        }
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Host name for URL sources, file name for local files
    pub fn host(&self) -> String {
        if let Ok(url) = url::Url::parse(&self.source) {
            if let Some(host) = url.host_str() {
                return host.to_string();
            }
        }

        Path::new(&self.source)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.clone())
    }

    /// `{host} — {n} paragraphs — {chars} characters`
    pub fn meta_line(&self) -> String {
        format!(
            "{} — {} paragraphs — {} characters",
            self.host(),
            group_thousands(self.paragraph_count()),
            group_thousands(self.char_count)
        )
    }

    /// First `limit` paragraphs, each cut to `preview_chars` characters
    pub fn outline(&self, limit: usize, preview_chars: usize) -> Vec<OutlineEntry> {
        self.paragraphs
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, paragraph)| {
                let mut preview: String = paragraph.chars().take(preview_chars).collect();
                if paragraph.chars().count() > preview_chars {
                    preview.push('…');
                }
                OutlineEntry { index, preview }
            })
            .collect()
    }
}
