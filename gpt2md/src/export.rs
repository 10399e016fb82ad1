//! Export orchestration: a saved page in, a named Markdown document out.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assemble::{assemble, RoleLabels};
use crate::error::ExportError;
use crate::extract::Page;
use crate::page;

/// Filename conventions for exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameStyle {
    /// `ChatGPT-<unix-seconds>.md`, collision-free within a second.
    Epoch,
    /// `ChatGPT-<YYYY-MM-DD>.md`, one name per day.
    Date,
}

/// Knobs for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub labels: RoleLabels,
    pub filename_style: FilenameStyle,
    /// Put the first eight characters of the conversation id into the
    /// filename when the id is known.
    pub include_conversation_id: bool,
    /// Prepend the source-link metadata header when the URL is known.
    pub source_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            labels: RoleLabels::default(),
            filename_style: FilenameStyle::Epoch,
            include_conversation_id: true,
            source_header: true,
        }
    }
}

/// A finished export: the document plus its summary.
///
/// Serializing the struct yields the summary only; the document itself is
/// deliberately excluded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    #[serde(skip)]
    pub markdown: String,
    pub message_count: usize,
    /// Characters in the final document, metadata header included.
    pub character_count: usize,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Run a whole export: extract and assemble the transcript, prepend the
/// metadata header, and name the output file.
///
/// The timestamp is injected so callers decide what "now" means; the
/// library itself never reads the clock.
pub fn export_page(
    html: &str,
    source_url: Option<&str>,
    now: DateTime<Utc>,
    options: &ExportOptions,
) -> Result<Export, ExportError> {
    let parsed = Page::parse(html);
    let transcript = assemble(&parsed, &options.labels)?;

    let conversation_id = source_url.and_then(page::conversation_id);

    let mut markdown = String::new();
    if options.source_header {
        if let Some(url) = source_url {
            markdown.push_str(&metadata_header(url));
        }
    }
    markdown.push_str(&transcript.markdown);

    let filename_id = conversation_id
        .as_deref()
        .filter(|_| options.include_conversation_id);
    let filename = export_filename(options.filename_style, filename_id, now);

    Ok(Export {
        character_count: markdown.chars().count(),
        markdown,
        message_count: transcript.message_count,
        filename,
        source_url: source_url.map(str::to_string),
        conversation_id,
    })
}

/// The document header: a title, the source link, and a rule.
pub fn metadata_header(url: &str) -> String {
    format!("# ChatGPT Conversation\n\n**Source:** [{url}]({url})\n\n---\n\n")
}

/// Build the export filename for the given convention.
///
/// With an id, the first eight characters prefix the stamp:
/// `ChatGPT-<id8>-<stamp>.md`. Without one the stamp stands alone.
pub fn export_filename(
    style: FilenameStyle,
    conversation_id: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    let stamp = match style {
        FilenameStyle::Epoch => now.timestamp().to_string(),
        FilenameStyle::Date => now.format("%Y-%m-%d").to_string(),
    };
    match conversation_id {
        Some(id) => {
            let short: String = id.chars().take(8).collect();
            format!("ChatGPT-{short}-{stamp}.md")
        }
        None => format!("ChatGPT-{stamp}.md"),
    }
}
