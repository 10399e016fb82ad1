//! Transcript assembly: extracted turns in, role-labeled Markdown out.

use crate::convert::html_to_markdown;
use crate::error::ExportError;
use crate::extract::Page;

/// Labels prefixed to each message block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLabels {
    pub user: String,
    pub assistant: String,
}

impl Default for RoleLabels {
    fn default() -> Self {
        RoleLabels {
            user: "You".to_string(),
            assistant: "ChatGPT".to_string(),
        }
    }
}

/// The assembled conversation body, without any metadata header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub markdown: String,
    pub message_count: usize,
}

/// Convert every message of every turn and concatenate role-labeled blocks
/// in document order.
///
/// A turn contributes zero, one, or two messages depending on which role
/// containers it holds. A page whose turns carry no recognizable content at
/// all fails with [`ExportError::NoContentExtracted`].
pub fn assemble(page: &Page, labels: &RoleLabels) -> Result<Transcript, ExportError> {
    let turns = page.turns()?;

    let mut markdown = String::new();
    let mut message_count = 0;

    for turn in &turns {
        if let Some(markup) = turn.user_markup() {
            push_block(&mut markdown, &labels.user, &html_to_markdown(&markup));
            message_count += 1;
        }
        if let Some(markup) = turn.assistant_markup() {
            push_block(&mut markdown, &labels.assistant, &html_to_markdown(&markup));
            message_count += 1;
        }
    }

    if markdown.trim().is_empty() {
        return Err(ExportError::NoContentExtracted);
    }

    Ok(Transcript {
        markdown,
        message_count,
    })
}

fn push_block(out: &mut String, label: &str, body: &str) {
    out.push_str("**");
    out.push_str(label);
    out.push_str("**:\n");
    out.push_str(body);
    out.push_str("\n\n");
}
