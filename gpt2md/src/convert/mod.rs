//! HTML to Markdown conversion engine.
//!
//! The engine is an ordered pipeline of pattern rewrites over the whole
//! fragment, not a tree walk. The chat renderer emits a narrow, known subset
//! of HTML, so direct tag-for-marker substitution handles it, nested
//! emphasis included, and stays tolerant of truncated or malformed markup.
//! Later stages consume markers written by earlier ones, which fixes the
//! stage order:
//!
//! 1. Block structure: paragraphs, headers, rules, line breaks
//! 2. Inline emphasis: bold and italic
//! 3. Lists
//! 4. Code spans and fences ([`code`], stateful)
//! 5. Tables ([`table`], fence-aware)
//! 6. Residual tag stripping
//! 7. Boilerplate removal
//! 8. Entity decoding ([`entities`])
//! 9. Whitespace normalization ([`whitespace`])
//!
//! Every stage is total. Malformed input degrades the output, it never
//! fails the conversion.

mod code;
mod entities;
mod table;
mod whitespace;

pub use entities::decode_entities;
pub use whitespace::normalize_whitespace;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEADER_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h([1-6])[^>]*>").unwrap());
static HEADER_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</h[1-6]>").unwrap());
static STRONG_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<strong[^>]*>").unwrap());
static EM_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<em[^>]*>").unwrap());
static LIST_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ul[^>]*>|<ol[^>]*>").unwrap());
static ITEM_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<li[^>]*>").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<hr[^>]*>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"<br[^>]*>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

// The moderation notice arrives with a mojibake-encoded em dash; these exact
// bytes must match what the page serves.
const MODERATION_NOTICE: &str = "This content may violate our content policy. \
     If you believe this to be in error, please submit your feedback \
     \u{e2}\u{20ac}\u{201d} your input will aid our research in this area.";

const COPY_BUTTON_LABEL: &str = "Copy code";

/// Convert one HTML fragment to Markdown.
///
/// Total over arbitrary input: unknown tags are stripped, unclosed
/// structures degrade to their open markers, and the empty fragment
/// converts to the empty string.
pub fn html_to_markdown(html: &str) -> String {
    let text = blocks(html);
    let text = emphasis(&text);
    let text = lists(&text);
    let text = code::rewrite_code(&text);
    let text = table::rewrite_tables(&text);
    let text = strip_tags(&text);
    let text = strip_boilerplate(&text);
    let text = entities::decode_entities(&text);
    whitespace::normalize_whitespace(&text)
}

/// Stage 1: paragraphs, headers, horizontal rules, line breaks.
fn blocks(text: &str) -> String {
    let text = text.replace("<p>", "\n\n").replace("</p>", "");
    let text = HEADER_OPEN.replace_all(&text, |caps: &Captures| {
        let level = caps[1].parse::<usize>().unwrap_or(1);
        format!("\n{} ", "#".repeat(level))
    });
    let text = HEADER_CLOSE.replace_all(&text, "\n");
    let text = RULE.replace_all(&text, "\n---\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    text.into_owned()
}

/// Stage 2: bold and italic, attribute-bearing openers included.
fn emphasis(text: &str) -> String {
    let text = text.replace("<b>", "**").replace("</b>", "**");
    let text = STRONG_OPEN.replace_all(&text, "**");
    let text = text.replace("</strong>", "**");
    let text = text.replace("<i>", "_").replace("</i>", "_");
    let text = EM_OPEN.replace_all(&text, "_");
    text.replace("</em>", "_")
}

/// Stage 3: list containers vanish, items become dash bullets.
fn lists(text: &str) -> String {
    let text = LIST_OPEN.replace_all(text, "");
    let text = text.replace("</ul>", "\n").replace("</ol>", "\n");
    let text = ITEM_OPEN.replace_all(&text, "\n- ");
    text.replace("</li>", "")
}

/// Stage 6: every remaining tag is dropped, its text content kept.
fn strip_tags(text: &str) -> String {
    ANY_TAG.replace_all(text, "").into_owned()
}

/// Stage 7: interface chrome that leaks into the page text.
fn strip_boilerplate(text: &str) -> String {
    text.replace(COPY_BUTTON_LABEL, "")
        .replace(MODERATION_NOTICE, "")
}
