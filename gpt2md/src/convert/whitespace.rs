//! Whitespace normalization, the final conversion stage.
//!
//! Earlier stages splice newlines in freely, so the raw output carries runs
//! of blank lines and loosely spaced bullets. This pass walks the text line
//! by line: runs of blank lines collapse to a single one, blank lines
//! directly after a bullet item are dropped so lists stay packed, and a bare
//! `-` bullet absorbs the following content line. The result is trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s+").unwrap());

/// Collapse blank-line runs, tighten bullets, trim the edges.
pub fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut pending_blanks = 0usize;

    for raw in text.lines() {
        if raw.trim().is_empty() {
            pending_blanks += 1;
            continue;
        }

        let line = BULLET_PREFIX.replace(raw, "- ").into_owned();
        let after_bare_bullet = lines.last().map_or(false, |prev| prev.trim() == "-");
        let after_bullet = lines.last().map_or(false, |prev| prev.starts_with("- "));

        if after_bare_bullet {
            // An empty bullet takes over the next line of content.
            if let Some(prev) = lines.last_mut() {
                *prev = format!("- {}", line.trim_start());
            }
        } else {
            if pending_blanks > 0 && !after_bullet && !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(line);
        }
        pending_blanks = 0;
    }

    lines.join("\n").trim().to_string()
}
