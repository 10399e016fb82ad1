//! Table rewriting.
//!
//! Tag substitution first: rows become `| cell | cell |` lines with one
//! trailing empty cell, section wrappers vanish, and the table edges turn
//! into blank lines. A line pass then repairs the row endings, drops rows
//! that came out empty, and inserts the `| --- |` separator Markdown needs
//! after the header row. The line pass tracks fence markers so pipe
//! characters inside code blocks are never touched.

use once_cell::sync::Lazy;
use regex::Regex;

static TABLE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<table[^>]*>").unwrap());
static SECTION_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<thead[^>]*>|<tbody[^>]*>").unwrap());
static ROW_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<tr[^>]*>").unwrap());
static CELL_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<th[^>]*>|<td[^>]*>").unwrap());
static TRAILING_EMPTY_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|\s+\|\s*$").unwrap());

/// Rewrite table markup into Markdown pipe tables.
pub(super) fn rewrite_tables(input: &str) -> String {
    let text = TABLE_OPEN.replace_all(input, "\n");
    let text = text.replace("</table>", "\n");
    let text = SECTION_OPEN.replace_all(&text, "");
    let text = text.replace("</thead>", "").replace("</tbody>", "");
    let text = ROW_OPEN.replace_all(&text, "| ");
    let text = text.replace("</tr>", " |\n");
    let text = CELL_OPEN.replace_all(&text, "");
    let text = text.replace("</th>", " | ").replace("</td>", " | ");
    fix_rows(&text)
}

/// Repair pipe rows line by line and synthesize the header separator for
/// each run of two or more consecutive rows.
fn fix_rows(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            flush_run(&mut out, &mut run);
            in_fence = !in_fence;
            out.push(line.to_string());
            continue;
        }
        if in_fence {
            out.push(line.to_string());
            continue;
        }
        if line.starts_with('|') {
            let row = TRAILING_EMPTY_CELL.replace(line, "|").into_owned();
            if row.trim() != "|" {
                run.push(row);
            }
            continue;
        }
        flush_run(&mut out, &mut run);
        out.push(line.to_string());
    }
    flush_run(&mut out, &mut run);

    out.join("\n")
}

fn flush_run(out: &mut Vec<String>, run: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let needs_separator = run.len() >= 2 && !is_separator_row(&run[1]);
    let mut rows = std::mem::take(run).into_iter();
    if let Some(header) = rows.next() {
        if needs_separator {
            let separator = separator_row(column_count(&header));
            out.push(header);
            out.push(separator);
        } else {
            out.push(header);
        }
    }
    out.extend(rows);
}

fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|')
        && trimmed.ends_with('|')
        && trimmed.contains('-')
        && trimmed.chars().all(|c| matches!(c, '|' | '-' | ' '))
}

fn column_count(row: &str) -> usize {
    row.trim().trim_matches('|').split('|').count()
}

fn separator_row(columns: usize) -> String {
    let cells = vec!["---"; columns.max(1)];
    format!("| {} |", cells.join(" | "))
}
