//! HTML entity decoding.
//!
//! Only the five entities the chat renderer actually emits are decoded.
//! `&amp;` goes first, so double-encoded input like `&amp;lt;` collapses all
//! the way down to `<` in a single pass.

/// Decode `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&#39;`, in that order.
pub fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
