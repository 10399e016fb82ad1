//! Code span and fence rewriting.
//!
//! `<pre>` and `<code>` cannot be rewritten independently: whether a
//! `</code>` closes a fenced block or an inline span depends on how its
//! opener was rendered, and the renderer wraps highlighted blocks as
//! `<pre><code class="language-x">`. The stage therefore scans the four
//! token kinds in document order and carries explicit open/close state
//! instead of applying blind substitutions. Inline spans elsewhere in the
//! fragment keep their single backticks even after a fenced block has been
//! emitted.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<pre[^>]*>|</pre>|<code[^>]*>|</code[^>]*>").unwrap());
static LANGUAGE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class="[^"]*language-([^"]*)""#).unwrap());

#[derive(Debug, PartialEq, Eq)]
enum CodeTag {
    PreOpen,
    PreClose,
    CodeOpen,
    CodeClose,
}

fn classify(tag: &str) -> CodeTag {
    if tag.starts_with("</pre") {
        CodeTag::PreClose
    } else if tag.starts_with("<pre") {
        CodeTag::PreOpen
    } else if tag.starts_with("</code") {
        CodeTag::CodeClose
    } else {
        CodeTag::CodeOpen
    }
}

/// Rewrite pre/code markup into fenced blocks and inline backtick spans.
pub(super) fn rewrite_code(input: &str) -> String {
    let tokens: Vec<regex::Match> = CODE_TOKENS.find_iter(input).collect();
    if tokens.is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut last_end = 0;
    // A fence is open and waiting for its close token.
    let mut fence_open = false;
    // The open fence came from a pre+code pair, so the trailing </pre> of
    // that pair must produce nothing.
    let mut fence_from_pre = false;
    let mut swallow_pre_close = false;
    // A <pre> deferred its fence to the <code> that immediately follows it.
    let mut pre_pending = false;

    for (i, token) in tokens.iter().enumerate() {
        out.push_str(&input[last_end..token.start()]);
        last_end = token.end();

        match classify(token.as_str()) {
            CodeTag::PreOpen => {
                let delegates = tokens.get(i + 1).map_or(false, |next| {
                    classify(next.as_str()) == CodeTag::CodeOpen
                        && input[token.end()..next.start()].trim().is_empty()
                });
                if delegates {
                    pre_pending = true;
                } else {
                    out.push_str("\n```\n");
                    fence_open = true;
                }
            }
            CodeTag::CodeOpen => {
                let language = LANGUAGE_CLASS
                    .captures(token.as_str())
                    .map(|caps| caps[1].to_string());
                match language {
                    Some(language) => {
                        out.push_str("\n```");
                        out.push_str(&language);
                        out.push('\n');
                        fence_open = true;
                        fence_from_pre = pre_pending;
                    }
                    None if pre_pending => {
                        out.push_str("\n```\n");
                        fence_open = true;
                        fence_from_pre = true;
                    }
                    None => out.push('`'),
                }
                pre_pending = false;
            }
            CodeTag::CodeClose => {
                if fence_open {
                    out.push_str("\n```\n");
                    fence_open = false;
                    swallow_pre_close = fence_from_pre;
                    fence_from_pre = false;
                } else {
                    out.push('`');
                }
            }
            CodeTag::PreClose => {
                if fence_open {
                    out.push_str("\n```\n");
                    fence_open = false;
                    fence_from_pre = false;
                } else if swallow_pre_close {
                    swallow_pre_close = false;
                }
                // Otherwise a stray close, which produces nothing.
            }
        }
    }

    out.push_str(&input[last_end..]);
    out
}
