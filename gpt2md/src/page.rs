//! Conversation page URL checks.

use url::Url;

const CONVERSATION_HOSTS: [&str; 2] = ["chat.openai.com", "chatgpt.com"];

/// True when the URL parses and its host is exactly one of the chat hosts.
/// Lookalike hosts such as `chatgpt.com.evil.example` do not pass.
pub fn is_conversation_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map_or(false, |host| CONVERSATION_HOSTS.contains(&host)),
        Err(_) => false,
    }
}

/// The conversation id from a `/c/<id>` path pair.
///
/// The whole segment after `c` must be hex digits and dashes, the shape the
/// chat backend assigns; a segment that only starts that way yields no id.
pub fn conversation_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    while let Some(segment) = segments.next() {
        if segment == "c" {
            return segments
                .next()
                .filter(|id| is_conversation_id(id))
                .map(str::to_string);
        }
    }
    None
}

fn is_conversation_id(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}
