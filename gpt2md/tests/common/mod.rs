//! Shared page fixtures. The markup mirrors what the chat renderer serves:
//! turn articles tagged with `data-testid="conversation-turn-N"`, role
//! containers tagged with `data-message-author-role`, user text in a
//! pre-wrap node and assistant replies in a `markdown prose` node.

/// Wrap turn fragments into a minimal conversation page.
pub fn conversation_page(turns: &[String]) -> String {
    format!(
        "<html><body><main>{}</main></body></html>",
        turns.join("\n")
    )
}

/// One turn holding a single user message.
pub fn user_turn(index: usize, html: &str) -> String {
    format!(
        "<article data-testid=\"conversation-turn-{index}\">\
         <div data-message-author-role=\"user\">\
         <div class=\"whitespace-pre-wrap\">{html}</div></div></article>"
    )
}

/// One turn holding a single assistant message with rendered markdown.
pub fn assistant_turn(index: usize, html: &str) -> String {
    format!(
        "<article data-testid=\"conversation-turn-{index}\">\
         <div data-message-author-role=\"assistant\">\
         <div class=\"markdown prose w-full\">{html}</div></div></article>"
    )
}

/// One turn holding both sides of an exchange.
pub fn combined_turn(index: usize, user_html: &str, assistant_html: &str) -> String {
    format!(
        "<article data-testid=\"conversation-turn-{index}\">\
         <div data-message-author-role=\"user\">\
         <div class=\"whitespace-pre-wrap\">{user_html}</div></div>\
         <div data-message-author-role=\"assistant\">\
         <div class=\"markdown prose w-full\">{assistant_html}</div></div></article>"
    )
}
