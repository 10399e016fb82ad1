use crate::common::{assistant_turn, combined_turn, conversation_page, user_turn};
use gpt2md::{assemble, ExportError, Page, RoleLabels};

#[test]
fn test_two_turn_conversation_assembles_in_order() {
    let page = Page::parse(&conversation_page(&[
        user_turn(1, "What is Rust?"),
        assistant_turn(2, "<p>A systems language.</p>"),
    ]));

    let transcript = assemble(&page, &RoleLabels::default()).expect("assembly succeeds");
    assert_eq!(transcript.message_count, 2);
    assert_eq!(
        transcript.markdown,
        "**You**:\nWhat is Rust?\n\n**ChatGPT**:\nA systems language.\n\n"
    );
}

#[test]
fn test_combined_turn_yields_user_before_assistant() {
    let page = Page::parse(&conversation_page(&[combined_turn(
        1,
        "ping",
        "<p>pong</p>",
    )]));

    let transcript = assemble(&page, &RoleLabels::default()).expect("assembly succeeds");
    assert_eq!(transcript.message_count, 2);
    assert_eq!(transcript.markdown, "**You**:\nping\n\n**ChatGPT**:\npong\n\n");
}

#[test]
fn test_custom_labels_are_used_verbatim() {
    let labels = RoleLabels {
        user: "Q".to_string(),
        assistant: "A".to_string(),
    };
    let page = Page::parse(&conversation_page(&[
        user_turn(1, "why?"),
        assistant_turn(2, "because"),
    ]));

    let transcript = assemble(&page, &labels).expect("assembly succeeds");
    assert!(transcript.markdown.starts_with("**Q**:\nwhy?\n\n"));
    assert!(transcript.markdown.contains("**A**:\nbecause\n\n"));
}

#[test]
fn test_message_bodies_are_converted_markdown() {
    let page = Page::parse(&conversation_page(&[assistant_turn(
        1,
        "<p>Use <strong>bold</strong> moves</p>",
    )]));

    let transcript = assemble(&page, &RoleLabels::default()).expect("assembly succeeds");
    assert_eq!(transcript.markdown, "**ChatGPT**:\nUse **bold** moves\n\n");
}

#[test]
fn test_turns_without_messages_fail_assembly() {
    let html = "<article data-testid=\"conversation-turn-1\">\
                <div class=\"decoration\">sidebar</div></article>";
    let page = Page::parse(html);
    assert_eq!(
        assemble(&page, &RoleLabels::default()).err(),
        Some(ExportError::NoContentExtracted)
    );
}

#[test]
fn test_missing_turns_surface_the_turn_error() {
    let page = Page::parse("<html><body>no conversation</body></html>");
    assert_eq!(
        assemble(&page, &RoleLabels::default()).err(),
        Some(ExportError::NoTurnsFound)
    );
}
