use crate::common::{assistant_turn, combined_turn, conversation_page, user_turn};
use gpt2md::{ExportError, Page};

#[test]
fn test_turns_come_back_in_document_order() {
    let page = Page::parse(&conversation_page(&[
        user_turn(1, "first question"),
        assistant_turn(2, "<p>first answer</p>"),
        user_turn(3, "second question"),
    ]));

    let turns = page.turns().expect("page has turns");
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[0].user_markup().as_deref(), Some("first question"));
    assert_eq!(turns[1].assistant_markup().as_deref(), Some("<p>first answer</p>"));
    assert_eq!(turns[2].user_markup().as_deref(), Some("second question"));
}

#[test]
fn test_combined_turn_exposes_both_roles() {
    let page = Page::parse(&conversation_page(&[combined_turn(
        1,
        "the question",
        "<p>the answer</p>",
    )]));

    let turns = page.turns().expect("page has turns");
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].user_markup().as_deref(), Some("the question"));
    assert_eq!(turns[0].assistant_markup().as_deref(), Some("<p>the answer</p>"));
}

#[test]
fn test_surrounding_page_chrome_is_ignored() {
    let html = format!(
        "<html><body><nav><article data-testid=\"history-item\">old</article></nav>\
         <main>{}</main><footer>footer text</footer></body></html>",
        user_turn(1, "hello")
    );

    let turns = Page::parse(&html).turns().expect("page has turns");
    assert_eq!(turns.len(), 1);
}

#[test]
fn test_page_without_turns_reports_the_error() {
    let page = Page::parse("<html><body><main>nothing here</main></body></html>");
    assert_eq!(page.turns().err(), Some(ExportError::NoTurnsFound));
}

#[test]
fn test_inner_markup_preserves_nested_tags() {
    let page = Page::parse(&conversation_page(&[assistant_turn(
        1,
        "<p>Use <code>grep</code> with <strong>care</strong></p>",
    )]));

    let turns = page.turns().expect("page has turns");
    let markup = turns[0].assistant_markup().expect("assistant content");
    assert!(markup.contains("<code>grep</code>"));
    assert!(markup.contains("<strong>care</strong>"));
}
