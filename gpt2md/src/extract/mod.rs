//! Conversation turn extraction.
//!
//! This is the one tree-backed component: turn containers and role markers
//! are attribute queries over a parsed page, and each message's markup is
//! re-serialized from the tree for the conversion pipeline. The renderer
//! marks every exchange with an `article` whose `data-testid` starts with
//! `conversation-turn`; role containers inside it carry
//! `data-message-author-role`.

mod dom;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, RcDom};

use crate::error::ExportError;

const TURN_ELEMENT: &str = "article";
const TURN_TESTID_PREFIX: &str = "conversation-turn";
const TESTID_ATTR: &str = "data-testid";
const ROLE_ATTR: &str = "data-message-author-role";
// User text lives in a pre-wrap container; assistant turns prefer the
// rendered markdown node and fall back to pre-wrap for plain replies.
const PRE_WRAP_CLASS: &str = "whitespace-pre-wrap";
const MARKDOWN_CLASSES: [&str; 2] = ["markdown", "prose"];

/// A parsed conversation page.
pub struct Page {
    document: Handle,
}

impl Page {
    /// Parse a page or fragment. The HTML parser recovers from arbitrary
    /// input, so parsing is total; an unusable page only shows up later as
    /// an empty turn list.
    pub fn parse(html: &str) -> Page {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .unwrap_or_else(|_| RcDom::default());
        Page {
            document: dom.document,
        }
    }

    /// All conversation turns, in document order.
    pub fn turns(&self) -> Result<Vec<Turn>, ExportError> {
        let mut handles = Vec::new();
        dom::collect_descendants(
            &self.document,
            &|node| {
                dom::element_name(node).as_deref() == Some(TURN_ELEMENT)
                    && dom::attribute(node, TESTID_ATTR)
                        .map_or(false, |id| id.starts_with(TURN_TESTID_PREFIX))
            },
            &mut handles,
        );
        if handles.is_empty() {
            return Err(ExportError::NoTurnsFound);
        }
        Ok(handles.into_iter().map(|handle| Turn { handle }).collect())
    }
}

/// One conversation turn, holding at most one user and one assistant message.
pub struct Turn {
    handle: Handle,
}

impl Turn {
    /// Inner markup of the user message, when the turn has one.
    pub fn user_markup(&self) -> Option<String> {
        let container = self.role_container("user")?;
        let content =
            dom::find_descendant(&container, &|node| dom::has_classes(node, &[PRE_WRAP_CLASS]))?;
        dom::inner_markup(&content)
    }

    /// Inner markup of the assistant message, when the turn has one.
    pub fn assistant_markup(&self) -> Option<String> {
        let container = self.role_container("assistant")?;
        let content = dom::find_descendant(&container, &|node| {
            dom::has_classes(node, &MARKDOWN_CLASSES)
        })
        .or_else(|| {
            dom::find_descendant(&container, &|node| dom::has_classes(node, &[PRE_WRAP_CLASS]))
        })?;
        dom::inner_markup(&content)
    }

    fn role_container(&self, role: &str) -> Option<Handle> {
        dom::find_descendant(&self.handle, &|node| {
            dom::attribute(node, ROLE_ATTR).as_deref() == Some(role)
        })
    }
}
