//! Low-level queries over the parsed page tree.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};

/// Value of the named attribute, for element nodes that carry it.
pub(super) fn attribute(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Local name of an element node.
pub(super) fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// True when the element's class attribute contains every requested token.
/// Tokens match whole class names, so `markdown` does not match
/// `markdown-lite`.
pub(super) fn has_classes(handle: &Handle, tokens: &[&str]) -> bool {
    match attribute(handle, "class") {
        Some(value) => {
            let classes: Vec<&str> = value.split_whitespace().collect();
            tokens.iter().all(|token| classes.contains(token))
        }
        None => false,
    }
}

/// First descendant satisfying the predicate, in depth-first order.
pub(super) fn find_descendant(handle: &Handle, pred: &impl Fn(&Handle) -> bool) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if pred(child) {
            return Some(child.clone());
        }
        if let Some(found) = find_descendant(child, pred) {
            return Some(found);
        }
    }
    None
}

/// Every descendant satisfying the predicate, in depth-first order.
pub(super) fn collect_descendants(
    handle: &Handle,
    pred: &impl Fn(&Handle) -> bool,
    out: &mut Vec<Handle>,
) {
    for child in handle.children.borrow().iter() {
        if pred(child) {
            out.push(child.clone());
        }
        collect_descendants(child, pred, out);
    }
}

/// The node's children serialized back to markup, the `innerHTML` view.
pub(super) fn inner_markup(handle: &Handle) -> Option<String> {
    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    let serializable = SerializableHandle::from(handle.clone());
    serialize(&mut bytes, &serializable, opts).ok()?;
    String::from_utf8(bytes).ok()
}
