//! Document-order stepping over a [`ContentProvider`] tree.
//!
//! Pure functions over the provider's structural accessors, so the resolvers
//! stay portable to any layout-tree abstraction, including the plain-node
//! test double used by the integration tests. The walk skips nodes without
//! visual extent and only ever yields non-empty text runs.

use limelight_traits::{ContentProvider, NodeId};

/// Character count of a text run; `0` for non-text nodes.
pub(crate) fn run_len<P: ContentProvider>(provider: &P, node: NodeId) -> usize {
    provider.text(node).map_or(0, |text| text.chars().count())
}

/// The `offset`th character of a text run.
pub(crate) fn char_at<P: ContentProvider>(
    provider: &P,
    node: NodeId,
    offset: usize,
) -> Option<char> {
    provider.text(node)?.chars().nth(offset)
}

/// Next non-empty text run after `from` in document order.
///
/// Tries following siblings first; when a level is exhausted, ascends and
/// continues from the parent's siblings. Returns `None` at the edge of the
/// content document.
pub(crate) fn next_text_run<P: ContentProvider>(provider: &P, from: NodeId) -> Option<NodeId> {
    let mut node = from;
    loop {
        let mut sibling = provider.next_sibling(node);
        while let Some(sib) = sibling {
            if let Some(run) = first_text_descendant(provider, sib) {
                return Some(run);
            }
            sibling = provider.next_sibling(sib);
        }
        node = provider.parent(node)?;
    }
}

/// Previous non-empty text run before `from` in document order.
pub(crate) fn prev_text_run<P: ContentProvider>(provider: &P, from: NodeId) -> Option<NodeId> {
    let mut node = from;
    loop {
        let mut sibling = provider.prev_sibling(node);
        while let Some(sib) = sibling {
            if let Some(run) = last_text_descendant(provider, sib) {
                return Some(run);
            }
            sibling = provider.prev_sibling(sib);
        }
        node = provider.parent(node)?;
    }
}

/// First non-empty text run in the subtree rooted at `node`, skipping
/// anything that occupies no visual space.
fn first_text_descendant<P: ContentProvider>(provider: &P, node: NodeId) -> Option<NodeId> {
    if !provider.occupies_space(node) {
        return None;
    }
    if let Some(text) = provider.text(node) {
        return (!text.is_empty()).then_some(node);
    }
    (0..provider.child_count(node)).find_map(|index| {
        let child = provider.child_at(node, index)?;
        first_text_descendant(provider, child)
    })
}

/// Last non-empty text run in the subtree rooted at `node`.
fn last_text_descendant<P: ContentProvider>(provider: &P, node: NodeId) -> Option<NodeId> {
    if !provider.occupies_space(node) {
        return None;
    }
    if let Some(text) = provider.text(node) {
        return (!text.is_empty()).then_some(node);
    }
    (0..provider.child_count(node)).rev().find_map(|index| {
        let child = provider.child_at(node, index)?;
        last_text_descendant(provider, child)
    })
}
