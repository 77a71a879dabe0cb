//! Word range resolution.

use limelight_traits::{ContentProvider, NodeId, Position};

use crate::delimiters::{is_delimiter, is_word_char};
use crate::range::HighlightRange;
use crate::walk::{char_at, run_len};

/// Resolve the word touching `hit` into `out`.
///
/// The word is the maximal contiguous run of word characters containing the
/// hit position, possibly spanning several sibling text runs (markup often
/// splits a word across runs; empty runs in between are skipped). Collapses
/// when the cursor sits exactly on a delimiter or the hit node is not text.
pub fn resolve_word<P: ContentProvider>(provider: &P, hit: Position, out: &mut HighlightRange) {
    if provider.text(hit.node).is_none() {
        out.collapse();
        return;
    }
    let len = run_len(provider, hit.node);
    // Boundaries must come to rest in non-empty runs; a hit inside an empty
    // run has no character to anchor to.
    if len == 0 {
        out.collapse();
        return;
    }
    let offset = hit.offset.min(len);

    // An offset equal to the run's length is a caret snapped past the run's
    // visible content; the end boundary starts out at the run's end. A
    // cursor directly on a delimiter is a boundary hit, not a word.
    if offset < len {
        match char_at(provider, hit.node, offset) {
            Some(ch) if is_word_char(ch) => {}
            _ => {
                out.collapse();
                return;
            }
        }
    }

    let end = scan_forward(provider, hit.node, offset);
    let start = scan_backward(provider, hit.node, offset);

    if start == end {
        out.collapse();
    } else {
        out.set(start, end);
    }
}

/// Walk the end boundary forward over word characters, following sibling
/// text runs. The committed boundary only moves when a character is
/// consumed, so it never comes to rest inside an empty run.
fn scan_forward<P: ContentProvider>(provider: &P, node: NodeId, offset: usize) -> Position {
    let mut end = Position::new(node, offset);
    let mut cursor = end;
    loop {
        let len = run_len(provider, cursor.node);
        if cursor.offset < len {
            match char_at(provider, cursor.node, cursor.offset) {
                Some(ch) if is_word_char(ch) => {}
                _ => break,
            }
            cursor.offset += 1;
            end = cursor;
        } else {
            // At the run's edge: continue only if the run didn't end on a
            // delimiter and the next sibling is itself a text run.
            if len > 0 {
                match char_at(provider, cursor.node, len - 1) {
                    Some(ch) if is_delimiter(ch) => break,
                    _ => {}
                }
            }
            let Some(next) = provider.next_sibling(cursor.node) else {
                break;
            };
            if provider.text(next).is_none() {
                break;
            }
            cursor = Position::new(next, 0);
        }
    }
    end
}

/// Walk the start boundary backward over word characters. Zero-length
/// sibling text runs are skipped; a preceding run is only entered if it
/// does not end in a delimiter.
fn scan_backward<P: ContentProvider>(provider: &P, node: NodeId, offset: usize) -> Position {
    let mut start = Position::new(node, offset);
    let mut cursor = start;
    loop {
        if cursor.offset > 0 {
            match char_at(provider, cursor.node, cursor.offset - 1) {
                Some(ch) if is_word_char(ch) => {}
                _ => break,
            }
            cursor.offset -= 1;
            start = cursor;
        } else {
            let Some(prev) = prev_nonempty_text_sibling(provider, cursor.node) else {
                break;
            };
            let len = run_len(provider, prev);
            match char_at(provider, prev, len - 1) {
                Some(ch) if is_word_char(ch) => cursor = Position::new(prev, len),
                _ => break,
            }
        }
    }
    start
}

/// Nearest preceding sibling that is a non-empty text run, skipping empty
/// text runs. A non-text sibling stops the search.
fn prev_nonempty_text_sibling<P: ContentProvider>(provider: &P, node: NodeId) -> Option<NodeId> {
    let mut sibling = provider.prev_sibling(node);
    while let Some(sib) = sibling {
        let text = provider.text(sib)?;
        if !text.is_empty() {
            return Some(sib);
        }
        sibling = provider.prev_sibling(sib);
    }
    None
}
