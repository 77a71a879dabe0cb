//! The content/layout provider contract.
//!
//! The engine never owns or mutates the content tree. It consumes an
//! already-laid-out tree through [`ContentProvider`]: hit-testing, bounding
//! rectangle queries for arbitrary sub-ranges, and plain structural
//! navigation. Any tree shape works (a real document, or a plain-node test
//! double) as long as text leaves expose their character data and every node
//! can report whether it occupies visual space.

use kurbo::Rect;

/// Opaque handle to a node in the provider's content tree.
pub type NodeId = usize;

/// A location in the content tree: a node plus a character offset into that
/// node's text.
///
/// `offset` counts characters (not bytes), and ranges over `[0, char_len]`
/// for a text run of `char_len` characters; an offset equal to the length
/// addresses the position just past the run's last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub node: NodeId,
    pub offset: usize,
}

impl Position {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Read-only access to a laid-out content tree.
///
/// Geometry queries are answered in viewport coordinates. Implementations
/// must tolerate any `(start, end)` pair of valid positions; a range that
/// covers no visible content reports a degenerate (zero-size) rectangle.
pub trait ContentProvider {
    /// The root of the content document. Upward traversal stops here.
    fn root(&self) -> NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId>;
    fn prev_sibling(&self, node: NodeId) -> Option<NodeId>;
    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;
    fn child_count(&self, node: NodeId) -> usize;
    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId>;

    /// Character data of a text run. `None` for non-text nodes. Text runs
    /// may be empty.
    fn text(&self, node: NodeId) -> Option<&str>;

    /// Whether the node has any visual extent (a `display: none` subtree or
    /// a collapsed inline reports `false`).
    fn occupies_space(&self, node: NodeId) -> bool;

    /// Map a viewport coordinate to the nearest text position, or `None`
    /// when the coordinate is over no text at all.
    fn hit_test(&self, x: f64, y: f64) -> Option<Position>;

    /// Bounding box of the content between `start` and `end` (end
    /// exclusive), in viewport coordinates.
    fn bounding_rect(&self, start: Position, end: Position) -> Rect;

    /// One rectangle per rendered fragment of the content between `start`
    /// and `end`. A range that wraps across visual lines reports one rect
    /// per line it touches.
    fn client_rects(&self, start: Position, end: Position) -> Vec<Rect>;
}
