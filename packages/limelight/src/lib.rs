//! Pointer-driven word and visual-line highlighting over laid-out text
//!
//! This crate implements the Limelight highlight engine: given a pointer
//! position over rendered text, it resolves two spatial ranges: the word
//! touching the cursor, and the maximal span of content sharing the cursor's
//! *visual* line. Line membership is decided from rendered geometry, not
//! logical document structure, so wrapped lines, inline elements and
//! hyphenation are handled correctly.
//!
//! The engine is headless and host-agnostic. It reads the content tree
//! through the [`ContentProvider`] contract and pushes resolved ranges into a
//! [`HighlightRenderer`]; both live in the
//! [limelight-traits](https://docs.rs/limelight-traits) crate so hosts can
//! implement them without depending on the engine. The typical embedding
//! drives a [`HoverHighlighter`] from its native pointer events:
//!
//! - [`toggle`] activates or deactivates the feature through a host-owned
//!   state slot,
//! - [`HoverHighlighter::pointer_move`] re-resolves the ranges when (and only
//!   when) the pointer leaves the currently highlighted spans,
//! - [`HoverHighlighter::pointer_leave`] collapses both.
//!
//! All resolution runs synchronously inside the event handler; worst-case
//! cost per event is capped by a configurable expansion-step budget (see
//! [`HighlighterConfig`]).

// TODO: Document features
// ## Feature flags
//  - `default`: Enables the features listed below.
//  - `tracing`: Enables tracing support.

/// Word/boundary character classification.
pub mod delimiters;

mod config;
mod highlighter;
mod line;
mod range;
mod walk;
mod word;

pub use config::HighlighterConfig;
pub use highlighter::{HoverHighlighter, HoverUpdate, toggle};
pub use line::resolve_line;
pub use range::HighlightRange;
pub use word::resolve_word;

pub use limelight_traits::{
    ContentProvider, HighlightColors, HighlightPaint, HighlightRenderer, LINE_HIGHLIGHT_NAME,
    NodeId, Point, PointerButtons, PointerEvent, Position, Rect, WORD_HIGHLIGHT_NAME,
};
