//! Shared traits and types for Limelight
//!
//! This crate defines the boundary between the Limelight highlight engine and
//! its host: the [`ContentProvider`] contract a layout/content tree must
//! implement for the engine to resolve ranges over it, the
//! [`HighlightRenderer`] contract the engine pushes resolved ranges into, and
//! the plain data types ([`Position`], [`PointerEvent`], [`HighlightColors`])
//! that cross that boundary.
//!
//! Keeping these in a separate, dependency-light crate allows hosts to
//! implement the provider side without pulling in the engine itself.
//!
//! [`ContentProvider`]: content::ContentProvider
//! [`HighlightRenderer`]: render::HighlightRenderer
//! [`Position`]: content::Position
//! [`PointerEvent`]: events::PointerEvent
//! [`HighlightColors`]: render::HighlightColors

pub mod content;
pub mod events;
pub mod render;

pub use content::{ContentProvider, NodeId, Position};
pub use events::{PointerButtons, PointerEvent};
pub use render::{
    HighlightColors, HighlightPaint, HighlightRenderer, LINE_HIGHLIGHT_NAME, WORD_HIGHLIGHT_NAME,
};

// Geometry vocabulary. Rect::contains is half-open, so a degenerate rect
// never contains a point.
pub use kurbo::{Point, Rect};
