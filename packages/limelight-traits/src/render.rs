//! The rendering-layer contract resolved ranges are pushed into.
//!
//! The engine registers two highlights at activation and keeps their ranges
//! current between pointer events. How a renderer paints them (CSS custom
//! highlights, overlay quads, terminal attributes) is its own business.

use smol_str::SmolStr;

use crate::content::Position;

/// Registration name for the visual-line highlight.
pub const LINE_HIGHLIGHT_NAME: &str = "limelight-line";
/// Registration name for the word highlight.
pub const WORD_HIGHLIGHT_NAME: &str = "limelight-word";

/// Host-supplied color configuration, applied once at activation.
///
/// Every field is optional; an absent field leaves the corresponding
/// property unset rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightColors {
    pub line_background: Option<SmolStr>,
    pub line_foreground: Option<SmolStr>,
    pub word_background: Option<SmolStr>,
    pub word_foreground: Option<SmolStr>,
}

impl HighlightColors {
    /// The line highlight's half of the configuration.
    pub fn line_paint(&self) -> HighlightPaint {
        HighlightPaint {
            background: self.line_background.clone(),
            foreground: self.line_foreground.clone(),
        }
    }

    /// The word highlight's half of the configuration.
    pub fn word_paint(&self) -> HighlightPaint {
        HighlightPaint {
            background: self.word_background.clone(),
            foreground: self.word_foreground.clone(),
        }
    }
}

/// The style record handed to the renderer for one registered highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightPaint {
    pub background: Option<SmolStr>,
    pub foreground: Option<SmolStr>,
}

/// Receives highlight registrations and range updates from the engine.
///
/// Registration order is significant where highlights overlap: a highlight
/// registered later paints over one registered earlier. The engine registers
/// the line highlight first, then the word highlight.
pub trait HighlightRenderer {
    fn register(&mut self, name: &'static str, paint: HighlightPaint);
    fn unregister(&mut self, name: &'static str);

    /// Replace the rendered extent of a registered highlight. `None`
    /// collapses it (nothing highlighted).
    fn update(&mut self, name: &'static str, range: Option<(Position, Position)>);
}
