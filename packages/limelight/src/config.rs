use limelight_traits::HighlightColors;

/// Options used when activating a [`HoverHighlighter`](crate::HoverHighlighter).
///
/// The two tuning constants are empirical: they are validated against real
/// renderings, not derived from a geometric law, and the defaults are the
/// values that behaved well on mixed prose/markup test pages.
#[derive(Debug, Clone)]
pub struct HighlighterConfig {
    /// Acceptance factor for the single-line height heuristic. Must stay
    /// below 2, otherwise a range spanning two visual lines of equal height
    /// passes the union check.
    pub height_factor: f64,

    /// Hard cap on single-character expansion probes per pointer event.
    /// Exhausting it stops further growth for that event and keeps the
    /// already-expanded range.
    pub step_budget: usize,

    /// Colors applied to the two highlights at activation.
    pub colors: HighlightColors,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            height_factor: 1.74,
            step_budget: 110,
            colors: HighlightColors::default(),
        }
    }
}
