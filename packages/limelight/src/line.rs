//! Visual-line span detection and expansion.
//!
//! Seeds a one-character range at the hit position, then grows it outward
//! character by character, validating every growth against the running
//! vertical bounds of what has been accepted so far. Line membership is
//! decided purely from rendered geometry, so the expansion follows wrapped
//! lines and inline elements correctly without knowing anything about the
//! document's logical structure.

use kurbo::Rect;
use limelight_traits::{ContentProvider, Position};

use crate::config::HighlighterConfig;
use crate::delimiters::is_whitespace_or_zero_width;
use crate::range::HighlightRange;
use crate::walk::{char_at, next_text_run, prev_text_run, run_len};

/// Resolve the visual line under the pointer into `out`.
///
/// `pointer_y` is the pointer's vertical viewport coordinate; a hit whose
/// character rectangle does not vertically contain it is rejected outright
/// (the common case when the cursor hovers inter-line space). Collapses
/// whenever no plausible line exists at the pointer.
pub fn resolve_line<P: ContentProvider>(
    provider: &P,
    config: &HighlighterConfig,
    hit: Position,
    pointer_y: f64,
    out: &mut HighlightRange,
) {
    let Some(seed) = clamp_to_char(provider, hit) else {
        out.collapse();
        return;
    };
    let seed_end = Position::new(seed.node, seed.offset + 1);

    let seed_rect = provider.bounding_rect(seed, seed_end);
    if seed_rect.height() <= 0.0 || pointer_y < seed_rect.y0 || pointer_y > seed_rect.y1 {
        out.collapse();
        return;
    }

    // A single character reporting several non-degenerate fragments is a
    // rendering artifact (seen after some hyphenation breaks). Give up on
    // the line rather than expand from inconsistent geometry.
    let fragments = provider
        .client_rects(seed, seed_end)
        .iter()
        .filter(|r| r.width() > 0.0 && r.height() > 0.0)
        .count();
    if fragments > 1 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            node = seed.node,
            offset = seed.offset,
            fragments,
            "line seed reported multiple fragments, collapsing"
        );
        out.collapse();
        return;
    }

    let mut expander = Expander {
        provider,
        bounds: LineBounds::seed(seed_rect),
        height_factor: config.height_factor,
        steps_left: config.step_budget,
        start: seed,
        end: seed_end,
    };

    // Alternate one-character growth on each side while both keep
    // succeeding, then drain whichever side is still growing.
    let mut end_open = true;
    let mut start_open = true;
    while end_open && start_open {
        end_open = expander.grow_end();
        start_open = expander.grow_start();
    }
    if end_open {
        while expander.grow_end() {}
    } else if start_open {
        while expander.grow_start() {}
    }

    match trim_edges(provider, expander.start, expander.end, seed) {
        Some((start, end)) => out.set(start, end),
        None => out.collapse(),
    }
}

/// Clamp a hit so it addresses an actual character (offset strictly below
/// the run's length). Non-text and empty runs yield `None`.
fn clamp_to_char<P: ContentProvider>(provider: &P, hit: Position) -> Option<Position> {
    let len = run_len(provider, hit.node);
    provider.text(hit.node)?;
    if len == 0 {
        return None;
    }
    Some(Position::new(hit.node, hit.offset.min(len - 1)))
}

/// Running vertical bounds of the accepted extent, maintained incrementally
/// across the whole expansion rather than recomputed from scratch.
#[derive(Debug, Clone, Copy)]
struct LineBounds {
    top: f64,
    bottom: f64,
    min_char_height: f64,
}

impl LineBounds {
    fn seed(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            bottom: rect.y1,
            min_char_height: rect.height(),
        }
    }

    /// The single-line heuristic. Accept a one-character growth iff the
    /// union of the running bounds with the character's own rectangle is
    /// still plausibly one line tall:
    ///
    /// - `height_factor * min(min_char_height, char_height)` must exceed the
    ///   union height (a second line of comparable height would roughly
    ///   double it), and
    /// - `height_factor * intercept_height` must exceed the union height,
    ///   where the intercept takes the *non*-extremal top and bottom (a
    ///   character that barely overlaps the running bounds is on another
    ///   line even if it is tall enough on its own).
    ///
    /// A zero-height rectangle never passes (its height floors the minimum
    /// at zero). Commits the union on acceptance.
    fn admit(&mut self, rect: Rect, height_factor: f64) -> bool {
        let union_top = self.top.min(rect.y0);
        let union_bottom = self.bottom.max(rect.y1);
        let union_height = union_bottom - union_top;
        let intercept_top = self.top.max(rect.y0);
        let intercept_bottom = self.bottom.min(rect.y1);
        let intercept_height = intercept_bottom - intercept_top;
        let min_height = self.min_char_height.min(rect.height());

        if height_factor * min_height <= union_height
            || height_factor * intercept_height <= union_height
        {
            return false;
        }

        self.top = union_top;
        self.bottom = union_bottom;
        self.min_char_height = min_height;
        true
    }
}

/// Per-event expansion state: the candidate boundaries, the running bounds,
/// and the remaining step budget.
struct Expander<'a, P: ContentProvider> {
    provider: &'a P,
    bounds: LineBounds,
    height_factor: f64,
    steps_left: usize,
    start: Position,
    end: Position,
}

impl<P: ContentProvider> Expander<'_, P> {
    /// Attempt one character of growth past the end boundary.
    fn grow_end(&mut self) -> bool {
        if self.steps_left == 0 {
            return false;
        }
        self.steps_left -= 1;

        let Some((char_start, char_end)) = self.char_after_end() else {
            return false;
        };
        let rect = self.provider.bounding_rect(char_start, char_end);
        if !self.bounds.admit(rect, self.height_factor) {
            return false;
        }
        self.end = char_end;
        true
    }

    /// Attempt one character of growth before the start boundary.
    fn grow_start(&mut self) -> bool {
        if self.steps_left == 0 {
            return false;
        }
        self.steps_left -= 1;

        let Some(char_start) = self.char_before_start() else {
            return false;
        };
        let char_end = Position::new(char_start.node, char_start.offset + 1);
        let rect = self.provider.bounding_rect(char_start, char_end);
        if !self.bounds.admit(rect, self.height_factor) {
            return false;
        }
        self.start = char_start;
        true
    }

    /// The next character past the end boundary, as a one-character range,
    /// hopping to the next text run in document order when the current one
    /// is exhausted.
    fn char_after_end(&self) -> Option<(Position, Position)> {
        if self.end.offset < run_len(self.provider, self.end.node) {
            let char_start = self.end;
            return Some((char_start, Position::new(char_start.node, char_start.offset + 1)));
        }
        let run = next_text_run(self.provider, self.end.node)?;
        Some((Position::new(run, 0), Position::new(run, 1)))
    }

    /// The character just before the start boundary.
    fn char_before_start(&self) -> Option<Position> {
        if self.start.offset > 0 {
            return Some(Position::new(self.start.node, self.start.offset - 1));
        }
        let run = prev_text_run(self.provider, self.start.node)?;
        let len = run_len(self.provider, run);
        Some(Position::new(run, len - 1))
    }
}

/// Trim whitespace and invisible format characters from both edges.
///
/// Returns `None` (collapse) when nothing visible remains, or when the seed
/// character itself sat in the trimmed edge whitespace: hovering a line's
/// leading or trailing whitespace never counts as being on the line.
fn trim_edges<P: ContentProvider>(
    provider: &P,
    mut start: Position,
    mut end: Position,
    seed: Position,
) -> Option<(Position, Position)> {
    // Leading edge.
    loop {
        if start == end {
            return None;
        }
        if start.offset >= run_len(provider, start.node) {
            let run = next_text_run(provider, start.node)?;
            start = Position::new(run, 0);
            continue;
        }
        let ch = char_at(provider, start.node, start.offset)?;
        if !is_whitespace_or_zero_width(ch) {
            break;
        }
        if start == seed {
            return None;
        }
        start.offset += 1;
    }

    // Trailing edge.
    loop {
        if start == end {
            return None;
        }
        if end.offset == 0 {
            let run = prev_text_run(provider, end.node)?;
            end = Position::new(run, run_len(provider, run));
            continue;
        }
        let at = Position::new(end.node, end.offset - 1);
        let ch = char_at(provider, at.node, at.offset)?;
        if !is_whitespace_or_zero_width(ch) {
            break;
        }
        if at == seed {
            return None;
        }
        end = at;
    }

    Some((start, end))
}
