//! The pointer event coordinator.
//!
//! Owns the two persisted ranges and drives the resolvers from pointer
//! movement. Everything runs synchronously inside the host's event handler;
//! the cheap containment pre-check skips re-resolution entirely while the
//! pointer stays inside the already-highlighted spans.

use bitflags::bitflags;
use limelight_traits::{
    ContentProvider, HighlightRenderer, LINE_HIGHLIGHT_NAME, PointerEvent, Position,
    WORD_HIGHLIGHT_NAME,
};

use crate::config::HighlighterConfig;
use crate::line::resolve_line;
use crate::range::HighlightRange;
use crate::word::resolve_word;

bitflags! {
    /// Which persisted ranges a pointer event actually changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HoverUpdate: u8 {
        const WORD = 1 << 0;
        const LINE = 1 << 1;
    }
}

/// Live state of the hover-highlighting feature.
///
/// The value itself is the activation marker: [`toggle`] threads it through
/// an `Option` slot owned by the host, so a populated slot means "active"
/// and no process-wide flag exists anywhere.
pub struct HoverHighlighter {
    config: HighlighterConfig,
    word_range: HighlightRange,
    line_range: HighlightRange,
}

impl HoverHighlighter {
    /// Activate the feature and hand back the live state. Registers both
    /// highlights with the renderer, line first, then word, so word
    /// highlighting paints over the line highlight wherever they overlap.
    pub fn activate<R: HighlightRenderer>(config: HighlighterConfig, renderer: &mut R) -> Self {
        renderer.register(LINE_HIGHLIGHT_NAME, config.colors.line_paint());
        renderer.register(WORD_HIGHLIGHT_NAME, config.colors.word_paint());
        #[cfg(feature = "tracing")]
        tracing::debug!("hover highlighting activated");
        Self {
            config,
            word_range: HighlightRange::new(),
            line_range: HighlightRange::new(),
        }
    }

    /// Deactivate: collapse both ranges and withdraw both registrations.
    pub fn deactivate<R: HighlightRenderer>(mut self, renderer: &mut R) {
        self.word_range.collapse();
        self.line_range.collapse();
        renderer.update(WORD_HIGHLIGHT_NAME, None);
        renderer.update(LINE_HIGHLIGHT_NAME, None);
        renderer.unregister(WORD_HIGHLIGHT_NAME);
        renderer.unregister(LINE_HIGHLIGHT_NAME);
        #[cfg(feature = "tracing")]
        tracing::debug!("hover highlighting deactivated");
    }

    /// Boundaries of the currently highlighted word, if any.
    pub fn word_endpoints(&self) -> Option<(Position, Position)> {
        self.word_range.endpoints()
    }

    /// Boundaries of the currently highlighted line, if any.
    pub fn line_endpoints(&self) -> Option<(Position, Position)> {
        self.line_range.endpoints()
    }

    /// Handle one pointer movement.
    ///
    /// Each range is re-resolved only when the pointer has left its current
    /// geometry; the hit-test is performed lazily and at most once, shared
    /// by both resolvers. Renderer updates are pushed only for ranges whose
    /// boundaries actually changed.
    pub fn pointer_move<P: ContentProvider, R: HighlightRenderer>(
        &mut self,
        provider: &P,
        renderer: &mut R,
        event: &PointerEvent,
    ) -> HoverUpdate {
        let (x, y) = (event.x, event.y);
        let mut update = HoverUpdate::empty();
        let mut hit: Option<Option<Position>> = None;

        if !self.word_range.contains_in_client_rects(provider, x, y) {
            let previous = self.word_range.endpoints();
            self.word_range.collapse();
            let hit_result = *hit.get_or_insert_with(|| provider.hit_test(x, y));
            if let Some(position) = hit_result {
                resolve_word(provider, position, &mut self.word_range);
            }
            // A resolved word the pointer still isn't over is no word at
            // this point (the hit snapped to text elsewhere).
            if !self.word_range.contains_in_client_rects(provider, x, y) {
                self.word_range.collapse();
            }
            if self.word_range.endpoints() != previous {
                renderer.update(WORD_HIGHLIGHT_NAME, self.word_range.endpoints());
                update |= HoverUpdate::WORD;
            }
        }

        if !self.line_range.contains_in_bounding_rect(provider, x, y) {
            let previous = self.line_range.endpoints();
            self.line_range.collapse();
            let hit_result = *hit.get_or_insert_with(|| provider.hit_test(x, y));
            if let Some(position) = hit_result {
                resolve_line(provider, &self.config, position, y, &mut self.line_range);
            }
            if !self.line_range.contains_in_bounding_rect(provider, x, y) {
                self.line_range.collapse();
            }
            if self.line_range.endpoints() != previous {
                renderer.update(LINE_HIGHLIGHT_NAME, self.line_range.endpoints());
                update |= HoverUpdate::LINE;
            }
        }

        update
    }

    /// The pointer left the surface: collapse both ranges unconditionally.
    pub fn pointer_leave<R: HighlightRenderer>(&mut self, renderer: &mut R) {
        if !self.word_range.is_collapsed() {
            renderer.update(WORD_HIGHLIGHT_NAME, None);
        }
        if !self.line_range.is_collapsed() {
            renderer.update(LINE_HIGHLIGHT_NAME, None);
        }
        self.word_range.collapse();
        self.line_range.collapse();
    }
}

/// The host-facing activation toggle.
///
/// Activates into an empty slot and returns `true`; deactivates a populated
/// slot and returns `false`. The slot is the only activation state there
/// is: the host keeps it wherever its own lifecycle lives and threads it
/// back in on the next invocation.
pub fn toggle<R: HighlightRenderer>(
    slot: &mut Option<HoverHighlighter>,
    config: HighlighterConfig,
    renderer: &mut R,
) -> bool {
    match slot.take() {
        Some(active) => {
            active.deactivate(renderer);
            false
        }
        None => {
            *slot = Some(HoverHighlighter::activate(config, renderer));
            true
        }
    }
}
