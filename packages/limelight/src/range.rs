//! The long-lived highlight range and its cached geometry.

use kurbo::{Point, Rect};
use limelight_traits::{ContentProvider, Position};
use smallvec::SmallVec;

/// A mutable, long-lived text range with lazily-computed geometry.
///
/// Two of these persist for an activation's lifetime (word and line); they
/// are collapsed rather than destroyed between highlights. The bounding
/// rectangle and client rectangles are computed on demand through the
/// provider and memoized; every boundary mutation drops the cache.
///
/// A non-collapsed range's endpoints always reference non-empty text runs;
/// the resolvers only commit a boundary when a character is consumed.
#[derive(Debug, Clone, Default)]
pub struct HighlightRange {
    endpoints: Option<(Position, Position)>,
    bounding: Option<Rect>,
    rects: Option<SmallVec<[Rect; 4]>>,
}

impl HighlightRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is highlighted.
    pub fn is_collapsed(&self) -> bool {
        self.endpoints.is_none()
    }

    /// Current `[start, end)` boundaries, or `None` when collapsed.
    pub fn endpoints(&self) -> Option<(Position, Position)> {
        self.endpoints
    }

    /// Replace both boundaries. Equal boundaries collapse the range.
    pub fn set(&mut self, start: Position, end: Position) {
        self.endpoints = (start != end).then_some((start, end));
        self.invalidate();
    }

    pub fn collapse(&mut self) {
        self.endpoints = None;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.bounding = None;
        self.rects = None;
    }

    /// Bounding box of the highlighted content. `None` when collapsed.
    pub fn bounding_rect<P: ContentProvider>(&mut self, provider: &P) -> Option<Rect> {
        let (start, end) = self.endpoints?;
        if self.bounding.is_none() {
            self.bounding = Some(provider.bounding_rect(start, end));
        }
        self.bounding
    }

    /// Per-fragment rectangles of the highlighted content. Empty when
    /// collapsed.
    pub fn client_rects<P: ContentProvider>(&mut self, provider: &P) -> &[Rect] {
        let Some((start, end)) = self.endpoints else {
            return &[];
        };
        if self.rects.is_none() {
            self.rects = Some(SmallVec::from_vec(provider.client_rects(start, end)));
        }
        self.rects.as_deref().unwrap_or(&[])
    }

    /// Whether the pointer falls inside any client rectangle. The cheap
    /// per-event containment test for the word range.
    pub fn contains_in_client_rects<P: ContentProvider>(
        &mut self,
        provider: &P,
        x: f64,
        y: f64,
    ) -> bool {
        let point = Point::new(x, y);
        self.client_rects(provider).iter().any(|r| r.contains(point))
    }

    /// Whether the pointer falls inside the bounding rectangle. The cheap
    /// per-event containment test for the line range.
    pub fn contains_in_bounding_rect<P: ContentProvider>(
        &mut self,
        provider: &P,
        x: f64,
        y: f64,
    ) -> bool {
        self.bounding_rect(provider)
            .is_some_and(|r| r.contains(Point::new(x, y)))
    }
}
