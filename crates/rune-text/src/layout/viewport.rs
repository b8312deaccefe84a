use crate::layout::{GlyphLocator, Point, Rect};
use crate::measure::TextMeasure;

/// Default caret width in device pixels.
pub const DEFAULT_CARET_WIDTH: f32 = 1.0;

/// Drawable geometry for one frame of a scrolled single-line editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFrame {
    /// Origin the text run should be drawn from (scroll applied).
    pub origin: Point,
    /// Caret rectangle, left edge inside the clip rectangle.
    pub caret: Rect,
}

/// Horizontal scroller that keeps the caret inside a clip rectangle.
///
/// The viewport only remembers the scroll offset. Caret geometry is
/// recomputed from the caret index and measurement on every query, and
/// `scroll_to_keep` corrects the offset and the caret rectangle in the
/// same call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretViewport {
    /// Signed shift applied to the layout origin (usually <= 0).
    scroll_x: f32,
    caret_width: f32,
}

impl Default for CaretViewport {
    fn default() -> Self {
        Self::new(DEFAULT_CARET_WIDTH)
    }
}

impl CaretViewport {
    pub fn new(caret_width: f32) -> Self {
        Self {
            scroll_x: 0.0,
            caret_width: caret_width.max(0.0),
        }
    }

    /// Current horizontal scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_x
    }

    pub fn caret_width(&self) -> f32 {
        self.caret_width
    }

    /// Forget any scrolling.
    pub fn reset(&mut self) {
        self.scroll_x = 0.0;
    }

    /// `base` with the current scroll offset applied.
    pub fn origin(&self, base: Point) -> Point {
        base.offset_x(self.scroll_x)
    }

    /// Caret rectangle for boundary `index` at the current scroll offset,
    /// without any clamping.
    pub fn caret_rect(&self, measure: &dyn TextMeasure, text: &str, base: Point, index: usize) -> Rect {
        let pos = GlyphLocator::position_of(measure, text, self.origin(base), index);
        Rect::new(pos.x, pos.y, self.caret_width, measure.line_height())
    }

    /// Adjust the scroll offset so the caret at `index` stays within `clip`.
    ///
    /// 1. A caret right of `clip` scrolls the text left by the overflow.
    /// 2. The caret is never placed right of `clip.right()`.
    /// 3. A caret left of `clip` scrolls the text right by the deficit and
    ///    is pinned to `clip.left()`.
    pub fn scroll_to_keep(
        &mut self,
        measure: &dyn TextMeasure,
        text: &str,
        base: Point,
        index: usize,
        clip: Rect,
    ) -> ViewportFrame {
        let mut caret = self.caret_rect(measure, text, base, index);
        let before = self.scroll_x;

        if caret.x > clip.right() {
            self.scroll_x -= caret.x - clip.right();
        }
        caret.x = caret.x.min(clip.right());

        if caret.x < clip.left() {
            self.scroll_x += clip.left() - caret.x;
            caret.x = clip.left();
        }

        if self.scroll_x != before {
            tracing::trace!(
                index,
                from = before,
                to = self.scroll_x,
                "caret viewport scrolled"
            );
        }

        ViewportFrame {
            origin: self.origin(base),
            caret,
        }
    }

    /// Highlight rectangle for boundaries `start..end` at the current scroll
    /// offset, clipped horizontally to `clip`. `None` when empty or fully
    /// outside the clip rectangle.
    pub fn range_rect(
        &self,
        measure: &dyn TextMeasure,
        text: &str,
        base: Point,
        (start, end): (usize, usize),
        clip: Rect,
    ) -> Option<Rect> {
        let (start, end) = (start.min(end), start.max(end));
        let origin = self.origin(base);
        let left = GlyphLocator::position_of(measure, text, origin, start);
        let right = GlyphLocator::position_of(measure, text, origin, end);
        Rect::new(left.x, left.y, right.x - left.x, measure.line_height())
            .clip_horizontal(clip.left(), clip.right())
    }
}
