use std::borrow::Cow;

use rune_config::EditConfig;
use rune_text::{
    CaretViewport, GlyphLocator, Point, Rect, SelectionState, TextBuffer, TextMeasure,
};

use crate::caret::CaretBlink;
use crate::event::{EventHandler, EventResult, KeyCode, KeyInput, PointerInput};
use crate::render::{Color, FrameGeometry, RenderSink};

/// Per-side padding between the bounds and the text clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(all: f32) -> Self {
        Self::new(all, all, all, all)
    }
}

/// Single-line text input with caret, drag selection and horizontal
/// scrolling.
///
/// Features:
/// - Caret with blinking animation while focused
/// - Pointer drag selection anchored at the press position
/// - Horizontal scrolling that keeps the caret inside the content area
/// - Text insertion and deletion, replacing the selection when present
/// - Optional password-style masking
///
/// Indices are grapheme cluster indices into the current text.
#[derive(Debug, Clone)]
pub struct InputBox {
    /// Outer bounds; the text is clipped to the bounds minus padding.
    pub rect: Rect,
    pub padding: Padding,
    /// When set, the text is measured and drawn as this character repeated.
    pub mask: Option<char>,
    pub text_color: Color,
    pub selection_color: Color,

    text: TextBuffer,
    caret: usize,
    selection: SelectionState,
    dragging: bool,
    blink: CaretBlink,
    viewport: CaretViewport,
}

impl InputBox {
    /// Create an unfocused input box with default styling.
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            padding: Padding::default(),
            mask: None,
            text_color: Color::BLACK,
            selection_color: Color::BLACK.with_alpha(0.25),
            text: TextBuffer::new(text),
            caret: 0,
            selection: SelectionState::Idle,
            dragging: false,
            blink: CaretBlink::new(false),
            viewport: CaretViewport::default(),
        }
    }

    /// Create an input box at `position` sized and styled from `config`.
    pub fn from_config(
        position: Point,
        config: &EditConfig,
        measure: &dyn TextMeasure,
        text: impl Into<String>,
    ) -> Self {
        let pad = config.input.padding;
        let padding = Padding::new(pad.left, pad.top, pad.right, pad.bottom);
        let (w, h) = desired_size(config.input.width, config.input.height, padding, measure);
        let selection_color = Color::from(config.selection.color).with_alpha(config.selection.alpha);

        let mut input = Self::new(Rect::new(position.x, position.y, w, h), text);
        input.padding = padding;
        input.mask = config.text.mask;
        input.selection_color = selection_color;
        input.blink = CaretBlink::with_interval(config.caret.blink_interval, false);
        input.viewport = CaretViewport::new(config.caret.width);
        input
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_mask(mut self, mask: Option<char>) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_blink_interval(mut self, interval: f32) -> Self {
        self.blink = CaretBlink::with_interval(interval, self.blink.is_focused());
        self
    }

    pub fn with_caret_width(mut self, width: f32) -> Self {
        self.viewport = CaretViewport::new(width);
        self
    }

    /// Get the current text content.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.text
    }

    /// Replace the whole text. Clamps the caret, drops the selection and
    /// ends any drag in progress.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = TextBuffer::new(text);
        self.caret = self.text.clamp(self.caret);
        self.selection.clear();
        self.dragging = false;
    }

    /// Caret position as a cluster index.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret to `index` (clamped), collapsing any selection.
    pub fn set_caret(&mut self, index: usize) {
        self.caret = self.text.clamp(index);
        self.selection.collapse_to_caret(self.caret);
        self.blink.reset_manual();
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Selected cluster range in logical order.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection.normalized_range()
    }

    /// Selected text, or `None` without a range.
    pub fn selected_text(&self) -> Option<&str> {
        self.selection
            .range()
            .map(|range| self.text.slice(range))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Check if the caret is currently in its visible blink phase.
    pub fn is_caret_visible(&self) -> bool {
        self.blink.visible
    }

    /// Get the current horizontal scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.viewport.scroll_offset()
    }

    /// Text clip rectangle: the bounds minus padding.
    pub fn content_rect(&self) -> Rect {
        let p = self.padding;
        self.rect.deflate(p.left, p.top, p.right, p.bottom)
    }

    /// Unscrolled layout origin: left edge of the content area, line box
    /// centered vertically.
    pub fn text_base(&self, measure: &dyn TextMeasure) -> Point {
        let clip = self.content_rect();
        let y = clip.y + (clip.h - measure.line_height()) * 0.5;
        Point::new(clip.x, y)
    }

    /// The text as measured and drawn this frame.
    pub fn display_text(&self) -> Cow<'_, TextBuffer> {
        display_buffer(&self.text, self.mask)
    }

    /// Preferred outer size for a content area of the current size.
    pub fn desired_size(&self, measure: &dyn TextMeasure) -> (f32, f32) {
        let content = self.content_rect();
        desired_size(content.w, content.h, self.padding, measure)
    }

    /// Advance the caret blink timer by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        self.blink.tick(delta_time);
    }

    /// Compute this frame's drawable geometry, scrolling the text so the
    /// caret stays inside the content area.
    pub fn frame(&mut self, measure: &dyn TextMeasure) -> FrameGeometry {
        let clip = self.content_rect();
        let base = self.text_base(measure);
        let display = display_buffer(&self.text, self.mask);
        let placed = self
            .viewport
            .scroll_to_keep(measure, display.as_str(), base, self.caret, clip);

        let focused = self.blink.is_focused();
        let caret = (focused && self.blink.visible).then_some(placed.caret);
        let selection = if focused {
            self.selection.normalized_range().and_then(|range| {
                self.viewport
                    .range_rect(measure, display.as_str(), base, range, clip)
            })
        } else {
            None
        };

        FrameGeometry {
            text: display.as_str().to_owned(),
            origin: placed.origin,
            clip,
            caret,
            selection,
        }
    }

    /// Render the input box's text, selection and caret into `sink`.
    pub fn render(&mut self, measure: &dyn TextMeasure, sink: &mut dyn RenderSink) {
        let frame = self.frame(measure);
        frame.draw(sink, self.text_color, self.selection_color);
    }

    fn locate(&self, measure: &dyn TextMeasure, point: Point) -> usize {
        let display = display_buffer(&self.text, self.mask);
        let origin = self.viewport.origin(self.text_base(measure));
        GlyphLocator::locate(measure, display.as_str(), origin, point)
    }

    fn replace_text(&mut self, text: TextBuffer) {
        self.text = text;
        self.caret = self.text.clamp(self.caret);
        self.selection.clamp_to(self.text.len());
    }

    /// Remove the selected range, leaving the caret at its start.
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection.normalized_range() else {
            return false;
        };
        self.replace_text(self.text.with_removed(start..end));
        self.caret = self.text.clamp(start);
        self.selection.clear();
        tracing::debug!(start, end, len = self.text.len(), "deleted selection");
        true
    }

    fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.replace_text(self.text.with_removed(self.caret..self.caret + 1));
        self.selection.collapse_to_caret(self.caret);
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.caret >= self.text.len() {
            return false;
        }
        self.replace_text(self.text.with_removed(self.caret..self.caret + 1));
        self.selection.collapse_to_caret(self.caret);
        true
    }

    fn move_left(&mut self) -> bool {
        if let (true, Some(anchor)) = (self.selection.is_ranging(), self.selection.anchor()) {
            self.caret = self.caret.min(anchor);
            self.selection.collapse_to_caret(self.caret);
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.selection.collapse_to_caret(self.caret);
        true
    }

    fn move_right(&mut self) -> bool {
        if let (true, Some(anchor)) = (self.selection.is_ranging(), self.selection.anchor()) {
            self.caret = self.text.clamp(self.caret.max(anchor));
            self.selection.collapse_to_caret(self.caret);
            return true;
        }
        if self.caret >= self.text.len() {
            return false;
        }
        self.caret += 1;
        self.selection.collapse_to_caret(self.caret);
        true
    }

    fn move_to(&mut self, index: usize) -> bool {
        let index = self.text.clamp(index);
        let changed = index != self.caret || self.selection.is_ranging();
        self.caret = index;
        self.selection.clear();
        changed
    }

    fn insert_char(&mut self, ch: char) -> bool {
        self.delete_selection();
        let at = self.text.byte_offset(self.caret);
        let mut encoded = [0u8; 4];
        let text = self.text.with_inserted(self.caret, ch.encode_utf8(&mut encoded));
        // The new character may merge into a neighboring cluster; the caret
        // lands after whichever cluster now contains it.
        self.caret = text.index_of_byte(at + ch.len_utf8());
        self.replace_text(text);
        self.selection.collapse_to_caret(self.caret);
        true
    }
}

impl EventHandler for InputBox {
    fn handle_pointer_down(
        &mut self,
        measure: &dyn TextMeasure,
        event: &dyn PointerInput,
    ) -> EventResult {
        let index = self.locate(measure, event.position());
        self.caret = index;
        self.selection.begin_drag(index);
        self.dragging = !self.text.is_empty();
        self.blink.reset_manual();
        tracing::trace!(index, dragging = self.dragging, "pointer down");
        EventResult::Handled
    }

    fn handle_pointer_move(
        &mut self,
        measure: &dyn TextMeasure,
        event: &dyn PointerInput,
    ) -> EventResult {
        if !self.dragging {
            return EventResult::Ignored;
        }
        let index = self.locate(measure, event.position());
        if self.selection.extend_drag(index) {
            self.caret = index;
            tracing::trace!(index, range = ?self.selection.normalized_range(), "drag extended");
        }
        EventResult::Handled
    }

    fn handle_pointer_up(&mut self, _event: &dyn PointerInput) -> EventResult {
        let was_dragging = std::mem::replace(&mut self.dragging, false);
        if was_dragging {
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    fn handle_pointer_leave(&mut self) -> EventResult {
        self.dragging = false;
        EventResult::Ignored
    }

    fn handle_key(&mut self, event: &dyn KeyInput) -> EventResult {
        let changed = match event.key() {
            KeyCode::Tab | KeyCode::Enter => return EventResult::Handled,
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::ArrowLeft => self.move_left(),
            KeyCode::ArrowRight => self.move_right(),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.text.len()),
            KeyCode::Other => match event.character() {
                Some(ch) if !ch.is_control() => self.insert_char(ch),
                _ => return EventResult::Ignored,
            },
        };
        if changed {
            self.blink.reset_manual();
            tracing::debug!(
                key = ?event.key(),
                caret = self.caret,
                len = self.text.len(),
                "edit applied"
            );
        }
        EventResult::Handled
    }

    fn is_focused(&self) -> bool {
        self.blink.is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        self.blink.set_focused(focused);
        if !focused {
            self.dragging = false;
        }
    }

    fn contains_point(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }
}

fn display_buffer(text: &TextBuffer, mask: Option<char>) -> Cow<'_, TextBuffer> {
    match mask {
        Some(ch) => Cow::Owned(text.masked(ch)),
        None => Cow::Borrowed(text),
    }
}

/// Outer size for a content area of `width` x `height`; a non-positive
/// height falls back to one line plus two pixels.
fn desired_size(width: f32, height: f32, padding: Padding, measure: &dyn TextMeasure) -> (f32, f32) {
    let content_h = if height <= 0.0 {
        measure.line_height() + 2.0
    } else {
        height
    };
    (
        width + padding.left + padding.right,
        content_h + padding.top + padding.bottom,
    )
}
