use rune_text::{Point, Rect};

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha set from a 0.0..=1.0 factor.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Destination for the primitives an input box draws.
///
/// Implementations own batching and clipping; the input box only states
/// what to draw and the clip rectangle the text belongs to.
pub trait RenderSink {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text with its layout origin at `origin`
    /// (top-left of the line box), clipped to `clip`.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color, clip: Rect);
}

/// Everything the renderer needs to draw one frame of an input box.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    /// Text to draw (masked when a mask character is set).
    pub text: String,
    /// Scroll-adjusted layout origin of the text.
    pub origin: Point,
    /// Clip rectangle for text, caret and selection.
    pub clip: Rect,
    /// Caret rectangle, present while focused and in the visible blink phase.
    pub caret: Option<Rect>,
    /// Selection highlight, present while focused with a non-empty range.
    pub selection: Option<Rect>,
}

impl FrameGeometry {
    /// Push the frame to `sink`: text, then selection, then caret.
    pub fn draw(&self, sink: &mut dyn RenderSink, text_color: Color, selection_color: Color) {
        if !self.text.is_empty() {
            sink.draw_text(self.origin, &self.text, text_color, self.clip);
        }
        if let Some(rect) = self.selection {
            sink.fill_rect(rect, selection_color);
        }
        if let Some(rect) = self.caret {
            sink.fill_rect(rect, text_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl RenderSink for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ops.push(format!("rect {} {} a={}", rect.x, rect.w, color.a));
        }

        fn draw_text(&mut self, origin: Point, text: &str, _color: Color, _clip: Rect) {
            self.ops.push(format!("text {} {text}", origin.x));
        }
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Color::BLACK.with_alpha(0.25).a, 64);
        assert_eq!(Color::BLACK.with_alpha(2.0).a, 255);
        assert_eq!(Color::from([1, 2, 3, 4]), Color::rgba(1, 2, 3, 4));
    }

    #[test]
    fn test_draw_order() {
        let frame = FrameGeometry {
            text: "abc".into(),
            origin: Point::new(2.0, 0.0),
            clip: Rect::new(0.0, 0.0, 50.0, 16.0),
            caret: Some(Rect::new(12.0, 0.0, 1.0, 16.0)),
            selection: Some(Rect::new(2.0, 0.0, 10.0, 16.0)),
        };
        let mut sink = Recorder::default();
        frame.draw(&mut sink, Color::BLACK, Color::BLACK.with_alpha(0.25));
        assert_eq!(
            sink.ops,
            vec!["text 2 abc", "rect 2 10 a=64", "rect 12 1 a=255"]
        );
    }

    #[test]
    fn test_empty_frame_draws_nothing() {
        let frame = FrameGeometry {
            text: String::new(),
            origin: Point::zero(),
            clip: Rect::default(),
            caret: None,
            selection: None,
        };
        let mut sink = Recorder::default();
        frame.draw(&mut sink, Color::BLACK, Color::BLACK);
        assert!(sink.ops.is_empty());
    }
}
