//! Text measurement services used for hit testing and caret placement.
//!
//! Measurement works on grapheme clusters: one cluster is one glyph box,
//! one caret step and one index in a [`TextBuffer`](crate::TextBuffer).

use unicode_segmentation::UnicodeSegmentation;

use crate::font::{FontFace, ScaledFontMetrics};
use crate::layout::Point;

/// Horizontal extent of one laid-out glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    /// Left edge in pixels (same space as the layout origin).
    pub x: f32,
    /// Measured width in pixels. Zero for unresolved glyphs.
    pub width: f32,
}

impl GlyphBox {
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    /// Horizontal midpoint, used to decide which side of the glyph a
    /// pointer falls on.
    pub fn midpoint(&self) -> f32 {
        self.x + self.width * 0.5
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Measurement service for a single line of left-to-right text.
///
/// Implementors only need to provide per-cluster widths and the line
/// height; `measure` and `glyphs` follow from those. Widths must be
/// non-negative so that prefix widths grow monotonically.
pub trait TextMeasure {
    /// Advance of a single grapheme cluster.
    fn cluster_width(&self, cluster: &str) -> f32;

    /// Height of one line of text.
    fn line_height(&self) -> f32;

    /// Rendered width of `text`.
    fn measure(&self, text: &str) -> f32 {
        text.graphemes(true).map(|g| self.cluster_width(g)).sum()
    }

    /// Glyph boxes of `text` laid out left to right from `origin`.
    fn glyphs(&self, text: &str, origin: Point) -> Vec<GlyphBox> {
        let mut pen = origin.x;
        text.graphemes(true)
            .map(|g| {
                let width = self.cluster_width(g);
                let glyph = GlyphBox::new(pen, width);
                pen += width;
                glyph
            })
            .collect()
    }
}

/// Fixed-advance measurement: every cluster is `advance` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMeasure {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance: advance.max(0.0),
            line_height,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn cluster_width(&self, _cluster: &str) -> f32 {
        self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Measurement backed by a loaded font face at a fixed pixel size.
///
/// A cluster's width is the sum of its characters' advances; characters
/// the font cannot map contribute zero.
#[derive(Debug, Clone)]
pub struct FontMeasure {
    face: FontFace,
    font_size: f32,
    scaled: ScaledFontMetrics,
}

impl FontMeasure {
    pub fn new(face: FontFace, font_size: f32) -> Self {
        let scaled = face.scaled_metrics(font_size);
        Self {
            face,
            font_size,
            scaled,
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Distance from the line top to the baseline.
    pub fn ascent(&self) -> f32 {
        self.scaled.ascent
    }
}

impl TextMeasure for FontMeasure {
    fn cluster_width(&self, cluster: &str) -> f32 {
        cluster
            .chars()
            .map(|ch| match self.face.advance(ch, self.font_size) {
                Some(advance) => advance,
                None => {
                    tracing::trace!(?ch, "no glyph for character, measuring as zero width");
                    0.0
                }
            })
            .sum()
    }

    fn line_height(&self) -> f32 {
        self.scaled.line_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_box() {
        let glyph = GlyphBox::new(10.0, 8.0);
        assert_eq!(glyph.midpoint(), 14.0);
        assert_eq!(glyph.right(), 18.0);
    }

    #[test]
    fn test_monospace_measure() {
        let measure = MonospaceMeasure::new(8.0, 16.0);
        assert_eq!(measure.measure(""), 0.0);
        assert_eq!(measure.measure("abc"), 24.0);
        // Combining sequence counts as a single cluster.
        assert_eq!(measure.measure("e\u{301}"), 8.0);
        assert_eq!(measure.line_height(), 16.0);
    }

    #[test]
    fn test_glyphs_follow_origin() {
        let measure = MonospaceMeasure::new(5.0, 10.0);
        let glyphs = measure.glyphs("hey", Point::new(100.0, 0.0));
        assert_eq!(
            glyphs,
            vec![
                GlyphBox::new(100.0, 5.0),
                GlyphBox::new(105.0, 5.0),
                GlyphBox::new(110.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_negative_advance_is_clamped() {
        let measure = MonospaceMeasure::new(-3.0, 10.0);
        assert_eq!(measure.measure("abc"), 0.0);
    }
}
