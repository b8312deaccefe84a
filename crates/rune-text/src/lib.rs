//! rune-text: single-line text model, measurement and caret geometry.
//!
//! - `buffer`: immutable grapheme-indexed text values
//! - `measure`: measurement services (monospace and font-backed)
//! - `font`: font loading and metrics
//! - `layout`: hit testing, selection state and the caret viewport

pub mod buffer;
pub mod font;
pub mod layout;
pub mod measure;

pub use buffer::TextBuffer;
pub use font::{FontError, FontFace, FontMetrics, ScaledFontMetrics};
pub use layout::{
    CaretViewport, GlyphLocator, HitTestResult, Point, Rect, SelectionState, ViewportFrame,
};
pub use measure::{FontMeasure, GlyphBox, MonospaceMeasure, TextMeasure};
