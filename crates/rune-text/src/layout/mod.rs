pub mod rect;
pub mod selection;
pub mod viewport;

pub use hit_test::{GlyphLocator, HitTestResult, Point};
pub use rect::Rect;
pub use selection::SelectionState;
pub use viewport::{CaretViewport, DEFAULT_CARET_WIDTH, ViewportFrame};
