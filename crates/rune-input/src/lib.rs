//! rune-input: editable single-line text input.
//!
//! The [`InputBox`] owns the text, caret, selection and blink state and
//! is driven through the [`EventHandler`] trait. Each frame it produces a
//! [`FrameGeometry`] that a [`RenderSink`] turns into draw calls.

pub mod caret;
pub mod event;
pub mod input_box;
pub mod render;

pub use caret::{CaretBlink, DEFAULT_BLINK_INTERVAL};
pub use event::{
    EventHandler, EventResult, KeyCode, KeyEvent, KeyInput, PointerEvent, PointerInput,
};
pub use input_box::{InputBox, Padding};
pub use render::{Color, FrameGeometry, RenderSink};
