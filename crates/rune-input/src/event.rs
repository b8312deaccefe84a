//! Event handling traits and input capabilities for editable elements
//!
//! Host event objects are reduced to what the editor needs: a pointer
//! position, a key identifier and an optional character. Anything that can
//! provide those can drive an element, independent of the windowing layer.
use rune_text::{Point, TextMeasure};

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and should not propagate
    Handled,
    /// Event was not handled, continue propagation
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

/// Keys the editor reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Tab,
    Enter,
    Other,
}

/// Anything that carries a pointer position in the element's coordinate space.
pub trait PointerInput {
    fn position(&self) -> Point;
}

/// Anything that identifies a pressed key and the character it produced.
pub trait KeyInput {
    fn key(&self) -> KeyCode;

    /// Printable character produced by the key press, if any.
    fn character(&self) -> Option<char> {
        None
    }
}

/// Pointer event data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// X coordinate in viewport space
    pub x: f32,
    /// Y coordinate in viewport space
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl PointerInput for PointerEvent {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl PointerInput for Point {
    fn position(&self) -> Point {
        *self
    }
}

/// Keyboard input event data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key code
    pub key: KeyCode,
    /// Character produced by the key, if printable
    pub character: Option<char>,
}

impl KeyEvent {
    /// A key press with no character.
    pub fn press(key: KeyCode) -> Self {
        Self {
            key,
            character: None,
        }
    }

    /// A key press that types `ch`.
    pub fn typed(ch: char) -> Self {
        Self {
            key: KeyCode::Other,
            character: Some(ch),
        }
    }
}

impl KeyInput for KeyEvent {
    fn key(&self) -> KeyCode {
        self.key
    }

    fn character(&self) -> Option<char> {
        self.character
    }
}

/// Unified event handler trait for interactive elements
///
/// The host dispatches events to elements, and elements return
/// EventResult to indicate whether the event was handled. Pointer
/// handlers receive the measurement service so they can hit-test text.
pub trait EventHandler {
    /// Handle a pointer press
    fn handle_pointer_down(
        &mut self,
        measure: &dyn TextMeasure,
        event: &dyn PointerInput,
    ) -> EventResult {
        let _ = (measure, event);
        EventResult::Ignored
    }

    /// Handle pointer movement (for hover states, drag operations, etc.)
    fn handle_pointer_move(
        &mut self,
        measure: &dyn TextMeasure,
        event: &dyn PointerInput,
    ) -> EventResult {
        let _ = (measure, event);
        EventResult::Ignored
    }

    /// Handle a pointer release
    fn handle_pointer_up(&mut self, event: &dyn PointerInput) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    /// Handle the pointer leaving the element
    fn handle_pointer_leave(&mut self) -> EventResult {
        EventResult::Ignored
    }

    /// Handle keyboard input event
    fn handle_key(&mut self, event: &dyn KeyInput) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    /// Check if this element currently has focus
    fn is_focused(&self) -> bool {
        false
    }

    /// Set focus state for this element
    fn set_focused(&mut self, focused: bool) {
        let _ = focused;
    }

    /// Check if the point (x, y) in viewport coordinates is inside this element
    fn contains_point(&self, x: f32, y: f32) -> bool {
        let _ = (x, y);
        false
    }
}
