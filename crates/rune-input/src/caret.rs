/// Default seconds between caret visibility toggles.
pub const DEFAULT_BLINK_INTERVAL: f32 = 0.53;

/// Caret blink state for editable controls.
///
/// Controls should:
/// - call `set_focused` when focus changes
/// - call `tick` each frame with `delta_time`
/// - call `reset_manual` after edits (typing, cursor moves)
///
/// The timer counts down; each time it reaches zero the caret toggles and
/// the countdown restarts from the full interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretBlink {
    pub visible: bool,
    /// Seconds left until the next toggle.
    remaining: f32,
    blink_interval: f32,
    focused: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(false)
    }
}

impl CaretBlink {
    /// Create a new caret blink state.
    pub fn new(initial_focused: bool) -> Self {
        Self::with_interval(DEFAULT_BLINK_INTERVAL, initial_focused)
    }

    pub fn with_interval(interval: f32, initial_focused: bool) -> Self {
        let blink_interval = interval.max(0.1);
        Self {
            visible: initial_focused,
            remaining: blink_interval,
            blink_interval,
            focused: initial_focused,
        }
    }

    pub fn blink_interval(&self) -> f32 {
        self.blink_interval
    }

    /// Seconds until the next toggle.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Apply a focus transition.
    ///
    /// Gaining focus shows the caret, losing it hides the caret; both
    /// restart the countdown.
    pub fn set_focused(&mut self, focused: bool) {
        if focused == self.focused {
            return;
        }
        self.focused = focused;
        self.visible = focused;
        self.remaining = self.blink_interval;
    }

    /// Advance the countdown by `delta_time` seconds. Does nothing while
    /// unfocused.
    pub fn tick(&mut self, delta_time: f32) {
        if !self.focused {
            return;
        }
        self.remaining -= delta_time;
        if self.remaining <= 0.0 {
            self.visible = !self.visible;
            self.remaining = self.blink_interval;
        }
    }

    /// Make caret visible and reset blink phase (call after edits).
    pub fn reset_manual(&mut self) {
        self.visible = true;
        self.remaining = self.blink_interval;
    }
}
