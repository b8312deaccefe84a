/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if a point is within this rectangle (right/bottom exclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by per-side insets, never producing a negative size.
    pub fn deflate(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            w: (self.w - left - right).max(0.0),
            h: (self.h - top - bottom).max(0.0),
        }
    }

    /// Horizontal intersection with `[left, right)`, or `None` when empty.
    pub fn clip_horizontal(&self, left: f32, right: f32) -> Option<Self> {
        let clipped_left = self.x.max(left);
        let clipped_right = self.right().min(right);
        if clipped_right <= clipped_left {
            return None;
        }
        Some(Self {
            x: clipped_left,
            w: clipped_right - clipped_left,
            ..*self
        })
    }
}
