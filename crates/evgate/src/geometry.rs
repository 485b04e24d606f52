//! Geometry
//!
//! Bounding rects as returned by `getBoundingClientRect`, and the
//! viewport to target coordinate conversion.

/// Target rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a viewport point is inside
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Convert a viewport point to coordinates relative to this rect.
    ///
    /// Points outside the rect yield negative or out-of-range values; they
    /// are not clamped.
    pub fn relative(&self, client_x: f64, client_y: f64) -> (f32, f32) {
        ((client_x - self.left()) as f32, (client_y - self.top()) as f32)
    }
}
