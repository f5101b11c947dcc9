use serde::{Deserialize, Serialize};

/// Rectangular extent of the arena or of a fish footprint, in board units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
    }
}

/// Center of a fish on the board. Assigned once at spawn and never mutated;
/// a fish that needs a new location is replaced, not moved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
