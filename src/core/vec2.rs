//! Board-Space 2D Vector
//!
//! Positions on the board are measured in pixels, with x growing to the
//! right and y growing downward (the far shore is at the top).

use std::fmt;
use serde::{Serialize, Deserialize};

/// 2D vector in board pixel space.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal coordinate (pixels, right is positive)
    pub x: f32,
    /// Vertical coordinate (pixels, down is positive)
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offsets.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Per-axis absolute separation from another point.
    #[inline]
    pub fn abs_delta(self, other: Self) -> (f32, f32) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_offset() {
        let start = Vec2::new(203.0, 300.0);
        assert_eq!(start.offset(-101.0, 0.0), Vec2::new(102.0, 300.0));
        assert_eq!(start.offset(0.0, -80.0), Vec2::new(203.0, 220.0));
    }

    #[test]
    fn test_abs_delta_is_symmetric() {
        let a = Vec2::new(100.0, 60.0);
        let b = Vec2::new(-400.0, 140.0);
        assert_eq!(a.abs_delta(b), (500.0, 80.0));
        assert_eq!(b.abs_delta(a), (500.0, 80.0));
    }

    #[test]
    fn test_vec2_display() {
        assert_eq!(Vec2::new(203.0, 300.0).to_string(), "(203.0, 300.0)");
    }
}
