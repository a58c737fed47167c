//! Collision Detection
//!
//! Proximity test shared by every entity pair on the board.
//! Two entities touch when they are closer than the pair's reach on
//! both axes. The test is symmetric: swapping the arguments never
//! changes the result, and a large separation in either direction is
//! never a hit.

use crate::core::vec2::Vec2;

/// Per-axis reach `(x, y)` for a pair of entity kinds.
pub type Reach = (f32, f32);

/// Check whether two positions are within `reach` of each other.
///
/// Both bounds are strict: a separation exactly equal to the reach is a miss.
#[inline]
pub fn within_reach(a: Vec2, b: Vec2, reach: Reach) -> bool {
    let (dx, dy) = a.abs_delta(b);
    dx < reach.0 && dy < reach.1
}
