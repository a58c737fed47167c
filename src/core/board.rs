//! Board Geometry and Game Constants
//!
//! ```text
//! ┌──────────────────── 505 px ────────────────────┐
//! │  water (y < 60)                  far shore     │
//! │  lane y = 60   ──►  bugs / gems / heart         │
//! │  lane y = 140  ──►  bugs / gems / heart         │
//! │  lane y = 220  ──►  bugs                        │
//! │  grass         player starts at (203, 300)      │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! Entities enter from the left (negative x) and travel right.
//! Game rules are fixed; nothing in here is meant to be tuned at runtime.

// =============================================================================
// BOARD
// =============================================================================

/// Full board width in pixels. Entities past this x are off-board.
pub const BOARD_WIDTH: f32 = 505.0;

/// Horizontal player step (one tile).
pub const TILE_WIDTH: f32 = 101.0;

/// Vertical player step (one tile).
pub const TILE_HEIGHT: f32 = 80.0;

/// Lanes collectables travel along.
pub const LANES: [f32; 2] = [60.0, 140.0];

/// A player above this y has reached the far shore.
pub const SHORE_Y: f32 = 60.0;

// =============================================================================
// PLAYER MOVEMENT BOUNDS
// =============================================================================

/// Player start tile.
pub const PLAYER_START: (f32, f32) = (203.0, 300.0);

/// A left step is allowed while `x - TILE_WIDTH` stays above this.
pub const PLAYER_MIN_X: f32 = 0.0;

/// A right step is allowed while `x + TILE_WIDTH` stays below this.
pub const PLAYER_MAX_X: f32 = 500.0;

/// An up step is allowed while `y - TILE_HEIGHT` stays above this.
pub const PLAYER_MIN_Y: f32 = -21.0;

/// A down step is allowed while `y + TILE_HEIGHT` stays below this.
pub const PLAYER_MAX_Y: f32 = 410.0;

// =============================================================================
// ENTITY SPAWNING
// =============================================================================

/// Enemy re-entry x after leaving the board.
pub const ENEMY_RESPAWN_X: f32 = -50.0;

/// Enemy speed range in px/s (half-open).
pub const ENEMY_SPEED_MIN: u32 = 100;
/// Upper bound (exclusive) of the enemy speed range.
pub const ENEMY_SPEED_MAX: u32 = 240;

/// Collectable x at construction, before the first reset.
pub const COLLECTABLE_START_X: f32 = -150.0;

// =============================================================================
// COLLISION REACH (half-extents of the overlap box per pair)
// =============================================================================

/// Player vs enemy.
pub const PLAYER_ENEMY_REACH: (f32, f32) = (70.0, 50.0);

/// Player vs gem.
pub const PLAYER_GEM_REACH: (f32, f32) = (50.0, 50.0);

/// Player vs life item. Narrow on x so the heart must be met head-on.
pub const PLAYER_LIFE_REACH: (f32, f32) = (10.0, 50.0);

/// Collectable vs enemy.
pub const COLLECTABLE_ENEMY_REACH: (f32, f32) = (85.0, 50.0);

/// Collectable vs collectable.
pub const COLLECTABLE_PEER_REACH: (f32, f32) = (90.0, 50.0);

// =============================================================================
// HELPERS
// =============================================================================

/// Elapsed frame time, with negative or non-finite values treated as zero.
#[inline]
pub fn frame_seconds(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Whether an x coordinate is past the right edge of the board.
#[inline]
pub fn is_past_right_edge(x: f32) -> bool {
    x > BOARD_WIDTH
}
