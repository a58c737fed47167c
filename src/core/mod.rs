//! Core primitives.
//!
//! Board geometry constants, the board-space vector, the seeded RNG and
//! state hashing. Nothing here knows about individual entity kinds.

pub mod board;
pub mod vec2;
pub mod rng;
pub mod hash;

// Re-export core types
pub use board::{BOARD_WIDTH, TILE_WIDTH, TILE_HEIGHT, LANES};
pub use vec2::Vec2;
pub use rng::{DeterministicRng, random_speed};
pub use hash::{compute_state_hash, StateHash, StateHasher};
