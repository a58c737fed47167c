//! # Gem Crossing
//!
//! Entity update and collision core for a tile-crossing arcade game.
//! A player hops across a board of crawling bugs, picking up gems for
//! points and hearts for lives.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       GEM CROSSING                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Primitives                               │
//! │  ├── board.rs     - Board geometry and rule constants        │
//! │  ├── vec2.rs      - Board-space 2D vector                    │
//! │  ├── rng.rs       - Deterministic Xorshift128+ PRNG          │
//! │  └── hash.rs      - State hashing for replay checks          │
//! │                                                              │
//! │  game/            - Simulation (deterministic)               │
//! │  ├── character.rs - Shared capability + render contract      │
//! │  ├── collision.rs - Proximity test                           │
//! │  ├── enemy.rs     - Bugs                                     │
//! │  ├── collectable.rs - Gems and hearts                        │
//! │  ├── player.rs    - Player movement, lives, score            │
//! │  ├── input.rs     - Key mapping and input scripts            │
//! │  ├── world.rs     - Entity ownership                         │
//! │  ├── tick.rs      - Per-frame update order, replay           │
//! │  └── events.rs    - Game events                              │
//! │                                                              │
//! │  config.rs        - Headless driver settings                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Host Integration
//!
//! The host engine owns the frame loop. Each frame it forwards arrow key
//! presses, calls [`game::tick::tick`] (or [`game::world::World::update`])
//! with the elapsed seconds, then [`game::world::World::render`] with its
//! own [`game::character::Canvas`].
//!
//! ## Determinism
//!
//! All randomness comes from the world's seeded [`DeterministicRng`], so a
//! seed plus a recorded input script always reproduces the same game.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use core::rng::DeterministicRng;
pub use core::vec2::Vec2;
pub use game::input::{Direction, InputLog};
pub use game::world::World;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Nominal frame rate of the host engine (Hz)
pub const TICK_RATE: u32 = 60;
