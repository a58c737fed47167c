//! Game Logic Module
//!
//! All per-frame simulation code. Deterministic for a given seed and
//! input script.
//!
//! ## Module Structure
//!
//! - `character`: Shared position/sprite capability and the render contract
//! - `collision`: Proximity test shared by every entity pair
//! - `enemy`: Bugs that wrap around the board
//! - `collectable`: Gems and hearts with delayed re-entry
//! - `player`: Tile movement, pickups, lives and score
//! - `input`: Key mapping and recorded input scripts
//! - `world`: Owner of all entities and the RNG
//! - `tick`: Per-frame update order and replay
//! - `events`: Game events for logging and verification

pub mod character;
pub mod collision;
pub mod enemy;
pub mod collectable;
pub mod player;
pub mod input;
pub mod world;
pub mod tick;
pub mod events;

// Re-export key types
pub use character::{Canvas, Character, DrawCall, RecordingCanvas, Sprite};
pub use collectable::Collectable;
pub use enemy::Enemy;
pub use events::{GameEvent, GameEventData};
pub use input::{Direction, InputLog};
pub use player::Player;
pub use tick::{tick, replay, TickResult};
pub use world::World;
