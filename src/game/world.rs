//! World State
//!
//! Owns every entity on the board plus the seeded RNG. Created once at
//! startup; entities are never added or removed afterwards, only mutated
//! in place by [`crate::game::tick::tick`].

use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::core::hash::{StateHash, StateHasher, compute_state_hash};
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::character::{Canvas, Character, Sprite};
use crate::game::collectable::Collectable;
use crate::game::enemy::Enemy;
use crate::game::events::GameEvent;
use crate::game::input::Direction;
use crate::game::player::Player;
use crate::game::tick::{tick, TickResult};

/// Lives the player starts with in the standard roster.
pub const DEFAULT_STARTING_LIVES: u32 = 1;

/// Bug lanes, bottom to top.
const ENEMY_LANES: [f32; 3] = [220.0, 140.0, 60.0];

/// Bug entry x at startup.
const ENEMY_START_X: f32 = -50.0;

/// Gem roster: (sprite, min speed, max speed, interval delay, score value).
/// Rarer gems travel further back before re-entering.
const GEM_ROSTER: [(Sprite, u32, u32, f32, u32); 3] = [
    (Sprite::GemBlue, 200, 300, 1.0, 5),
    (Sprite::GemGreen, 300, 400, 7.5, 10),
    (Sprite::GemOrange, 400, 500, 10.0, 20),
];

/// Life item: (min speed, max speed, interval delay).
const LIFE_ITEM: (u32, u32, f32) = (300, 400, 4.0);

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    /// Frame about to be simulated (starts at 0)
    pub frame: u32,

    /// RNG seed (for verification)
    pub rng_seed: u64,

    /// Deterministic RNG state
    #[serde(skip)]
    pub rng: DeterministicRng,

    /// All bugs, in update order
    pub enemies: Vec<Enemy>,

    /// All gems, in update order. The life item is not in here.
    pub gems: Vec<Collectable>,

    /// The single heart
    pub life_item: Collectable,

    /// The single player
    pub player: Player,

    /// Events generated this tick (cleared each tick)
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
}

impl World {
    /// Create the standard board: three bugs, three gems, one heart.
    pub fn new(rng_seed: u64, starting_lives: u32) -> Self {
        let mut rng = DeterministicRng::new(rng_seed);

        let enemies = ENEMY_LANES
            .iter()
            .map(|&y| Enemy::new(Vec2::new(ENEMY_START_X, y), Sprite::EnemyBug, &mut rng))
            .collect();

        let gems = GEM_ROSTER
            .iter()
            .map(|&(sprite, min, max, delay, value)| {
                Collectable::new(sprite, min, max, delay, value, &mut rng)
            })
            .collect();

        let (min, max, delay) = LIFE_ITEM;
        let life_item = Collectable::new(Sprite::Heart, min, max, delay, 0, &mut rng);

        let player = Player::new(Sprite::CharBoy, starting_lives);

        info!(
            "World created: seed {}, {} lives, {} enemies, {} gems",
            rng_seed, starting_lives, ENEMY_LANES.len(), GEM_ROSTER.len()
        );

        Self::with_rng(rng_seed, rng, enemies, gems, life_item, player)
    }

    /// Create a world from explicit entities.
    pub fn with_entities(
        rng_seed: u64,
        enemies: Vec<Enemy>,
        gems: Vec<Collectable>,
        life_item: Collectable,
        player: Player,
    ) -> Self {
        Self::with_rng(rng_seed, DeterministicRng::new(rng_seed), enemies, gems, life_item, player)
    }

    fn with_rng(
        rng_seed: u64,
        rng: DeterministicRng,
        enemies: Vec<Enemy>,
        gems: Vec<Collectable>,
        life_item: Collectable,
        player: Player,
    ) -> Self {
        Self {
            frame: 0,
            rng_seed,
            rng,
            enemies,
            gems,
            life_item,
            player,
            pending_events: Vec::new(),
        }
    }

    /// Forward a key press to the player while it still has lives.
    ///
    /// Returns whether the player moved.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        if !self.player.is_alive() {
            debug!("Input {:?} ignored: no lives left", direction);
            return false;
        }
        self.player.handle_input(direction)
    }

    /// Forward a raw key code. Non-arrow keys are dropped.
    pub fn handle_key(&mut self, key_code: u32) -> bool {
        match Direction::from_key_code(key_code) {
            Some(direction) => self.handle_input(direction),
            None => false,
        }
    }

    /// Advance one frame without input.
    pub fn update(&mut self, dt: f32) -> TickResult {
        tick(self, dt, &[])
    }

    /// Draw every entity: gems, heart, bugs, then the player on top.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        for gem in &self.gems {
            gem.render(canvas);
        }
        self.life_item.render(canvas);
        for enemy in &self.enemies {
            enemy.render(canvas);
        }
        self.player.render(canvas);
    }

    /// Whether the player is out of lives.
    pub fn is_over(&self) -> bool {
        !self.player.is_alive()
    }

    /// Compute hash of current state for verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.frame, self.rng_seed, |hasher| {
            for enemy in &self.enemies {
                hasher.update_vec2(enemy.position);
                hasher.update_f32(enemy.speed);
            }

            for gem in &self.gems {
                hash_collectable(hasher, gem);
            }
            hash_collectable(hasher, &self.life_item);

            hasher.update_vec2(self.player.position);
            hasher.update_u32(self.player.lives);
            hasher.update_u32(self.player.score);

            let [s0, s1] = self.rng.state();
            hasher.update_u64(s0);
            hasher.update_u64(s1);
        })
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

fn hash_collectable(hasher: &mut StateHasher, item: &Collectable) {
    hasher.update_vec2(item.position);
    hasher.update_f32(item.speed());
    hasher.update_f32(item.interval_delay());
    hasher.update_u32(item.score_value());
    hasher.update_str(item.sprite().asset_id());
}

// =============================================================================
// TESTS
// =============================================================================
