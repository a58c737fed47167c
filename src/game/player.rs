//! Player
//!
//! The player hops one tile per key press, loses a life to bugs, scores
//! gems and the far shore, and picks up hearts for extra lives.

use serde::{Serialize, Deserialize};

use crate::core::board::{
    TILE_WIDTH, TILE_HEIGHT, SHORE_Y, PLAYER_START,
    PLAYER_MIN_X, PLAYER_MAX_X, PLAYER_MIN_Y, PLAYER_MAX_Y,
    PLAYER_ENEMY_REACH, PLAYER_GEM_REACH, PLAYER_LIFE_REACH,
};
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::character::{Character, Sprite};
use crate::game::collectable::Collectable;
use crate::game::collision::within_reach;
use crate::game::enemy::Enemy;
use crate::game::input::Direction;

/// The single player character.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Current position (snapped to tiles)
    pub position: Vec2,
    /// Remaining lives. Never goes below zero.
    pub lives: u32,
    /// Accumulated score. Never decreases.
    pub score: u32,
    sprite: Sprite,
}

/// What happened to the player during one update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    /// Lives lost to bugs
    pub enemy_hits: u32,
    /// Gems picked up, in pickup order
    pub gems_collected: Vec<GemPickup>,
    /// Whether the life item was picked up
    pub life_collected: bool,
    /// Whether the far shore was reached
    pub reached_shore: bool,
}

/// A gem picked up by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GemPickup {
    /// Index into the gem list
    pub index: usize,
    /// Score value awarded
    pub points: u32,
}

impl Player {
    /// Create a player at the start tile.
    pub fn new(sprite: Sprite, lives: u32) -> Self {
        Self {
            position: start_position(),
            lives,
            score: 0,
            sprite,
        }
    }

    /// Whether the player still has lives left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Hop one tile in `direction` if the destination stays on the board.
    ///
    /// Returns whether the player moved. `Direction::None` and blocked
    /// moves leave the player where it is.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        let Vec2 { x, y } = self.position;
        let target = match direction {
            Direction::Left if x - TILE_WIDTH > PLAYER_MIN_X => self.position.offset(-TILE_WIDTH, 0.0),
            Direction::Right if x + TILE_WIDTH < PLAYER_MAX_X => self.position.offset(TILE_WIDTH, 0.0),
            Direction::Up if y - TILE_HEIGHT > PLAYER_MIN_Y => self.position.offset(0.0, -TILE_HEIGHT),
            Direction::Down if y + TILE_HEIGHT < PLAYER_MAX_Y => self.position.offset(0.0, TILE_HEIGHT),
            _ => return false,
        };
        self.position = target;
        true
    }

    /// Return to the start tile.
    pub fn reset_to_start(&mut self) {
        self.position = start_position();
    }

    /// Lose a life and restart for every bug touching the player.
    ///
    /// Each bug is tested against the position left by the previous one.
    pub fn check_enemy_collisions(&mut self, enemies: &[Enemy]) -> u32 {
        let mut hits = 0;
        for enemy in enemies {
            if within_reach(self.position, enemy.position, PLAYER_ENEMY_REACH) {
                self.reset_to_start();
                self.lives = self.lives.saturating_sub(1);
                hits += 1;
            }
        }
        hits
    }

    /// Pick up every gem in reach, sending each back to spawn.
    ///
    /// Returns the gems collected.
    pub fn check_collection(&mut self, gems: &mut [Collectable], rng: &mut DeterministicRng) -> Vec<GemPickup> {
        let mut collected = Vec::new();
        for (index, gem) in gems.iter_mut().enumerate() {
            if within_reach(self.position, gem.position, PLAYER_GEM_REACH) {
                gem.reset_to_spawn(rng);
                let points = gem.score_value();
                self.score = self.score.saturating_add(points);
                collected.push(GemPickup { index, points });
            }
        }
        collected
    }

    /// Pick up the life item if it is in reach.
    pub fn check_life_item(&mut self, life_item: &mut Collectable, rng: &mut DeterministicRng) -> bool {
        if within_reach(self.position, life_item.position, PLAYER_LIFE_REACH) {
            life_item.reset_to_spawn(rng);
            self.lives = self.lives.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Run the per-frame checks: bugs, gems, life item, then the shore.
    ///
    /// Each check reads the position as left by the previous one.
    pub fn update(
        &mut self,
        enemies: &[Enemy],
        gems: &mut [Collectable],
        life_item: &mut Collectable,
        rng: &mut DeterministicRng,
    ) -> PlayerUpdate {
        let enemy_hits = self.check_enemy_collisions(enemies);
        let gems_collected = self.check_collection(gems, rng);
        let life_collected = self.check_life_item(life_item, rng);

        let reached_shore = self.position.y < SHORE_Y;
        if reached_shore {
            self.reset_to_start();
            self.score = self.score.saturating_add(1);
        }

        PlayerUpdate {
            enemy_hits,
            gems_collected,
            life_collected,
            reached_shore,
        }
    }
}

fn start_position() -> Vec2 {
    Vec2::new(PLAYER_START.0, PLAYER_START.1)
}

impl Character for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }
}

// =============================================================================
// TESTS
// =============================================================================
