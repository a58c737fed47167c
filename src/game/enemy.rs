//! Enemies
//!
//! Bugs crawl rightward along a lane at a per-instance speed and re-enter
//! from the left with a fresh speed once they leave the board.

use serde::{Serialize, Deserialize};

use crate::core::board::{
    frame_seconds, is_past_right_edge,
    ENEMY_RESPAWN_X, ENEMY_SPEED_MIN, ENEMY_SPEED_MAX,
};
use crate::core::rng::{DeterministicRng, random_speed};
use crate::core::vec2::Vec2;
use crate::game::character::{Character, Sprite};

/// A bug the player must avoid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Enemy {
    /// Current position
    pub position: Vec2,
    /// Horizontal speed in px/s (always positive)
    pub speed: f32,
    sprite: Sprite,
}

/// What an enemy did during one update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyMotion {
    /// Advanced along its lane.
    Advanced,
    /// Was off-board and re-entered on the left with a new speed.
    Wrapped,
}

impl Enemy {
    /// Create an enemy with a freshly drawn speed.
    pub fn new(position: Vec2, sprite: Sprite, rng: &mut DeterministicRng) -> Self {
        Self {
            position,
            speed: draw_speed(rng),
            sprite,
        }
    }

    /// Advance by `dt` seconds, or wrap if already past the right edge.
    ///
    /// A wrapping enemy does not move this frame.
    pub fn update(&mut self, dt: f32, rng: &mut DeterministicRng) -> EnemyMotion {
        if is_past_right_edge(self.position.x) {
            self.position.x = ENEMY_RESPAWN_X;
            self.speed = draw_speed(rng);
            EnemyMotion::Wrapped
        } else {
            self.position.x += self.speed * frame_seconds(dt);
            EnemyMotion::Advanced
        }
    }
}

fn draw_speed(rng: &mut DeterministicRng) -> f32 {
    random_speed(rng, ENEMY_SPEED_MIN, ENEMY_SPEED_MAX)
}

impl Character for Enemy {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::BOARD_WIDTH;
    use proptest::prelude::*;

    fn speed_in_range(speed: f32) -> bool {
        speed >= ENEMY_SPEED_MIN as f32 && speed < ENEMY_SPEED_MAX as f32
    }

    #[test]
    fn test_new_enemy_speed_in_range() {
        let mut rng = DeterministicRng::new(7);
        for _ in 0..100 {
            let enemy = Enemy::new(Vec2::new(-50.0, 60.0), Sprite::EnemyBug, &mut rng);
            assert!(speed_in_range(enemy.speed));
        }
    }

    #[test]
    fn test_enemy_advances() {
        let mut rng = DeterministicRng::new(7);
        let mut enemy = Enemy::new(Vec2::new(0.0, 140.0), Sprite::EnemyBug, &mut rng);
        enemy.speed = 200.0;

        assert_eq!(enemy.update(0.5, &mut rng), EnemyMotion::Advanced);
        assert_eq!(enemy.position, Vec2::new(100.0, 140.0));
    }

    #[test]
    fn test_enemy_at_edge_still_advances() {
        let mut rng = DeterministicRng::new(7);
        let mut enemy = Enemy::new(Vec2::new(BOARD_WIDTH, 60.0), Sprite::EnemyBug, &mut rng);
        enemy.speed = 100.0;

        assert_eq!(enemy.update(0.1, &mut rng), EnemyMotion::Advanced);
        assert_eq!(enemy.position.x, BOARD_WIDTH + 10.0);
    }

    #[test]
    fn test_enemy_wraps_with_new_speed() {
        let mut rng = DeterministicRng::new(7);
        let mut enemy = Enemy::new(Vec2::new(506.0, 220.0), Sprite::EnemyBug, &mut rng);

        assert_eq!(enemy.update(0.016, &mut rng), EnemyMotion::Wrapped);
        assert_eq!(enemy.position, Vec2::new(ENEMY_RESPAWN_X, 220.0));
        assert!(speed_in_range(enemy.speed));
    }

    #[test]
    fn test_negative_dt_does_not_move() {
        let mut rng = DeterministicRng::new(7);
        let mut enemy = Enemy::new(Vec2::new(10.0, 60.0), Sprite::EnemyBug, &mut rng);
        enemy.update(-1.0, &mut rng);
        assert_eq!(enemy.position.x, 10.0);
    }

    proptest! {
        #[test]
        fn prop_enemy_moves_by_speed_times_dt(
            seed in any::<u64>(),
            x in -50.0f32..505.0,
            dt in 0.0f32..0.1,
        ) {
            let mut rng = DeterministicRng::new(seed);
            let mut enemy = Enemy::new(Vec2::new(x, 60.0), Sprite::EnemyBug, &mut rng);
            let speed = enemy.speed;

            enemy.update(dt, &mut rng);

            prop_assert_eq!(enemy.position.x, x + speed * dt);
            prop_assert_eq!(enemy.speed, speed);
            prop_assert_eq!(enemy.position.y, 60.0);
        }

        #[test]
        fn prop_enemy_past_edge_wraps(seed in any::<u64>(), x in 505.5f32..5000.0, dt in 0.0f32..1.0) {
            let mut rng = DeterministicRng::new(seed);
            let mut enemy = Enemy::new(Vec2::new(x, 140.0), Sprite::EnemyBug, &mut rng);

            enemy.update(dt, &mut rng);

            prop_assert_eq!(enemy.position.x, ENEMY_RESPAWN_X);
            prop_assert!(speed_in_range(enemy.speed));
        }
    }
}
