//! Collectables (Gems and Hearts)
//!
//! Collectables drift rightward along one of the two upper lanes. Whenever
//! one is picked up, bumped by a bug, bumped by another collectable or
//! drifts off the board it goes back to its spawn point, which sits
//! `BOARD_WIDTH * interval_delay` pixels left of the board. A larger delay
//! means a longer trip back onto the board, so rarer items use larger
//! delays instead of a timer.

use serde::{Serialize, Deserialize};

use crate::core::board::{
    frame_seconds, is_past_right_edge,
    BOARD_WIDTH, LANES, COLLECTABLE_START_X,
    COLLECTABLE_ENEMY_REACH, COLLECTABLE_PEER_REACH,
};
use crate::core::rng::{DeterministicRng, random_speed};
use crate::core::vec2::Vec2;
use crate::game::character::{Character, Sprite};
use crate::game::collision::within_reach;
use crate::game::enemy::Enemy;

/// A gem (scores points) or heart (grants a life, scores nothing).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Collectable {
    /// Current position; `y` is always one of [`LANES`]
    pub position: Vec2,
    speed: f32,
    interval_delay: f32,
    score_value: u32,
    sprite: Sprite,
}

/// Counts of what happened to a collectable during one update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectableUpdate {
    /// Resets caused by bugs
    pub enemy_hits: u32,
    /// Peers touched, as positions in the peer sequence. Each touch reset
    /// both this collectable and that peer.
    pub peers_reset: Vec<usize>,
    /// Reset because it drifted past the right edge
    pub wrapped: bool,
}

impl Collectable {
    /// Create a collectable left of the board on a random lane.
    ///
    /// Speed is drawn once from `[min_speed, max_speed)` and kept for life.
    /// A negative or NaN `interval_delay` is treated as zero.
    pub fn new(
        sprite: Sprite,
        min_speed: u32,
        max_speed: u32,
        interval_delay: f32,
        score_value: u32,
        rng: &mut DeterministicRng,
    ) -> Self {
        Self {
            position: Vec2::new(COLLECTABLE_START_X, random_lane(rng)),
            speed: random_speed(rng, min_speed, max_speed),
            interval_delay: interval_delay.max(0.0),
            score_value,
            sprite,
        }
    }

    /// Horizontal speed in px/s.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Re-entry delay multiplier.
    pub fn interval_delay(&self) -> f32 {
        self.interval_delay
    }

    /// Points awarded on pickup.
    pub fn score_value(&self) -> u32 {
        self.score_value
    }

    /// x coordinate this collectable returns to on reset.
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        -BOARD_WIDTH * self.interval_delay
    }

    /// Send back to the spawn point on a freshly chosen lane.
    pub fn reset_to_spawn(&mut self, rng: &mut DeterministicRng) {
        self.position.y = random_lane(rng);
        self.position.x = self.spawn_x();
    }

    /// Reset once for every bug currently touching this collectable.
    ///
    /// Returns the number of resets.
    pub fn check_enemy_collisions(&mut self, enemies: &[Enemy], rng: &mut DeterministicRng) -> u32 {
        let mut hits = 0;
        for enemy in enemies {
            if within_reach(self.position, enemy.position, COLLECTABLE_ENEMY_REACH) {
                self.reset_to_spawn(rng);
                hits += 1;
            }
        }
        hits
    }

    /// Reset both this collectable and any peer it touches.
    ///
    /// `peers` never contains `self`. Each peer is tested against the current
    /// position, so a reset earlier in the loop affects later tests.
    /// Returns the positions (in `peers` order) of the peers that were reset.
    pub fn check_peer_collisions<'a, I>(&mut self, peers: I, rng: &mut DeterministicRng) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a mut Collectable>,
    {
        let mut reset = Vec::new();
        for (slot, other) in peers.into_iter().enumerate() {
            if within_reach(self.position, other.position, COLLECTABLE_PEER_REACH) {
                self.reset_to_spawn(rng);
                other.reset_to_spawn(rng);
                reset.push(slot);
            }
        }
        reset
    }

    /// Run one frame: collisions, then edge wrap, then movement.
    ///
    /// Movement always happens, so a collectable reset this frame ends at
    /// `spawn_x() + speed * dt`.
    pub fn update<'a, I>(
        &mut self,
        dt: f32,
        enemies: &[Enemy],
        peers: I,
        rng: &mut DeterministicRng,
    ) -> CollectableUpdate
    where
        I: IntoIterator<Item = &'a mut Collectable>,
    {
        let enemy_hits = self.check_enemy_collisions(enemies, rng);
        let peers_reset = self.check_peer_collisions(peers, rng);

        let wrapped = is_past_right_edge(self.position.x);
        if wrapped {
            self.reset_to_spawn(rng);
        }

        self.position.x += self.speed * frame_seconds(dt);

        CollectableUpdate {
            enemy_hits,
            peers_reset,
            wrapped,
        }
    }
}

fn random_lane(rng: &mut DeterministicRng) -> f32 {
    rng.choose(&LANES).copied().unwrap_or(LANES[0])
}

impl Character for Collectable {
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
    use proptest::prelude::*;

    fn gem(rng: &mut DeterministicRng, delay: f32) -> Collectable {
        Collectable::new(Sprite::GemBlue, 200, 300, delay, 5, rng)
    }

    fn enemy_at(x: f32, y: f32, rng: &mut DeterministicRng) -> Enemy {
        Enemy::new(Vec2::new(x, y), Sprite::EnemyBug, rng)
    }

    #[test]
    fn test_new_collectable() {
        let mut rng = DeterministicRng::new(11);
        let c = Collectable::new(Sprite::GemGreen, 300, 400, 7.5, 10, &mut rng);

        assert_eq!(c.position.x, COLLECTABLE_START_X);
        assert!(LANES.contains(&c.position.y));
        assert!(c.speed() >= 300.0 && c.speed() < 400.0);
        assert_eq!(c.score_value(), 10);
        assert_eq!(c.interval_delay(), 7.5);
    }

    #[test]
    fn test_negative_delay_clamped() {
        let mut rng = DeterministicRng::new(11);
        let c = gem(&mut rng, -3.0);
        assert_eq!(c.interval_delay(), 0.0);
    }

    #[test]
    fn test_reset_to_spawn() {
        let mut rng = DeterministicRng::new(11);
        let mut c = gem(&mut rng, 7.5);
        c.position = Vec2::new(250.0, 140.0);

        c.reset_to_spawn(&mut rng);

        assert_eq!(c.position.x, -505.0 * 7.5);
        assert!(LANES.contains(&c.position.y));
    }

    #[test]
    fn test_enemy_collision_resets() {
        let mut rng = DeterministicRng::new(11);
        let mut c = gem(&mut rng, 1.0);
        c.position = Vec2::new(100.0, 60.0);
        let enemies = [enemy_at(20.0, 60.0, &mut rng), enemy_at(100.0, 220.0, &mut rng)];

        let hits = c.check_enemy_collisions(&enemies, &mut rng);

        assert_eq!(hits, 1);
        assert_eq!(c.position.x, -505.0);
    }

    #[test]
    fn test_enemy_far_behind_is_ignored() {
        let mut rng = DeterministicRng::new(11);
        let mut c = gem(&mut rng, 1.0);
        c.position = Vec2::new(100.0, 60.0);
        let enemies = [enemy_at(-50.0, 60.0, &mut rng)];

        assert_eq!(c.check_enemy_collisions(&enemies, &mut rng), 0);
        assert_eq!(c.position, Vec2::new(100.0, 60.0));
    }

    #[test]
    fn test_peer_collision_resets_both() {
        let mut rng = DeterministicRng::new(11);
        let mut a = gem(&mut rng, 1.0);
        let mut b = Collectable::new(Sprite::GemOrange, 400, 500, 10.0, 20, &mut rng);
        a.position = Vec2::new(100.0, 60.0);
        b.position = Vec2::new(105.0, 60.0);

        let reset = a.check_peer_collisions([&mut b], &mut rng);

        assert_eq!(reset, vec![0]);
        assert_eq!(a.position.x, -505.0);
        assert_eq!(b.position.x, -5050.0);
        assert!(LANES.contains(&a.position.y));
        assert!(LANES.contains(&b.position.y));
    }

    #[test]
    fn test_peer_collision_reports_positions() {
        let mut rng = DeterministicRng::new(11);
        let mut a = gem(&mut rng, 1.0);
        let mut far = gem(&mut rng, 1.0);
        let mut near = gem(&mut rng, 1.0);
        a.position = Vec2::new(200.0, 140.0);
        far.position = Vec2::new(-900.0, 140.0);
        near.position = Vec2::new(150.0, 140.0);

        let reset = a.check_peer_collisions([&mut far, &mut near], &mut rng);

        assert_eq!(reset, vec![1]);
        assert_eq!(far.position, Vec2::new(-900.0, 140.0));
        assert_eq!(near.position.x, -505.0);
    }

    #[test]
    fn test_update_moves_after_reset() {
        let mut rng = DeterministicRng::new(11);
        let mut c = gem(&mut rng, 1.0);
        c.position = Vec2::new(600.0, 140.0);

        let outcome = c.update(0.5, &[], std::iter::empty(), &mut rng);

        assert!(outcome.wrapped);
        assert_eq!(outcome.enemy_hits, 0);
        assert_eq!(c.position.x, -505.0 + c.speed() * 0.5);
    }

    #[test]
    fn test_update_plain_motion() {
        let mut rng = DeterministicRng::new(11);
        let mut c = gem(&mut rng, 1.0);
        c.position = Vec2::new(0.0, 60.0);
        let speed = c.speed();

        let outcome = c.update(0.25, &[], std::iter::empty(), &mut rng);

        assert_eq!(outcome, CollectableUpdate::default());
        assert_eq!(c.position, Vec2::new(speed * 0.25, 60.0));
    }

    proptest! {
        #[test]
        fn prop_reset_lands_on_spawn(seed in any::<u64>(), delay in 0.0f32..20.0) {
            let mut rng = DeterministicRng::new(seed);
            let mut c = gem(&mut rng, delay);
            c.reset_to_spawn(&mut rng);
            prop_assert_eq!(c.position.x, -BOARD_WIDTH * delay);
            prop_assert!(LANES.contains(&c.position.y));
        }
    }
}
