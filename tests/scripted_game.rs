//! Full games driven through the public API with recorded input scripts.

use gem_crossing::core::rng::DeterministicRng;
use gem_crossing::game::character::{RecordingCanvas, Sprite};
use gem_crossing::game::collectable::Collectable;
use gem_crossing::game::enemy::Enemy;
use gem_crossing::game::events::GameEventData;
use gem_crossing::game::input::{Direction, InputEvent, InputLog};
use gem_crossing::game::player::Player;
use gem_crossing::game::tick::{replay, tick};
use gem_crossing::{Vec2, World, TICK_RATE};

const DT: f32 = 1.0 / TICK_RATE as f32;

/// Board with the given bugs and every collectable parked far to the left.
fn parked_world(enemies: Vec<Enemy>, lives: u32) -> World {
    let mut rng = DeterministicRng::new(42);
    let mut gem = Collectable::new(Sprite::GemBlue, 200, 300, 1.0, 5, &mut rng);
    gem.position = Vec2::new(-5000.0, 60.0);
    let mut heart = Collectable::new(Sprite::Heart, 300, 400, 4.0, 0, &mut rng);
    heart.position = Vec2::new(-9000.0, 140.0);
    World::with_entities(42, enemies, vec![gem], heart, Player::new(Sprite::CharBoy, lives))
}

fn run_script(world: &mut World, log: &InputLog, frames: u32) -> Vec<GameEventData> {
    let mut seen = Vec::new();
    for _ in 0..frames {
        let presses: Vec<Direction> = log.inputs_at(world.frame).collect();
        let result = tick(world, DT, &presses);
        seen.extend(result.events.into_iter().map(|e| e.data));
    }
    seen
}

#[test]
fn test_crossing_scores_and_restarts() {
    let mut world = parked_world(Vec::new(), 1);
    let mut log = InputLog::new();
    for frame in [2, 4, 6, 8] {
        log.record(frame, Direction::Up);
    }

    let events = run_script(&mut world, &log, 10);

    assert_eq!(world.player.score, 1);
    assert_eq!(world.player.position, Vec2::new(203.0, 300.0));
    assert!(events.contains(&GameEventData::ShoreReached { new_score: 1 }));
}

#[test]
fn test_bug_ends_single_life_game() {
    let mut rng = DeterministicRng::new(3);
    let mut bug = Enemy::new(Vec2::new(203.0, 300.0), Sprite::EnemyBug, &mut rng);
    bug.speed = 0.0;
    let mut world = parked_world(vec![bug], 1);

    let result = tick(&mut world, DT, &[]);

    assert!(result.game_over);
    assert_eq!(world.player.lives, 0);
    let kinds: Vec<_> = result.events.iter().map(|e| e.data.clone()).collect();
    assert!(kinds.contains(&GameEventData::PlayerHit { lives_left: 0 }));
    assert!(kinds.contains(&GameEventData::OutOfLives { final_score: 0 }));

    // Presses after game over are dropped
    let before = world.player.position;
    tick(&mut world, DT, &[Direction::Left, Direction::Up]);
    assert_eq!(world.player.position, before);
    assert_eq!(world.player.lives, 0);
}

#[test]
fn test_replay_matches_live_run() {
    let script = r#"[
        { "frame": 5, "direction": "up" },
        { "frame": 40, "direction": "left" },
        { "frame": 90, "direction": "up" },
        { "frame": 150, "direction": "right" },
        { "frame": 200, "direction": "down" }
    ]"#;
    let events: Vec<InputEvent> = serde_json::from_str(script).unwrap();
    let log = InputLog::from_events(events);

    let mut live = World::new(2024, 3);
    let mut canvas = RecordingCanvas::new();
    for _ in 0..300 {
        let presses: Vec<Direction> = log.inputs_at(live.frame).collect();
        let result = tick(&mut live, DT, &presses);
        live.render(&mut canvas);
        if result.game_over {
            break;
        }
    }

    let (replayed, _) = replay(2024, 3, &log, live.frame, DT);
    assert_eq!(replayed.frame, live.frame);
    assert_eq!(replayed.compute_hash(), live.compute_hash());
}

#[test]
fn test_replay_is_repeatable() {
    let mut log = InputLog::new();
    for frame in (0..600).step_by(30) {
        log.record(frame, if frame % 60 == 0 { Direction::Up } else { Direction::Right });
    }

    let (a, events_a) = replay(99, 2, &log, 600, DT);
    let (b, events_b) = replay(99, 2, &log, 600, DT);

    assert_eq!(a.compute_hash(), b.compute_hash());
    assert_eq!(events_a, events_b);
    assert!(events_a.iter().all(|e| e.frame < 600));
}

#[test]
fn test_entities_stay_in_bounds_over_long_run() {
    let mut world = World::new(7, 1);
    for _ in 0..(TICK_RATE * 120) {
        world.update(DT);
        for enemy in &world.enemies {
            assert!(enemy.position.x >= -50.0 && enemy.position.x <= 505.0 + 240.0 * DT + 1.0);
        }
        for gem in world.gems.iter().chain(std::iter::once(&world.life_item)) {
            assert!(gem.position.x <= 505.0 + 500.0 * DT + 1.0);
        }
    }
    assert_eq!(world.frame, TICK_RATE * 120);
}
