//! Frame Simulation Tick
//!
//! The per-frame step the host engine drives. Order within a tick is fixed:
//!
//! 1. Apply key presses (only while the player has lives)
//! 2. Update bugs
//! 3. Update gems, in list order
//! 4. Update the life item
//! 5. Update the player (bugs, gems, life item, shore)
//!
//! Everything is sequential; a later step always sees the effects of an
//! earlier one.

use tracing::{debug, info};
#[cfg(feature = "debug-tracing")]
use tracing::trace;

use crate::game::collectable::CollectableUpdate;
use crate::game::enemy::EnemyMotion;
use crate::game::events::{GameEvent, ItemRef, RespawnCause};
use crate::game::input::{Direction, InputLog};
use crate::game::world::World;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Whether the player is out of lives after this tick
    pub game_over: bool,
}

/// Run one frame.
///
/// # Arguments
///
/// * `world` - The world (will be mutated)
/// * `dt` - Elapsed seconds since the previous frame; negative or
///   non-finite values count as zero
/// * `inputs` - Key presses delivered since the previous frame, in order
pub fn tick(world: &mut World, dt: f32, inputs: &[Direction]) -> TickResult {
    // 1. Apply player inputs
    for &direction in inputs {
        world.handle_input(direction);
    }

    // 2. Bugs
    update_enemies(world, dt);

    // 3-4. Gems, then the life item
    update_collectables(world, dt);

    // 5. Player
    update_player(world);

    #[cfg(feature = "debug-tracing")]
    trace_positions(world);

    world.frame += 1;

    TickResult {
        events: world.take_events(),
        game_over: world.is_over(),
    }
}

/// Advance every bug.
fn update_enemies(world: &mut World, dt: f32) {
    let frame = world.frame;
    let mut wrapped = Vec::new();

    for (index, enemy) in world.enemies.iter_mut().enumerate() {
        if enemy.update(dt, &mut world.rng) == EnemyMotion::Wrapped {
            debug!("Enemy {} wrapped, new speed {}", index, enemy.speed);
            wrapped.push(GameEvent::enemy_wrapped(frame, index, enemy.speed));
        }
    }

    for event in wrapped {
        world.push_event(event);
    }
}

/// Advance every gem against the other gems, then the life item against
/// all gems.
fn update_collectables(world: &mut World, dt: f32) {
    let frame = world.frame;
    let mut respawns = Vec::new();

    for index in 0..world.gems.len() {
        let (before, rest) = world.gems.split_at_mut(index);
        if let Some((gem, after)) = rest.split_first_mut() {
            let peers = before.iter_mut().chain(after.iter_mut());
            let outcome = gem.update(dt, &world.enemies, peers, &mut world.rng);
            // Peer slots skip the gem being updated
            let peer_gem = |slot: usize| ItemRef::Gem(if slot < index { slot } else { slot + 1 });
            collect_respawns(&mut respawns, ItemRef::Gem(index), &outcome, peer_gem);
        }
    }

    let outcome = world
        .life_item
        .update(dt, &world.enemies, world.gems.iter_mut(), &mut world.rng);
    collect_respawns(&mut respawns, ItemRef::LifeItem, &outcome, ItemRef::Gem);

    for (item, cause) in respawns {
        debug!("Collectable {:?} respawned ({:?})", item, cause);
        world.push_event(GameEvent::collectable_respawned(frame, item, cause));
    }
}

/// Append the respawns of one collectable update: the updated item's own
/// causes first, then every peer it knocked back.
fn collect_respawns(
    out: &mut Vec<(ItemRef, RespawnCause)>,
    item: ItemRef,
    outcome: &CollectableUpdate,
    peer_item: impl Fn(usize) -> ItemRef,
) {
    let own = [
        (outcome.enemy_hits > 0, RespawnCause::Enemy),
        (!outcome.peers_reset.is_empty(), RespawnCause::Peer),
        (outcome.wrapped, RespawnCause::OffBoard),
    ];
    out.extend(own.into_iter().filter_map(|(hit, cause)| hit.then_some((item, cause))));
    out.extend(outcome.peers_reset.iter().map(|&slot| (peer_item(slot), RespawnCause::Peer)));
}

/// Run the player's checks and turn the outcome into events.
fn update_player(world: &mut World) {
    let frame = world.frame;
    let lives_before = world.player.lives;
    let score_before = world.player.score;

    let outcome = world.player.update(
        &world.enemies,
        &mut world.gems,
        &mut world.life_item,
        &mut world.rng,
    );

    let mut lives = lives_before;
    for _ in 0..outcome.enemy_hits {
        lives = lives.saturating_sub(1);
        info!("Player hit by a bug, {} lives left", lives);
        world.push_event(GameEvent::player_hit(frame, lives));
    }

    let mut score = score_before;
    for pickup in &outcome.gems_collected {
        score = score.saturating_add(pickup.points);
        debug!("Gem {} worth {} collected, score {}", pickup.index, pickup.points, score);
        world.push_event(GameEvent::collectable_respawned(frame, ItemRef::Gem(pickup.index), RespawnCause::Collected));
        world.push_event(GameEvent::gem_collected(frame, pickup.points, score));
    }

    if outcome.life_collected {
        lives = lives.saturating_add(1);
        info!("Heart collected, {} lives", lives);
        world.push_event(GameEvent::collectable_respawned(frame, ItemRef::LifeItem, RespawnCause::Collected));
        world.push_event(GameEvent::life_collected(frame, lives));
    }

    if outcome.reached_shore {
        info!("Far shore reached, score {}", world.player.score);
        world.push_event(GameEvent::shore_reached(frame, world.player.score));
    }

    if lives_before > 0 && !world.player.is_alive() {
        info!("Out of lives, final score {}", world.player.score);
        world.push_event(GameEvent::out_of_lives(frame, world.player.score));
    }
}

#[cfg(feature = "debug-tracing")]
fn trace_positions(world: &World) {
    for (i, enemy) in world.enemies.iter().enumerate() {
        trace!(frame = world.frame, "enemy {} at {}", i, enemy.position);
    }
    for (i, gem) in world.gems.iter().enumerate() {
        trace!(frame = world.frame, "gem {} at {}", i, gem.position);
    }
    trace!(frame = world.frame, "life item at {}", world.life_item.position);
    trace!(frame = world.frame, "player at {}", world.player.position);
}

/// Replay a recorded game from its seed.
///
/// Builds the standard world and runs `frame_count` frames of `dt`
/// seconds, feeding each frame the presses recorded for it. Stops early
/// once the player is out of lives. Returns the final world and every
/// event generated.
pub fn replay(
    rng_seed: u64,
    starting_lives: u32,
    inputs: &InputLog,
    frame_count: u32,
    dt: f32,
) -> (World, Vec<GameEvent>) {
    let mut world = World::new(rng_seed, starting_lives);
    let mut all_events = Vec::new();

    for _ in 0..frame_count {
        let presses: Vec<Direction> = inputs.inputs_at(world.frame).collect();
        let result = tick(&mut world, dt, &presses);
        all_events.extend(result.events);

        if result.game_over {
            break;
        }
    }

    (world, all_events)
}
