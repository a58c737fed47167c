//! Gem Crossing Simulator
//!
//! Headless driver: builds the standard board, plays an optional recorded
//! input script frame by frame and reports the outcome.
//!
//! Usage: `gem-crossing-sim [config.json]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gem_crossing::{
    VERSION, TICK_RATE,
    config::SimConfig,
    game::{
        character::RecordingCanvas,
        events::GameEventData,
        input::Direction,
        tick::{tick, replay},
        world::World,
    },
};

fn main() -> Result<()> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SimConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Gem Crossing v{}", VERSION);
    info!("Frame Rate: {} Hz, dt {:.4}s", TICK_RATE, config.frame_dt);
    if config.input_script.is_none() {
        warn!("No input script configured, the player will stand still");
    }

    run(&config)
}

fn run(config: &SimConfig) -> Result<()> {
    let inputs = config
        .load_input_script()
        .context("loading input script")?;

    info!("=== Starting Run ===");
    info!("RNG Seed: {}", config.seed);
    info!("Scripted presses: {}", inputs.len());
    if let Some(last) = inputs.last_frame() {
        if last >= config.frames {
            warn!(
                "Input script runs to frame {}, past the last simulated frame {}",
                last,
                config.frames.saturating_sub(1)
            );
        }
    }

    let mut world = World::new(config.seed, config.starting_lives);
    let mut canvas = RecordingCanvas::new();
    let mut total_events = 0;

    for _ in 0..config.frames {
        let presses: Vec<Direction> = inputs.inputs_at(world.frame).collect();
        let result = tick(&mut world, config.frame_dt, &presses);
        total_events += result.events.len();

        // Stand-in for the host's draw step
        world.render(&mut canvas);
        canvas.take_calls();

        for event in &result.events {
            if let GameEventData::ShoreReached { new_score } = event.data {
                info!("Frame {}: crossed, score {}", event.frame, new_score);
            }
        }

        if config.report_interval > 0 && world.frame % config.report_interval == 0 {
            info!(
                "Frame {}: lives {}, score {}, {} events so far",
                world.frame, world.player.lives, world.player.score, total_events
            );
        }

        if result.game_over {
            info!("Game over at frame {}", world.frame);
            break;
        }
    }

    info!("=== Run Results ===");
    info!("Score: {}, Lives: {}", world.player.score, world.player.lives);
    let hash = world.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));
    info!("Total events: {}", total_events);

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay(
        config.seed,
        config.starting_lives,
        &inputs,
        world.frame,
        config.frame_dt,
    );
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash == replay_hash {
        info!("DETERMINISM VERIFIED: Hashes match!");
        Ok(())
    } else {
        anyhow::bail!("replay diverged from the live run")
    }
}
