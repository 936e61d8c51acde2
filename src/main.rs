//! Headless autoplay driver
//!
//! Runs the simulation at a fixed 60 Hz and logs the emitted events until
//! one side wins. The left "pointer" tracks the ball with an oscillating
//! offset so the match stays imperfect enough to finish. A real front end
//! replaces this loop with its frame clock, feeds pointer input as
//! `SetLeftPaddleTarget`, and maps events to audio cues.
//!
//! Usage: `retro-pong [config.json]`, with an optional `SEED` env var for
//! reproducible runs.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};

use retro_pong::GameConfig;
use retro_pong::consts::TICK_DT;
use retro_pong::sim::{ChasePolicy, Command, GameEvent, GamePhase, GameState, tick};

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let seed = match std::env::var("SEED") {
        Ok(raw) => raw.parse().context("SEED must be a u64")?,
        Err(_) => rand::random(),
    };

    let mut state = GameState::new(config, seed)?;
    let policy = ChasePolicy;
    info!("starting match, seed {seed}");

    let tick_duration = Duration::from_secs_f32(TICK_DT);
    loop {
        let started = Instant::now();

        // Fake pointer: follow the ball with a slow sinusoidal drift. The
        // drift makes the left side miss now and then; a perfect tracker
        // against the chase policy would never concede a point.
        let ball_center = state.ball.pos.y + state.config.ball_radius;
        let drift = (state.time_ticks as f32 * 0.013).sin() * 90.0;
        let mut commands = vec![Command::SetLeftPaddleTarget(ball_center + drift)];
        if matches!(state.phase, GamePhase::GameOver { .. }) {
            // Single match per run; decline the replay prompt
            commands.push(Command::ConfirmReplay(false));
        }

        let out = tick(&mut state, &commands, &policy);
        for event in &out.events {
            match event {
                GameEvent::Bounce => debug!("bounce"),
                GameEvent::Score(side) => info!(
                    "point to {side:?} ({}-{})",
                    state.score.left, state.score.right
                ),
            }
        }
        if out.quit {
            break;
        }

        let elapsed = started.elapsed();
        if elapsed < tick_duration {
            std::thread::sleep(tick_duration - elapsed);
        }
    }

    let snapshot = state.snapshot();
    if let GamePhase::GameOver { winner } = snapshot.phase {
        info!(
            "final: {winner:?} wins {}-{}",
            snapshot.score.left, snapshot.score.right
        );
    }
    Ok(())
}

/// Optional JSON config overrides from the first argument
fn load_config() -> Result<GameConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(GameConfig::default());
    };
    let json =
        std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
    let config =
        serde_json::from_str(&json).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}
