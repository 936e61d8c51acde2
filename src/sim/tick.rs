//! Per-tick orchestration and the Playing/GameOver state machine

use log::info;

use super::ai::PaddlePolicy;
use super::physics;
use super::scoring;
use super::state::{GameEvent, GamePhase, GameState};

/// Normalized commands fed in by the input translator. All values are
/// pre-validated field coordinates; no device or OS details reach here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer y for the left paddle's center
    SetLeftPaddleTarget(f32),
    /// Restart the current match (no effect on the game-over screen)
    Reset,
    /// Game-over prompt answer: replay, or walk away
    ConfirmReplay(bool),
    /// Stop the run after this tick's command processing
    Quit,
}

/// What one tick hands back to the driver
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    /// Events emitted this tick, consumed after it completes (audio cues)
    pub events: Vec<GameEvent>,
    /// The run should stop; no further ticks
    pub quit: bool,
}

/// Advance the game by exactly one tick.
///
/// Pending commands are drained first, in order. A shutdown request skips
/// the simulation step for this tick. While `GameOver` only command
/// handling runs; the left paddle stays responsive there even though it has
/// nothing to hit. Timing is the caller's job: one invocation, one tick.
pub fn tick(state: &mut GameState, commands: &[Command], policy: &dyn PaddlePolicy) -> TickOutput {
    let mut out = TickOutput::default();

    for command in commands {
        match *command {
            Command::SetLeftPaddleTarget(target) => {
                state.left_paddle.track_target(target, &state.config);
            }
            Command::Reset => {
                if state.phase == GamePhase::Playing {
                    state.reset();
                    info!("match restarted");
                }
            }
            Command::ConfirmReplay(yes) => {
                if matches!(state.phase, GamePhase::GameOver { .. }) {
                    if yes {
                        state.reset();
                        info!("replay accepted, match restarted");
                    } else {
                        out.quit = true;
                    }
                }
            }
            Command::Quit => out.quit = true,
        }
    }

    if out.quit || state.phase != GamePhase::Playing {
        return out;
    }

    state.time_ticks += 1;

    state.right_paddle.y = policy.control(&state.right_paddle, &state.ball, &state.config);

    physics::advance(
        &mut state.ball,
        &state.left_paddle,
        &state.right_paddle,
        &state.config,
        &mut out.events,
    );

    let winner = scoring::evaluate(
        &mut state.ball,
        &mut state.score,
        &state.config,
        &mut state.rng,
        &mut out.events,
    );

    if let Some(winner) = winner {
        state.phase = GamePhase::GameOver { winner };
        info!(
            "game over: {winner:?} wins {}-{}",
            state.score.left, state.score.right
        );
    }

    out
}
