//! Command application and the per-frame simulation step

use serde::{Deserialize, Serialize};

use super::collision::resolve_landings;
use super::generator::needs_platform;
use super::physics::{integrate_player, scroll_platforms};
use super::state::{GameEvent, GameOverReason, GameState, Player, SessionPhase};
use crate::tuning::PlayArea;

/// Control commands written by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Begin the first run (and its first jump) from Idle
    Start,
    /// Jump input pressed
    JumpBegin,
    /// Jump input released
    JumpEnd,
    /// Abandon the current run and start a new one
    Restart,
}

/// Apply one command; commands outside their accepted state do nothing
pub fn apply_command(state: &mut GameState, command: Command) {
    match command {
        Command::Start => {
            if state.phase == SessionPhase::Idle {
                start_first_run(state);
            }
        }
        Command::JumpBegin => {
            // The held flag tracks the input itself, jump or not
            state.player.held = true;
            match state.phase {
                SessionPhase::Idle => start_first_run(state),
                SessionPhase::Running if state.player.grounded => {
                    state.player.begin_jump();
                    state.events.push(GameEvent::Jumped);
                }
                _ => {}
            }
        }
        Command::JumpEnd => state.player.held = false,
        Command::Restart => state.restart(),
    }
}

fn start_first_run(state: &mut GameState) {
    state.phase = SessionPhase::Running;
    state.player.begin_jump();
    state.events.push(GameEvent::Started);
    state.events.push(GameEvent::Jumped);
    log::info!("Run started (seed {})", state.seed);
}

/// Apply this frame's commands, then advance one step if the run is live
///
/// Returns whether a simulation step was taken.
pub fn tick(state: &mut GameState, commands: &[Command]) -> bool {
    for &command in commands {
        apply_command(state, command);
    }

    if state.phase != SessionPhase::Running {
        return false;
    }
    step(state);
    true
}

/// Advance a running session by one step
///
/// Order: player physics, world scroll, horizon generation, pruning,
/// landing resolution, termination.
pub fn step(state: &mut GameState) {
    if state.phase != SessionPhase::Running {
        return;
    }
    state.run_ticks += 1;
    let was_grounded = state.player.grounded;

    integrate_player(&mut state.player, &state.config.tuning);
    scroll_platforms(&mut state.platforms, state.scroll_speed);

    let horizon_open = state
        .trailing_platform()
        .is_none_or(|p| needs_platform(p.pos.x, &state.config.play_area));
    if horizon_open {
        state.append_platform();
    }
    state.platforms.retain(|p| !p.is_offscreen());

    let result = resolve_landings(
        &mut state.player,
        &mut state.platforms,
        state.config.tuning.landing_tolerance,
    );

    if let Some(platform_id) = result.landed_on {
        if !was_grounded {
            state.events.push(GameEvent::Landed { platform_id });
        }
    }
    for platform_id in result.newly_scored {
        state.score += 1;
        state.scroll_speed += state.config.tuning.scroll_speed_increment;
        state.events.push(GameEvent::Scored {
            platform_id,
            score: state.score,
        });
        log::debug!(
            "Scored platform {} (score {}, speed {:.3})",
            platform_id,
            state.score,
            state.scroll_speed
        );
    }

    let termination = check_termination(
        &state.player,
        &state.config.play_area,
        result.on_platform,
    );
    if let Some(reason) = termination {
        end_run(state, reason);
    }
}

/// Decide whether the run ends after this step's physics and landings
///
/// Leaving the world is checked first; the hazard band only ends the run
/// when no platform caught the player this step.
pub fn check_termination(
    player: &Player,
    area: &PlayArea,
    on_platform: bool,
) -> Option<GameOverReason> {
    if player.pos.y > area.height || player.pos.x < -player.size.x {
        Some(GameOverReason::FellOut)
    } else if player.bottom() > area.hazard_top() && !on_platform {
        Some(GameOverReason::Hazard)
    } else {
        None
    }
}

fn end_run(state: &mut GameState, reason: GameOverReason) {
    state.phase = SessionPhase::Over;
    state.game_over_reason = Some(reason);
    state.events.push(GameEvent::GameOver {
        score: state.score,
        reason,
    });
    log::info!(
        "Game over ({:?}) with score {} after {} steps",
        reason,
        state.score,
        state.run_ticks
    );
    state.commit_best_score();
}
