//! Demo driver that plays the game by issuing commands
//!
//! Used by the headless native runner. It only ever looks at the same state a
//! renderer sees and only acts through [`Command`]s, like a human would.

use crate::input::Command;
use crate::sim::{GameState, Platform, Player, SessionPhase};

/// Frames the opening jump is held from the spawn point
const OPENING_HOLD_FRAMES: u32 = 6;
/// Extra height to clear above the target platform's top
const CLEARANCE: f32 = 12.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Jump once the next platform's leading edge is this close
    pub lead: f32,
    /// Start a new run after a game over
    pub restart_on_over: bool,
    hold_remaining: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lead: 40.0,
            restart_on_over: false,
            hold_remaining: 0,
        }
    }
}

impl Autopilot {
    pub fn new(restart_on_over: bool) -> Self {
        Self {
            restart_on_over,
            ..Self::default()
        }
    }

    /// Decide this frame's command, if any
    pub fn decide(&mut self, state: &GameState) -> Option<Command> {
        match state.phase {
            SessionPhase::Idle => {
                self.hold_remaining = OPENING_HOLD_FRAMES;
                Some(Command::Start)
            }
            SessionPhase::Over => {
                self.hold_remaining = 0;
                self.restart_on_over.then_some(Command::Restart)
            }
            SessionPhase::Running => self.decide_running(state),
        }
    }

    fn decide_running(&mut self, state: &GameState) -> Option<Command> {
        let player = &state.player;

        if player.held {
            if self.hold_remaining == 0 {
                return Some(Command::JumpEnd);
            }
            self.hold_remaining -= 1;
            return None;
        }

        if !player.grounded {
            return None;
        }

        let target = next_platform(player, &state.platforms)?;
        if target.pos.x - player.right() > self.lead {
            return None;
        }

        let rise = (player.bottom() - target.pos.y).max(0.0) + CLEARANCE;
        let climb_rate = state.tuning().sustain_velocity().abs().max(f32::EPSILON);
        self.hold_remaining = (rise / climb_rate).ceil() as u32;
        Some(Command::JumpBegin)
    }
}

/// First platform fully ahead of the player
fn next_platform<'a>(player: &Player, platforms: &'a [Platform]) -> Option<&'a Platform> {
    platforms.iter().find(|p| p.pos.x >= player.right())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;
    use crate::tuning::GameConfig;
    use glam::Vec2;

    fn running_on_slab(next_x: f32, next_top: f32) -> GameState {
        let mut state = GameState::new(GameConfig::default(), 1, 0);
        state.phase = SessionPhase::Running;
        let height = state.tuning().platform_height;
        state.platforms = vec![
            Platform {
                id: 100,
                pos: Vec2::new(0.0, 330.0),
                size: Vec2::new(60.0, height),
                scored: true,
            },
            Platform {
                id: 101,
                pos: Vec2::new(next_x, next_top),
                size: Vec2::new(60.0, height),
                scored: false,
            },
        ];
        state
    }

    #[test]
    fn test_starts_from_idle() {
        let state = GameState::new(GameConfig::default(), 1, 0);
        let mut pilot = Autopilot::default();
        assert_eq!(pilot.decide(&state), Some(Command::Start));
    }

    #[test]
    fn test_waits_for_platform_to_approach() {
        let state = running_on_slab(400.0, 300.0);
        let mut pilot = Autopilot::default();
        assert_eq!(pilot.decide(&state), None);
    }

    #[test]
    fn test_jumps_when_platform_close_and_releases() {
        let mut state = running_on_slab(100.0, 300.0);
        let mut pilot = Autopilot::default();

        assert_eq!(pilot.decide(&state), Some(Command::JumpBegin));
        // feet 330 -> top 300 plus clearance = 42 px at 7.5 px per frame
        assert_eq!(pilot.hold_remaining, 6);

        tick(&mut state, &[Command::JumpBegin]);
        let mut frames_held = 0;
        loop {
            match pilot.decide(&state) {
                Some(Command::JumpEnd) => break,
                None => frames_held += 1,
                other => panic!("unexpected {:?}", other),
            }
            tick(&mut state, &[]);
        }
        assert_eq!(frames_held, 6);
    }

    #[test]
    fn test_restart_only_when_enabled() {
        let mut state = running_on_slab(100.0, 300.0);
        state.phase = SessionPhase::Over;
        assert_eq!(Autopilot::new(false).decide(&state), None);
        assert_eq!(Autopilot::new(true).decide(&state), Some(Command::Restart));
    }

    #[test]
    fn test_demo_run_makes_progress() {
        let mut state = GameState::new(GameConfig::default(), 2024, 0);
        let mut pilot = Autopilot::default();
        for _ in 0..600 {
            let commands: Vec<Command> = pilot.decide(&state).into_iter().collect();
            tick(&mut state, &commands);
        }
        assert!(state.run_ticks > 0);
        assert_ne!(state.phase, SessionPhase::Idle);
    }
}
