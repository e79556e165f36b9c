//! Game state and core simulation types
//!
//! Everything a step reads or writes lives in [`GameState`]; callers own it
//! and pass it by reference, so several sessions can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generator;
use crate::tuning::{GameConfig, PlayArea, Tuning};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first jump
    Idle,
    /// Simulation advancing every frame
    Running,
    /// Run ended, waiting for a restart
    Over,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Dropped below the bottom edge or left the play area
    FellOut,
    /// Touched the hazard band without standing on a platform
    Hazard,
}

/// Things that happened during a frame, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First jump took the session out of Idle
    Started,
    Jumped,
    /// Touched down after being airborne
    Landed { platform_id: u32 },
    /// First landing on a platform this run
    Scored { platform_id: u32, score: u64 },
    GameOver { score: u64, reason: GameOverReason },
    /// Best score raised; the host should persist it
    NewBest { score: u64 },
    Restarted { run: u32 },
}

/// The player-controlled body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner, y grows downward
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    /// A jump impulse is in effect
    pub ascending: bool,
    /// Jump input is held down
    pub held: bool,
    /// Resting on a platform, allowed to jump
    pub grounded: bool,
}

impl Player {
    /// Player at its spawn point, at rest
    pub fn spawn(tuning: &Tuning, area: &PlayArea) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, area.height - tuning.player_spawn_offset),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel_y: 0.0,
            ascending: false,
            held: false,
            grounded: true,
        }
    }

    /// Lower edge (feet)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Start a jump impulse from the ground
    pub fn begin_jump(&mut self) {
        self.ascending = true;
        self.grounded = false;
        self.held = true;
    }
}

/// A scrolling foothold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Already credited toward the score this run
    pub scored: bool,
}

impl Platform {
    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully scrolled past the left edge of the play area
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.pos.x <= -self.size.x
    }
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Seed for a given run: every restart draws a fresh but reproducible layout
pub fn run_seed(seed: u64, run: u32) -> u64 {
    seed ^ (run as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Restart counter (0 for the first run)
    pub run: u32,
    pub config: GameConfig,
    pub phase: SessionPhase,
    pub player: Player,
    /// Ordered left to right
    pub platforms: Vec<Platform>,
    pub score: u64,
    /// Platform scroll in pixels per step
    pub scroll_speed: f32,
    /// Best score across runs, seeded from persistent storage
    pub best_score: u64,
    /// Steps simulated in the current run
    pub run_ticks: u64,
    /// Why the last run ended
    pub game_over_reason: Option<GameOverReason>,
    /// Pending events (drained by the host each frame)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create an idle session with a freshly generated platform run
    pub fn new(config: GameConfig, seed: u64, best_score: u64) -> Self {
        let player = Player::spawn(&config.tuning, &config.play_area);
        let scroll_speed = config.tuning.scroll_speed;
        let mut state = Self {
            seed,
            run: 0,
            config,
            phase: SessionPhase::Idle,
            player,
            platforms: Vec::new(),
            score: 0,
            scroll_speed,
            best_score,
            run_ticks: 0,
            game_over_reason: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(run_seed(seed, 0)),
            next_id: 1,
        };
        state.generate_initial_platforms();
        state
    }

    /// Reset every per-run value and begin the next run immediately
    pub fn restart(&mut self) {
        self.commit_best_score();

        self.run += 1;
        self.rng = Pcg32::seed_from_u64(run_seed(self.seed, self.run));
        self.score = 0;
        self.scroll_speed = self.config.tuning.scroll_speed;
        self.player = Player::spawn(&self.config.tuning, &self.config.play_area);
        self.run_ticks = 0;
        self.game_over_reason = None;
        self.generate_initial_platforms();
        self.phase = SessionPhase::Running;

        self.events.push(GameEvent::Restarted { run: self.run });
        log::info!("Run {} started (seed {})", self.run, run_seed(self.seed, self.run));
    }

    /// Raise the best score if the current score beats it
    pub fn commit_best_score(&mut self) -> bool {
        if self.score > self.best_score {
            self.best_score = self.score;
            self.events.push(GameEvent::NewBest { score: self.score });
            log::info!("New best score: {}", self.score);
            true
        } else {
            false
        }
    }

    /// Allocate a new platform ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the platform run with one covering the view plus margin
    pub fn generate_initial_platforms(&mut self) {
        self.platforms.clear();
        let target = generator::initial_fill_edge(&self.config);
        while self.platforms.last().is_none_or(|p| p.pos.x < target) {
            self.append_platform();
        }
        log::debug!("Generated {} initial platforms", self.platforms.len());
    }

    /// Append one platform after the current trailing one
    pub fn append_platform(&mut self) {
        let prev_edge = self.platforms.last().map_or(0.0, Platform::right);
        let id = self.next_entity_id();
        let platform = generator::generate_platform(
            &mut self.rng,
            &self.config.tuning,
            &self.config.play_area,
            prev_edge,
            id,
        );
        log::trace!(
            "Platform {} at x={:.1} y={:.1} w={:.1}",
            platform.id,
            platform.pos.x,
            platform.pos.y,
            platform.size.x
        );
        self.platforms.push(platform);
    }

    /// Trailing (right-most) platform
    pub fn trailing_platform(&self) -> Option<&Platform> {
        self.platforms.last()
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.config.tuning
    }

    pub fn play_area(&self) -> &PlayArea {
        &self.config.play_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_filled() {
        let state = GameState::new(GameConfig::default(), 42, 7);
        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 7);
        assert!(state.player.grounded);
        assert_eq!(state.player.pos, Vec2::new(50.0, 300.0));

        let edge = generator::initial_fill_edge(&state.config);
        assert!(state.trailing_platform().unwrap().pos.x >= edge);
    }

    #[test]
    fn test_platform_ids_increase() {
        let state = GameState::new(GameConfig::default(), 1, 0);
        for pair in state.platforms.windows(2) {
            assert!(pair[1].id > pair[0].id);
        }
    }

    #[test]
    fn test_restart_resets_run_and_changes_layout() {
        let mut state = GameState::new(GameConfig::default(), 5, 0);
        let first_layout: Vec<_> = state.platforms.iter().map(|p| p.pos).collect();
        state.score = 4;
        state.scroll_speed = 9.0;
        state.player.pos.y = 10.0;
        state.phase = SessionPhase::Over;

        state.restart();

        assert_eq!(state.phase, SessionPhase::Running);
        assert_eq!(state.run, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_speed, state.config.tuning.scroll_speed);
        assert_eq!(state.player, Player::spawn(state.tuning(), state.play_area()));
        assert_eq!(state.best_score, 4);
        let second_layout: Vec<_> = state.platforms.iter().map(|p| p.pos).collect();
        assert_ne!(first_layout, second_layout);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(GameConfig::default(), 99, 0);
        let b = GameState::new(GameConfig::default(), 99, 0);
        assert_eq!(a.platforms, b.platforms);
    }

    #[test]
    fn test_commit_best_score_only_when_higher() {
        let mut state = GameState::new(GameConfig::default(), 1, 5);
        state.score = 5;
        assert!(!state.commit_best_score());
        state.score = 6;
        assert!(state.commit_best_score());
        assert_eq!(state.drain_events(), vec![GameEvent::NewBest { score: 6 }]);
        assert!(state.events.is_empty());
    }
}
