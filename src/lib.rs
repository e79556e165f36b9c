//! Stepping Stones - a side-scrolling platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platforms, collisions, session state)
//! - `scheduler`: Per-frame driver (commands in, step, render, persist)
//! - `input`: Command queue and key/pointer mapping
//! - `renderer`: Renderer implementations (headless log, Canvas2D on web)
//! - `persistence`: Best-score storage
//! - `tuning`: Data-driven game balance and play-area geometry

pub mod autopilot;
pub mod error;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod scheduler;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, StoreError};
pub use input::{Command, CommandQueue};
pub use scheduler::{FrameScheduler, Renderer};
pub use tuning::{GameConfig, PlayArea, Tuning};

/// Game configuration constants
pub mod consts {
    /// Display refresh the scheduler paces itself to when no vsync is available
    pub const FRAME_RATE: u32 = 60;

    /// Default play area (pixels)
    pub const PLAY_AREA_WIDTH: f32 = 800.0;
    pub const PLAY_AREA_HEIGHT: f32 = 400.0;
    /// Water band at the bottom of the play area
    pub const HAZARD_HEIGHT: f32 = 60.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Spawn height, measured up from the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 100.0;

    /// Vertical physics (per frame)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_POWER: f32 = 15.0;
    /// Fraction of jump power held while the jump input is down
    pub const JUMP_SUSTAIN_FACTOR: f32 = 0.5;

    /// Horizontal scrolling (pixels per frame)
    pub const SCROLL_SPEED: f32 = 3.0;
    pub const SCROLL_SPEED_INCREMENT: f32 = 0.001;

    /// Platform generation
    pub const PLATFORM_MIN_GAP: f32 = 60.0;
    pub const PLATFORM_MAX_GAP: f32 = 140.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 40.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    /// Baseline platform top, measured up from the bottom edge
    pub const PLATFORM_BASELINE_OFFSET: f32 = 80.0;
    pub const PLATFORM_MAX_RISE: f32 = 60.0;

    /// Extra depth below a platform top that still counts as a landing
    pub const LANDING_TOLERANCE: f32 = 10.0;
}
