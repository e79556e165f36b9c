//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (platforms left to right)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod generator;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, is_landing, resolve_landings};
pub use generator::generate_platform;
pub use physics::{integrate_player, scroll_platforms};
pub use state::{GameEvent, GameOverReason, GameState, Platform, Player, SessionPhase};
pub use tick::{Command, apply_command, check_termination, step, tick};
