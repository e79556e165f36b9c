//! Renderers
//!
//! The simulation is drawn as flat rectangles; decoration is out of scope.
//! - `LogRenderer`: headless, reports HUD changes through `log`
//! - `CanvasRenderer` (web only): Canvas2D

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::scheduler::Renderer;
use crate::sim::{GameOverReason, GameState, SessionPhase};

/// Colors for game elements (CSS syntax for Canvas2D)
pub mod colors {
    pub const SKY: &str = "#87ceeb";
    pub const HAZARD: &str = "#4a90e2";
    pub const PLATFORM: &str = "#8b7355";
    pub const PLATFORM_SCORED: &str = "#6b5345";
    pub const PLAYER: &str = "#c0c0c0";
    pub const TEXT: &str = "#ffffff";
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.7)";
}

/// Score line shown during play
pub fn hud_text(state: &GameState) -> String {
    format!("Score: {}   Best: {}", state.score, state.best_score)
}

/// Centered message lines for the current phase (empty while running)
pub fn overlay_lines(state: &GameState) -> Vec<String> {
    match state.phase {
        SessionPhase::Idle => vec!["Press Space, Up or tap to jump".to_string()],
        SessionPhase::Running => Vec::new(),
        SessionPhase::Over => {
            let headline = match state.game_over_reason {
                Some(GameOverReason::Hazard) => "SPLASH! GAME OVER",
                _ => "GAME OVER",
            };
            vec![
                headline.to_string(),
                format!("Score: {}", state.score),
                format!("Best: {}", state.best_score),
                "Press R to try again".to_string(),
            ]
        }
    }
}

/// Headless renderer: logs whenever the phase or score changes
#[derive(Debug, Default)]
pub struct LogRenderer {
    last: Option<(SessionPhase, u64)>,
    /// Frames rendered
    pub frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, state: &GameState) {
        self.frames += 1;

        let current = (state.phase, state.score);
        if self.last != Some(current) {
            match state.phase {
                SessionPhase::Running => log::debug!("{}", hud_text(state)),
                _ => {
                    for line in overlay_lines(state) {
                        log::info!("{}", line);
                    }
                }
            }
            self.last = Some(current);
        }

        log::trace!(
            "frame {}: player y={:.1} vy={:.2}, {} platforms",
            self.frames,
            state.player.pos.y,
            state.player.vel_y,
            state.platforms.len()
        );
    }
}
