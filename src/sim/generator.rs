//! Procedural platform generation

use glam::Vec2;
use rand::Rng;

use super::state::Platform;
use crate::tuning::{GameConfig, PlayArea, Tuning};

/// Build the platform that follows a trailing edge at `prev_edge`
///
/// Gap, rise above the baseline and width are each drawn uniformly from
/// their tuned ranges, in that order.
pub fn generate_platform<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    area: &PlayArea,
    prev_edge: f32,
    id: u32,
) -> Platform {
    let gap = rng.random_range(tuning.min_gap..=tuning.max_gap);
    let rise = rng.random_range(0.0..=tuning.max_rise);
    let width = rng.random_range(tuning.min_width..=tuning.max_width);

    Platform {
        id,
        pos: Vec2::new(prev_edge + gap, area.height - tuning.baseline_offset - rise),
        size: Vec2::new(width, tuning.platform_height),
        scored: false,
    }
}

/// Initial fill stops once a platform starts at or beyond this x:
/// the visible width plus two platform-widths of margin
pub fn initial_fill_edge(config: &GameConfig) -> f32 {
    config.play_area.width + 2.0 * config.tuning.max_width
}

/// The trailing platform has scrolled into view and needs a successor
#[inline]
pub fn needs_platform(trailing_x: f32, area: &PlayArea) -> bool {
    trailing_x < area.width
}
