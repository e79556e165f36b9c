//! Vertical integration for the player and horizontal scroll for the world

use super::state::{Platform, Player};
use crate::tuning::Tuning;

/// Advance the player one step
///
/// A held jump pins the velocity to the sustain value; otherwise gravity
/// accumulates (semi-implicit Euler: velocity first, then position).
pub fn integrate_player(player: &mut Player, tuning: &Tuning) {
    if player.held && player.ascending {
        player.vel_y = tuning.sustain_velocity();
    } else {
        player.vel_y += tuning.gravity;
    }
    player.pos.y += player.vel_y;
}

/// Move every platform toward the player
pub fn scroll_platforms(platforms: &mut [Platform], speed: f32) {
    for platform in platforms {
        platform.pos.x -= speed;
    }
}
