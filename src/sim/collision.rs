//! Landing detection and resolution
//!
//! Only one kind of contact exists: the player's feet coming down onto the
//! top of a platform. Sides and undersides are ignored, so a rising player
//! passes through platforms from below.

use super::state::{Platform, Player};

/// Result of resolving the player against every platform for one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// At least one platform caught the player this step
    pub on_platform: bool,
    /// Last platform resolved against (its top is where the player stands)
    pub landed_on: Option<u32>,
    /// Platforms credited for the first time, in iteration order
    pub newly_scored: Vec<u32>,
}

/// Whether the player's feet rest on `platform` this step
///
/// Horizontal extents must strictly overlap, the lower edge must lie within
/// `[top, top + height + tolerance]` (both ends inclusive), and the player
/// must not be moving up.
pub fn is_landing(player: &Player, platform: &Platform, tolerance: f32) -> bool {
    let feet = player.bottom();
    player.right() > platform.pos.x
        && player.pos.x < platform.right()
        && feet >= platform.pos.y
        && feet <= platform.pos.y + platform.size.y + tolerance
        && player.vel_y >= 0.0
}

/// Snap the player onto every platform it lands on
///
/// Platforms are visited in order; if more than one matches, each is
/// resolved and the last one's top wins.
pub fn resolve_landings(
    player: &mut Player,
    platforms: &mut [Platform],
    tolerance: f32,
) -> CollisionResult {
    let mut result = CollisionResult::default();

    for platform in platforms.iter_mut() {
        if !is_landing(player, platform, tolerance) {
            continue;
        }

        player.pos.y = platform.pos.y - player.size.y;
        player.vel_y = 0.0;
        player.ascending = false;
        player.grounded = true;

        result.on_platform = true;
        result.landed_on = Some(platform.id);

        if !platform.scored {
            platform.scored = true;
            result.newly_scored.push(platform.id);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{PlayArea, Tuning};
    use glam::Vec2;

    const TOLERANCE: f32 = 10.0;

    fn platform_at(id: u32, x: f32, y: f32, width: f32) -> Platform {
        Platform {
            id,
            pos: Vec2::new(x, y),
            size: Vec2::new(width, 15.0),
            scored: false,
        }
    }

    fn falling_player(feet: f32) -> Player {
        let mut player = Player::spawn(&Tuning::default(), &PlayArea::default());
        player.pos.y = feet - player.size.y;
        player.vel_y = 2.0;
        player.grounded = false;
        player.ascending = true;
        player
    }

    #[test]
    fn test_landing_snaps_and_scores() {
        let mut player = falling_player(305.0);
        let mut platforms = vec![platform_at(1, 40.0, 300.0, 60.0)];

        let result = resolve_landings(&mut player, &mut platforms, TOLERANCE);

        assert!(result.on_platform);
        assert_eq!(result.landed_on, Some(1));
        assert_eq!(result.newly_scored, vec![1]);
        assert_eq!(player.bottom(), 300.0);
        assert_eq!(player.vel_y, 0.0);
        assert!(player.grounded);
        assert!(!player.ascending);
        assert!(platforms[0].scored);
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        // Feet exactly at top + height + tolerance
        let mut player = falling_player(300.0 + 15.0 + TOLERANCE);
        let mut platforms = vec![platform_at(1, 40.0, 300.0, 60.0)];
        assert!(resolve_landings(&mut player, &mut platforms, TOLERANCE).on_platform);

        let mut player = falling_player(300.0 + 15.0 + TOLERANCE + 0.5);
        let mut platforms = vec![platform_at(1, 40.0, 300.0, 60.0)];
        assert!(!resolve_landings(&mut player, &mut platforms, TOLERANCE).on_platform);
    }

    #[test]
    fn test_top_edge_is_inclusive_and_stationary_counts() {
        let mut player = falling_player(300.0);
        player.vel_y = 0.0;
        let platform = platform_at(1, 40.0, 300.0, 60.0);
        assert!(is_landing(&player, &platform, TOLERANCE));
    }

    #[test]
    fn test_rising_player_passes_through() {
        let mut player = falling_player(305.0);
        player.vel_y = -7.5;
        let mut platforms = vec![platform_at(1, 40.0, 300.0, 60.0)];

        let result = resolve_landings(&mut player, &mut platforms, TOLERANCE);

        assert!(!result.on_platform);
        assert!(!platforms[0].scored);
        assert_eq!(player.bottom(), 305.0);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Player spans [50, 70]
        let player = falling_player(305.0);
        assert!(!is_landing(&player, &platform_at(1, 70.0, 300.0, 60.0), TOLERANCE));
        assert!(!is_landing(&player, &platform_at(2, -10.0, 300.0, 60.0), TOLERANCE));
        assert!(is_landing(&player, &platform_at(3, 69.5, 300.0, 60.0), TOLERANCE));
    }

    #[test]
    fn test_scored_platform_not_rescored() {
        let mut player = falling_player(305.0);
        let mut platforms = vec![platform_at(1, 40.0, 300.0, 60.0)];
        platforms[0].scored = true;

        let result = resolve_landings(&mut player, &mut platforms, TOLERANCE);

        assert!(result.on_platform);
        assert!(result.newly_scored.is_empty());
    }

    #[test]
    fn test_overlapping_platforms_last_wins() {
        let mut player = falling_player(310.0);
        let mut platforms = vec![
            platform_at(1, 40.0, 305.0, 20.0),
            platform_at(2, 55.0, 300.0, 20.0),
        ];

        let result = resolve_landings(&mut player, &mut platforms, TOLERANCE);

        assert_eq!(result.landed_on, Some(2));
        assert_eq!(result.newly_scored, vec![1, 2]);
        assert_eq!(player.bottom(), 300.0);
    }
}
