//! Game balance and play-area geometry
//!
//! Everything the simulation treats as a constant lives here so a run can be
//! re-balanced from a JSON file without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Play-area geometry, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
    /// Height of the hazard band along the bottom edge
    pub hazard_height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
            hazard_height: HAZARD_HEIGHT,
        }
    }
}

impl PlayArea {
    /// Top edge of the hazard band
    pub fn hazard_top(&self) -> f32 {
        self.height - self.hazard_height
    }
}

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Spawn height above the bottom edge
    pub player_spawn_offset: f32,

    // === Vertical physics ===
    pub gravity: f32,
    pub jump_power: f32,
    /// Fraction of `jump_power` applied as a constant ascent while held
    pub jump_sustain_factor: f32,

    // === Scrolling ===
    pub scroll_speed: f32,
    /// Added to the scroll speed for every newly scored platform
    pub scroll_speed_increment: f32,

    // === Platforms ===
    pub min_gap: f32,
    pub max_gap: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub platform_height: f32,
    /// Lowest platform top, measured up from the bottom edge
    pub baseline_offset: f32,
    /// Maximum random rise above the baseline
    pub max_rise: f32,

    // === Collision ===
    pub landing_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_spawn_offset: PLAYER_SPAWN_OFFSET,

            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            jump_sustain_factor: JUMP_SUSTAIN_FACTOR,

            scroll_speed: SCROLL_SPEED,
            scroll_speed_increment: SCROLL_SPEED_INCREMENT,

            min_gap: PLATFORM_MIN_GAP,
            max_gap: PLATFORM_MAX_GAP,
            min_width: PLATFORM_MIN_WIDTH,
            max_width: PLATFORM_MAX_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            baseline_offset: PLATFORM_BASELINE_OFFSET,
            max_rise: PLATFORM_MAX_RISE,

            landing_tolerance: LANDING_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Constant vertical velocity while a jump is held (negative = up)
    pub fn sustain_velocity(&self) -> f32 {
        -self.jump_power * self.jump_sustain_factor
    }

    /// Reject values the physics cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("gravity", self.gravity),
            ("scroll_speed", self.scroll_speed),
            ("min_width", self.min_width),
            ("platform_height", self.platform_height),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("scroll_speed_increment", self.scroll_speed_increment),
            ("landing_tolerance", self.landing_tolerance),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let ranges = [
            ("gap", self.min_gap, self.max_gap),
            ("width", self.min_width, self.max_width),
            ("rise", 0.0, self.max_rise),
        ];
        for (field, min, max) in ranges {
            if min > max {
                return Err(ConfigError::InvertedRange { field, min, max });
            }
        }

        Ok(())
    }
}

/// Full configuration handed to a new session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub play_area: PlayArea,
    pub tuning: Tuning,
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let area = &self.play_area;
        for (field, value) in [("width", area.width), ("height", area.height)] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if area.hazard_height < 0.0 || area.hazard_height >= area.height {
            return Err(ConfigError::HazardTooTall {
                hazard: area.hazard_height,
                height: area.height,
            });
        }
        self.tuning.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sustain_velocity() {
        let tuning = Tuning::default();
        assert_eq!(tuning.sustain_velocity(), -7.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{ "play_area": { "width": 1024.0 }, "tuning": { "gravity": 0.8 } }"#)
                .unwrap();
        assert_eq!(config.play_area.width, 1024.0);
        assert_eq!(config.play_area.height, PLAY_AREA_HEIGHT);
        assert_eq!(config.tuning.gravity, 0.8);
        assert_eq!(config.tuning.jump_power, JUMP_POWER);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = GameConfig::from_json(r#"{ "tuning": { "min_gap": 200.0, "max_gap": 100.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedRange { field: "gap", .. }));
    }

    #[test]
    fn test_gravity_must_pull_down() {
        for gravity in ["0.0", "-0.6"] {
            let json = format!(r#"{{ "tuning": {{ "gravity": {} }} }}"#, gravity);
            let err = GameConfig::from_json(&json).unwrap_err();
            assert!(matches!(err, ConfigError::NonPositive { field: "gravity", .. }));
        }
    }

    #[test]
    fn test_negative_ramp_and_tolerance_rejected() {
        let err = GameConfig::from_json(r#"{ "tuning": { "scroll_speed_increment": -0.001 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative { field: "scroll_speed_increment", .. }
        ));

        let err = GameConfig::from_json(r#"{ "tuning": { "landing_tolerance": -1.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Negative { field: "landing_tolerance", .. }));

        let config = GameConfig::from_json(
            r#"{ "tuning": { "scroll_speed_increment": 0.0, "landing_tolerance": 0.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.tuning.landing_tolerance, 0.0);
    }

    #[test]
    fn test_hazard_taller_than_area_rejected() {
        let err = GameConfig::from_json(r#"{ "play_area": { "height": 50.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::HazardTooTall { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ nope").unwrap_err(),
            ConfigError::Json(_)
        ));
    }

    #[test]
    fn test_hazard_top() {
        assert_eq!(PlayArea::default().hazard_top(), 340.0);
    }
}
