//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Values are per tick, so they
//! assume the host drives the simulation at a roughly constant frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Playfield;

/// Reasons a [`Tuning`] cannot produce a playable game
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("playfield must be larger than zero, got {width}x{height}")]
    EmptyPlayfield { width: f32, height: f32 },
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("gate gap {gap} plus margins {margins} does not fit a playfield {height} tall")]
    GateDoesNotFit { gap: f32, margins: f32, height: f32 },
    #[error("avatar at x={x} does not fit a playfield {width} wide")]
    AvatarOutside { x: f32, width: f32 },
    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,
    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Gameplay constants for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Dimensions of the render target
    pub playfield: Playfield,
    /// Added to the avatar's velocity every tick (pixels/tick²)
    pub gravity: f32,
    /// Velocity assigned by a flap (negative is up)
    pub jump_velocity: f32,
    /// Fixed horizontal position of the avatar's center
    pub avatar_x: f32,
    pub avatar_size: Vec2,
    pub obstacle_width: f32,
    /// Vertical opening between the two solid segments
    pub gate_gap: f32,
    /// Leftward scroll per tick
    pub obstacle_speed: f32,
    /// Ticks between obstacle spawns
    pub spawn_interval: u64,
    pub top_margin: f32,
    pub bottom_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            avatar_x: AVATAR_X,
            avatar_size: Vec2::new(AVATAR_WIDTH, AVATAR_HEIGHT),
            obstacle_width: OBSTACLE_WIDTH,
            gate_gap: GATE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            top_margin: TOP_MARGIN,
            bottom_margin: BOTTOM_MARGIN,
        }
    }
}

impl Tuning {
    /// Default balance on a playfield of the given size
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield: Playfield::new(width, height),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) tuning file and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Range of valid gate placements: `top_edge` is drawn from
    /// `top_margin .. top_margin + placement_span()`
    pub fn placement_span(&self) -> f32 {
        self.playfield.height - self.gate_gap - self.top_margin - self.bottom_margin
    }

    /// Reject values that would make the game unplayable
    pub fn validate(&self) -> Result<(), TuningError> {
        let Playfield { width, height } = self.playfield;
        if !(width > 0.0 && height > 0.0) {
            return Err(TuningError::EmptyPlayfield { width, height });
        }
        if !(self.avatar_size.x > 0.0 && self.avatar_size.y > 0.0) {
            return Err(TuningError::NonPositive("avatar size"));
        }
        if !(self.obstacle_width > 0.0) {
            return Err(TuningError::NonPositive("obstacle width"));
        }
        if !(self.gate_gap > 0.0) {
            return Err(TuningError::NonPositive("gate gap"));
        }
        if !(self.obstacle_speed > 0.0) {
            return Err(TuningError::NonPositive("obstacle speed"));
        }
        if self.top_margin < 0.0 || self.bottom_margin < 0.0 {
            return Err(TuningError::NonPositive("gate margin"));
        }
        if self.placement_span() < 1.0 {
            return Err(TuningError::GateDoesNotFit {
                gap: self.gate_gap,
                margins: self.top_margin + self.bottom_margin,
                height,
            });
        }
        let half_w = self.avatar_size.x / 2.0;
        if self.avatar_x - half_w < 0.0 || self.avatar_x + half_w > width {
            return Err(TuningError::AvatarOutside {
                x: self.avatar_x,
                width,
            });
        }
        if self.spawn_interval == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.gravity, 0.3);
        assert_eq!(tuning.jump_velocity, -6.0);
        assert_eq!(tuning.spawn_interval, 100);
        assert_eq!(tuning.placement_span(), 600.0 - 150.0 - 100.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "gate_gap": 180.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.gate_gap, 180.0);
        assert_eq!(tuning.obstacle_speed, OBSTACLE_SPEED);
        assert_eq!(tuning.playfield, Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT));
    }

    #[test]
    fn test_gate_too_tall_rejected() {
        let tuning = Tuning {
            gate_gap: 520.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GateDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let tuning = Tuning {
            spawn_interval: 0,
            ..Tuning::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::ZeroSpawnInterval)));
    }

    #[test]
    fn test_avatar_outside_playfield_rejected() {
        let tuning = Tuning {
            avatar_x: 395.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::AvatarOutside { .. })
        ));
    }

    #[test]
    fn test_bad_json_reports_parse_error() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Json(_))
        ));
    }
}
