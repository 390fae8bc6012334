//! Data-driven game balance
//!
//! Every knob defaults to the reference layout in [`crate::consts`]. A host
//! may override any subset from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Tuning JSON could not be parsed")]
    Parse(#[from] serde_json::Error),
    #[error("Tuning value `{field}` must be positive and finite")]
    NotPositive { field: &'static str },
    #[error("Tuning value `{field}` must be finite")]
    NotFinite { field: &'static str },
    #[error("Balloon damping must be in (0, 1], got {0}")]
    Damping(f32),
    #[error("Speed ramp interval must be at least 1")]
    ZeroRampInterval,
    #[error("Initial obstacle count {initial} exceeds maximum {max}")]
    ObstacleCount { initial: usize, max: usize },
    #[error("Balloon ({balloon}px) is wider than the play area ({play}px)")]
    BalloonTooWide { balloon: f32, play: f32 },
}

/// Game balance and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    pub play_width: f32,
    pub play_height: f32,
    pub balloon_width: f32,
    pub balloon_height: f32,
    /// Gap between the floor and the balloon's bottom edge
    pub balloon_bottom: f32,
    pub obstacle_size: f32,
    pub spawn_width: f32,
    pub spawn_offset: f32,
    pub spawn_spread: f32,
    pub bottom_bound: f32,

    // === Steering ===
    pub impulse: f32,
    pub speed_multiplier: f32,
    pub damping: f32,

    // === Difficulty ramp ===
    pub ramp_interval: u64,
    pub ramp_factor: f32,
    pub initial_obstacles: usize,
    pub max_obstacles: usize,

    // === Hitboxes ===
    pub collision_padding: f32,
    pub hitbox_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            balloon_width: BALLOON_WIDTH,
            balloon_height: BALLOON_HEIGHT,
            balloon_bottom: BALLOON_BOTTOM,
            obstacle_size: OBSTACLE_SIZE,
            spawn_width: OBSTACLE_SPAWN_WIDTH,
            spawn_offset: OBSTACLE_SPAWN_OFFSET,
            spawn_spread: OBSTACLE_SPAWN_SPREAD,
            bottom_bound: OBSTACLE_BOTTOM_BOUND,

            impulse: BALLOON_IMPULSE,
            speed_multiplier: BALLOON_SPEED_MULTIPLIER,
            damping: BALLOON_DAMPING,

            ramp_interval: SPEED_RAMP_INTERVAL,
            ramp_factor: SPEED_RAMP_FACTOR,
            initial_obstacles: INITIAL_OBSTACLES,
            max_obstacles: MAX_OBSTACLES,

            collision_padding: COLLISION_PADDING,
            hitbox_scale: BALLOON_HITBOX_SCALE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning overrides
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("play_width", self.play_width),
            ("play_height", self.play_height),
            ("balloon_width", self.balloon_width),
            ("balloon_height", self.balloon_height),
            ("obstacle_size", self.obstacle_size),
            ("spawn_width", self.spawn_width),
            ("spawn_spread", self.spawn_spread),
            ("bottom_bound", self.bottom_bound),
            ("impulse", self.impulse),
            ("speed_multiplier", self.speed_multiplier),
            ("ramp_factor", self.ramp_factor),
            ("hitbox_scale", self.hitbox_scale),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NotPositive { field });
            }
        }
        let finite = [
            ("balloon_bottom", self.balloon_bottom),
            ("spawn_offset", self.spawn_offset),
            ("collision_padding", self.collision_padding),
            // Top of the spawn range
            ("spawn_offset + spawn_spread", self.spawn_offset + self.spawn_spread),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
        }
        if self.damping.is_nan() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(TuningError::Damping(self.damping));
        }
        if self.ramp_interval == 0 {
            return Err(TuningError::ZeroRampInterval);
        }
        if self.initial_obstacles > self.max_obstacles {
            return Err(TuningError::ObstacleCount {
                initial: self.initial_obstacles,
                max: self.max_obstacles,
            });
        }
        if self.balloon_width > self.play_width {
            return Err(TuningError::BalloonTooWide {
                balloon: self.balloon_width,
                play: self.play_width,
            });
        }
        Ok(())
    }

    /// Rightmost allowed balloon x (left edge)
    #[inline]
    pub fn max_balloon_x(&self) -> f32 {
        self.play_width - self.balloon_width
    }

    /// Balloon's top edge in play-area coordinates (y grows downward)
    #[inline]
    pub fn balloon_top(&self) -> f32 {
        self.play_height - self.balloon_bottom - self.balloon_height
    }

    /// Balloon starting x (centered)
    #[inline]
    pub fn balloon_start_x(&self) -> f32 {
        self.max_balloon_x() / 2.0
    }

    /// Per-tick acceleration while one direction is held
    #[inline]
    pub fn steer_impulse(&self) -> f32 {
        self.impulse * self.speed_multiplier
    }
}
