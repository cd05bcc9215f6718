//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults reproduce the
//! reference balance in [`crate::consts`]; a JSON document may override any
//! subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lane_count must be at least 1")]
    InvalidLaneCount,
    #[error("speed range is empty: min {min} >= max {max}")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("start_speed {start} outside [{min}, {max}]")]
    InvalidStartSpeed { start: f32, min: f32, max: f32 },
    #[error("{field} must be positive, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },
    #[error("rival speed factors are inverted: {min} > {max}")]
    InvalidRivalSpeedRange { min: f32, max: f32 },
    #[error("max_enemies must be at least 1")]
    InvalidMaxEnemies,
}

/// Gameplay configuration for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub road_margin: f32,
    pub lane_count: u32,

    pub min_speed: f32,
    pub start_speed: f32,
    pub max_speed: f32,
    pub accel_step: f32,
    pub brake_step: f32,

    pub duration: f32,

    pub spawn_interval: f32,
    pub spawn_cooldown: f32,
    pub spawn_near_threshold: f32,
    pub spawn_y: f32,
    pub max_enemies: usize,
    pub rival_speed_min_factor: f32,
    pub rival_speed_max_factor: f32,

    pub car_width: f32,
    pub car_height: f32,
    pub player_bottom_offset: f32,

    pub scroll_factor: f32,
    pub score_factor: f32,
    pub offscreen_margin: f32,

    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            road_margin: ROAD_MARGIN,
            lane_count: LANE_COUNT,

            min_speed: MIN_SPEED,
            start_speed: START_SPEED,
            max_speed: MAX_SPEED,
            accel_step: ACCEL_STEP,
            brake_step: BRAKE_STEP,

            duration: ROUND_DURATION,

            spawn_interval: SPAWN_INTERVAL,
            spawn_cooldown: SPAWN_COOLDOWN,
            spawn_near_threshold: SPAWN_NEAR_THRESHOLD,
            spawn_y: SPAWN_Y,
            max_enemies: MAX_ENEMIES,
            rival_speed_min_factor: RIVAL_SPEED_MIN_FACTOR,
            rival_speed_max_factor: RIVAL_SPEED_MAX_FACTOR,

            car_width: CAR_WIDTH,
            car_height: CAR_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            scroll_factor: SCROLL_FACTOR,
            score_factor: SCORE_FACTOR,
            offscreen_margin: OFFSCREEN_MARGIN,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.lane_count == 0 {
            return Err(TuningError::InvalidLaneCount);
        }
        if self.max_enemies == 0 {
            return Err(TuningError::InvalidMaxEnemies);
        }
        // Normalized speed divides by this range
        if self.min_speed.is_nan() || self.max_speed.is_nan() || self.min_speed >= self.max_speed {
            return Err(TuningError::InvalidSpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !(self.min_speed..=self.max_speed).contains(&self.start_speed) {
            return Err(TuningError::InvalidStartSpeed {
                start: self.start_speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.rival_speed_min_factor.is_nan()
            || self.rival_speed_max_factor.is_nan()
            || self.rival_speed_min_factor > self.rival_speed_max_factor
        {
            return Err(TuningError::InvalidRivalSpeedRange {
                min: self.rival_speed_min_factor,
                max: self.rival_speed_max_factor,
            });
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("duration", self.duration),
            ("spawn_interval", self.spawn_interval),
            ("spawn_cooldown", self.spawn_cooldown),
            ("car_width", self.car_width),
            ("car_height", self.car_height),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::InvalidDimension { field, value });
            }
        }
        let road_width = self.screen_width - 2.0 * self.road_margin;
        if road_width.is_nan() || road_width <= 0.0 {
            return Err(TuningError::InvalidDimension {
                field: "road_width",
                value: road_width,
            });
        }
        Ok(())
    }

    /// Lane the player starts in
    pub fn center_lane(&self) -> u32 {
        self.lane_count / 2
    }

    /// Screen y of the player's top edge
    pub fn player_y(&self) -> f32 {
        self.screen_height - self.player_bottom_offset
    }

    /// Player speed mapped to 0.0 (min) ..= 1.0 (max)
    pub fn normalized_speed(&self, speed: f32) -> f32 {
        (speed - self.min_speed) / (self.max_speed - self.min_speed)
    }
}
