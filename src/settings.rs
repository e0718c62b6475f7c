//! Game tunables
//!
//! Defaults reproduce the shipped game balance. Any subset can be overridden
//! from JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Gameplay and sensing tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Sensing ===
    /// Half the sensor's full-scale raw reading (+/-2g over a signed byte)
    pub sensor_full_scale: f32,
    /// Fixed sign applied to the normalized X axis to match screen orientation
    pub x_axis_sign: f32,
    /// Minimum delay after each tilt sample (ms)
    pub sample_period_ms: u64,

    // === Motion ===
    /// Dead-zone multiplier: an axis activates once |deviation| * sensitivity >= 1
    pub sensitivity: f32,
    /// Deviation-to-pixels scale before truncation
    pub velocity_scale: f32,
    /// Per-axis speed clamp (pixels per tick)
    pub max_speed: i32,

    // === Scoring ===
    pub starting_points: i32,
    /// Points lost per wall-resolution episode
    pub wall_penalty: i32,
    /// Points gained per bonus zone
    pub bonus_value: i32,

    // === Collision ===
    /// Pixel steps allowed for one corner before the sprite is declared stuck
    pub resolver_step_cap: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sensor_full_scale: 127.0 / 2.0,
            x_axis_sign: 1.0,
            sample_period_ms: 20,

            sensitivity: 10.0,
            velocity_scale: 15.0,
            max_speed: 5,

            starting_points: 1000,
            wall_penalty: 5,
            bonus_value: 100,

            resolver_step_cap: 512,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Dead-zone width in normalized tilt units
    pub fn dead_zone(&self) -> f32 {
        1.0 / self.sensitivity
    }
}
