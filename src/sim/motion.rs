//! Tilt sampling and motion integration
//!
//! Raw accelerometer bytes are normalized to fractions of the sensor's
//! half-range, compared against a level baseline captured at startup, and
//! turned into a clamped per-axis pixel velocity with a dead zone.

use glam::{BVec2, IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// One raw accelerometer transaction, in sensor byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisReading {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl AxisReading {
    pub fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }
}

/// Convert a raw reading into normalized screen-space tilt
pub fn normalize(reading: AxisReading, settings: &Settings) -> Vec2 {
    let scale = settings.sensor_full_scale;
    Vec2::new(
        reading.x as f32 / scale * settings.x_axis_sign,
        reading.y as f32 / scale,
    )
}

/// Tilt considered "level", captured once while the board is at rest
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Calibration {
    pub baseline: Vec2,
}

impl Calibration {
    pub fn new(baseline: Vec2) -> Self {
        Self { baseline }
    }

    /// Use a raw reading as the level baseline
    pub fn capture(reading: AxisReading, settings: &Settings) -> Self {
        let baseline = normalize(reading, settings);
        log::info!(
            "Calibrated level baseline: ({:.3}, {:.3})",
            baseline.x,
            baseline.y
        );
        Self { baseline }
    }
}

/// Result of integrating one tilt sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    /// Clamped per-axis velocity (pixels per tick)
    pub velocity: IVec2,
    /// Axes whose deviation cleared the dead zone
    pub active: BVec2,
}

/// Integrate a normalized sample against the calibration baseline.
///
/// Velocity is computed for both axes regardless of activation; only
/// [`apply_motion`] consults the activation flags.
pub fn integrate(sample: Vec2, calibration: &Calibration, settings: &Settings) -> Motion {
    let deviation = sample - calibration.baseline;
    let active = BVec2::new(
        deviation.x.abs() * settings.sensitivity >= 1.0,
        deviation.y.abs() * settings.sensitivity >= 1.0,
    );
    let max = IVec2::splat(settings.max_speed);
    let velocity = (deviation * settings.velocity_scale)
        .as_ivec2()
        .clamp(-max, max);
    Motion { velocity, active }
}

/// Move a position along the active axes only
#[inline]
pub fn apply_motion(position: IVec2, motion: &Motion) -> IVec2 {
    IVec2::select(motion.active, position + motion.velocity, position)
}
