//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No peripheral access (samples and clock readings arrive as inputs)
//! - Integer pixel positions only
//! - Fixed corner and zone iteration order

pub mod collision;
pub mod maze;
pub mod motion;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod zones;

pub use collision::{Corner, Resolution, overlaps_wall, resolve};
pub use maze::{MazeBitmap, MazeBuilder};
pub use motion::{AxisReading, Calibration, Motion, apply_motion, integrate, normalize};
pub use scoring::ScoreLedger;
pub use state::{ClockState, GameEvent, GameMode, GameState, Sprite};
pub use tick::{TickInput, tick};
pub use zones::{BonusEvent, BonusZone, GoalZone, check_bonus, check_goal, sprite_center};
