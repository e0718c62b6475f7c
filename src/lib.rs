//! Tilt Maze - steer a sprite through a bitmap maze by tilting the board
//!
//! Core modules:
//! - `sim`: Deterministic game core (motion, collision, scoring, zones, mode)
//! - `platform`: Peripheral capability interfaces plus hardware and mock backends
//! - `hud`: Maze/bonus drawing and on-screen-display text
//! - `game`: Fixed-cadence control loop composing the above
//! - `settings`: Data-driven tunables

pub mod error;
pub mod game;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{CollisionError, MazeError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Display / bitmap dimensions in pixels
    pub const DISPLAY_WIDTH: i32 = 640;
    pub const DISPLAY_HEIGHT: i32 = 480;

    /// Sprite bounding box edge length
    pub const SPRITE_SIZE: i32 = 16;
    /// Offset from the sprite's top-left pixel to its far edge (inclusive)
    pub const SPRITE_EXTENT: i32 = SPRITE_SIZE - 1;
    /// Inset along an edge where the resolver probes for edge overlap
    pub const EDGE_PROBE_INSET: i32 = 8;
    /// Offset from the sprite's top-left pixel to its center
    pub const SPRITE_CENTER_OFFSET: i32 = 8;

    /// Sprite spawn position (top-left pixel)
    pub const SPAWN_X: i32 = 131;
    pub const SPAWN_Y: i32 = 14;

    /// Bonus and goal zone edge length
    pub const ZONE_SIZE: i32 = 16;
    /// Top-left corners of the bonus zones
    pub const BONUS_COORDS: [(i32, i32); 6] = [
        (420, 267),
        (527, 124),
        (161, 268),
        (382, 49),
        (419, 341),
        (308, 414),
    ];
    /// Top-left corner of the goal zone
    pub const GOAL_X: i32 = 90;
    pub const GOAL_Y: i32 = 470;

    /// Passable / wall colors (12-bit RGB)
    pub const COLOR_OPEN: u16 = 0xFFF;
    pub const COLOR_WALL: u16 = 0x000;
    /// Uncollected bonus fill
    pub const COLOR_BONUS: u16 = 0x700;
}
