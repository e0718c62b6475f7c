//! Pixel-step depenetration against the maze bitmap
//!
//! The tricky part of the game: after motion is applied, any of the sprite's
//! four corners may sit inside a wall. Each corner is resolved in turn by
//! walking the sprite one pixel at a time back toward open floor:
//!
//! 1. push along Y until the corner's horizontal edge clears (probed at an
//!    inset point along the edge),
//! 2. push along X until the corner's vertical edge clears,
//! 3. creep diagonally until the corner pixel itself clears.
//!
//! Corners are processed top-left, top-right, bottom-left, bottom-right. A
//! later corner may push an earlier one back into a wall; that is not
//! re-checked within the same pass. Every corner is bounded by a step cap so
//! that malformed geometry surfaces as [`CollisionError::Stuck`] rather than
//! an endless loop.

use core::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::maze::MazeBitmap;
use crate::consts::{EDGE_PROBE_INSET, SPRITE_EXTENT};
use crate::error::CollisionError;

/// One corner of the sprite's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Resolution order
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Corner pixel relative to the sprite's top-left
    pub fn offset(self) -> IVec2 {
        match self {
            Corner::TopLeft => IVec2::new(0, 0),
            Corner::TopRight => IVec2::new(SPRITE_EXTENT, 0),
            Corner::BottomLeft => IVec2::new(0, SPRITE_EXTENT),
            Corner::BottomRight => IVec2::new(SPRITE_EXTENT, SPRITE_EXTENT),
        }
    }

    /// Unit push that moves this corner toward the inside of the box
    pub fn push(self) -> IVec2 {
        match self {
            Corner::TopLeft => IVec2::new(1, 1),
            Corner::TopRight => IVec2::new(-1, 1),
            Corner::BottomLeft => IVec2::new(1, -1),
            Corner::BottomRight => IVec2::new(-1, -1),
        }
    }

    /// Probe on the corner's horizontal (top or bottom) edge
    fn edge_probe(self) -> IVec2 {
        IVec2::new(EDGE_PROBE_INSET, self.offset().y)
    }

    /// Probe on the corner's vertical (left or right) edge
    fn side_probe(self) -> IVec2 {
        IVec2::new(self.offset().x, EDGE_PROBE_INSET)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::TopLeft => write!(f, "top-left"),
            Corner::TopRight => write!(f, "top-right"),
            Corner::BottomLeft => write!(f, "bottom-left"),
            Corner::BottomRight => write!(f, "bottom-right"),
        }
    }
}

/// Outcome of one resolver pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Corrected top-left position
    pub position: IVec2,
    /// Number of resolution episodes (one per corner that started in a wall)
    pub episodes: u32,
    /// Corners that triggered an episode, in resolution order
    pub corners: Vec<Corner>,
}

impl Resolution {
    /// Total penalty for this pass
    pub fn penalty(&self, per_episode: i32) -> i32 {
        self.episodes as i32 * per_episode
    }

    pub fn hit_wall(&self) -> bool {
        self.episodes > 0
    }
}

/// Push a tentatively moved sprite out of solid pixels.
///
/// `step_cap` bounds the pixel steps spent on any single corner.
pub fn resolve(
    maze: &MazeBitmap,
    position: IVec2,
    step_cap: u32,
) -> Result<Resolution, CollisionError> {
    let mut resolution = Resolution {
        position,
        episodes: 0,
        corners: Vec::new(),
    };

    for corner in Corner::ALL {
        let episodes = resolve_corner(maze, &mut resolution.position, corner, step_cap)?;
        if episodes > 0 {
            resolution.episodes += episodes;
            resolution.corners.push(corner);
        }
    }

    Ok(resolution)
}

/// Whether the sprite at `position` overlaps a wall at any corner
pub fn overlaps_wall(maze: &MazeBitmap, position: IVec2) -> bool {
    Corner::ALL
        .iter()
        .any(|corner| solid(maze, position, corner.offset()))
}

#[inline]
fn solid(maze: &MazeBitmap, position: IVec2, probe: IVec2) -> bool {
    let p = position + probe;
    maze.is_wall(p.x, p.y)
}

/// Step budget for one corner
struct Stepper {
    corner: Corner,
    cap: u32,
    steps: u32,
}

impl Stepper {
    fn advance(&mut self, position: &mut IVec2, delta: IVec2) -> Result<(), CollisionError> {
        *position += delta;
        self.steps += 1;
        if self.steps > self.cap {
            return Err(CollisionError::Stuck {
                corner: self.corner,
                position: *position,
                steps: self.steps,
            });
        }
        Ok(())
    }
}

fn resolve_corner(
    maze: &MazeBitmap,
    position: &mut IVec2,
    corner: Corner,
    step_cap: u32,
) -> Result<u32, CollisionError> {
    let push = corner.push();
    let mut stepper = Stepper {
        corner,
        cap: step_cap,
        steps: 0,
    };
    let mut episodes = 0;

    while solid(maze, *position, corner.offset()) {
        episodes += 1;

        while solid(maze, *position, corner.edge_probe()) {
            stepper.advance(position, IVec2::new(0, push.y))?;
        }
        while solid(maze, *position, corner.side_probe()) {
            stepper.advance(position, IVec2::new(push.x, 0))?;
        }
        while solid(maze, *position, corner.offset()) {
            stepper.advance(position, push)?;
        }
    }

    if episodes > 0 {
        log::debug!(
            "{} corner resolved to ({}, {}) in {} steps",
            corner,
            position.x,
            position.y,
            stepper.steps
        );
    }

    Ok(episodes)
}
