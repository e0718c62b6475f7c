//! Error types for maze construction and collision resolution

use core::fmt;

use glam::IVec2;

use crate::sim::collision::Corner;

/// Rejected packed-bitmap geometry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    ZeroDimension,
    /// Width * height must pack into whole bytes
    UnalignedSize { width: i32, height: i32 },
    ByteCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "maze width and height must be positive"),
            Self::UnalignedSize { width, height } => write!(
                f,
                "maze size {width}x{height} is not a whole number of bytes"
            ),
            Self::ByteCountMismatch { expected, actual } => write!(
                f,
                "packed maze has {actual} bytes, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

/// Depenetration failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollisionError {
    /// A single corner needed more pixel steps than the configured cap
    Stuck {
        corner: Corner,
        position: IVec2,
        steps: u32,
    },
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stuck {
                corner,
                position,
                steps,
            } => write!(
                f,
                "sprite stuck at ({}, {}): {corner} corner not clear after {steps} steps",
                position.x, position.y
            ),
        }
    }
}

impl std::error::Error for CollisionError {}
