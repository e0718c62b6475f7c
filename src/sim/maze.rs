//! Packed 1-bit collision mask
//!
//! Row-major, 8 pixels per byte, most significant bit first. A set bit is
//! passable floor; a clear bit is wall.

use serde::{Deserialize, Serialize};

use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::MazeError;

/// Immutable maze collision bitmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeBitmap {
    width: i32,
    height: i32,
    bits: Vec<u8>,
}

impl MazeBitmap {
    /// Wrap an already packed bitmap. `bytes.len()` must equal `width * height / 8`.
    pub fn from_packed(width: i32, height: i32, bytes: Vec<u8>) -> Result<Self, MazeError> {
        let expected = packed_len(width, height)?;
        if bytes.len() != expected {
            return Err(MazeError::ByteCountMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bits: bytes,
        })
    }

    /// Start building a maze of the given size with every pixel passable
    pub fn builder(width: i32, height: i32) -> Result<MazeBuilder, MazeError> {
        let len = packed_len(width, height)?;
        Ok(MazeBuilder {
            width,
            height,
            bits: vec![0xFF; len],
        })
    }

    /// The built-in 640x480 course: bordered playfield with an exit gap at
    /// the bottom under the goal and a handful of interior baffles.
    pub fn classic() -> Self {
        MazeBuilder {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            bits: vec![0xFF; (DISPLAY_WIDTH * DISPLAY_HEIGHT / 8) as usize],
        }
        .border(8)
        .open_rect(80, DISPLAY_HEIGHT - 8, 40, 8)
        .wall_rect(200, 0, 8, 380)
        .wall_rect(200, 100, 300, 8)
        .wall_rect(280, 180, 8, 220)
        .wall_rect(360, 200, 280, 8)
        .wall_rect(360, 390, 200, 8)
        .build()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Whether (x, y) lies inside the bitmap
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// True if the pixel at (x, y) is solid.
    ///
    /// Coordinates outside the bitmap count as wall so that depenetration
    /// always pushes back toward the playfield.
    #[inline]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return true;
        }
        let index = (y * self.width + x) as usize;
        let byte = self.bits[index / 8];
        let shift = 7 - (index % 8);
        (byte >> shift) & 1 == 0
    }
}

fn packed_len(width: i32, height: i32) -> Result<usize, MazeError> {
    if width <= 0 || height <= 0 {
        return Err(MazeError::ZeroDimension);
    }
    let pixels = width as usize * height as usize;
    if pixels % 8 != 0 {
        return Err(MazeError::UnalignedSize { width, height });
    }
    Ok(pixels / 8)
}

/// Mutable staging area for assembling a [`MazeBitmap`] out of rectangles
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    width: i32,
    height: i32,
    bits: Vec<u8>,
}

impl MazeBuilder {
    /// Mark a rectangle as wall (clipped to the bitmap)
    pub fn wall_rect(self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.fill(x, y, w, h, false)
    }

    /// Mark a rectangle as passable (clipped to the bitmap)
    pub fn open_rect(self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.fill(x, y, w, h, true)
    }

    /// Surround the playfield with a wall of the given thickness
    pub fn border(self, thickness: i32) -> Self {
        let (w, h) = (self.width, self.height);
        self.wall_rect(0, 0, w, thickness)
            .wall_rect(0, h - thickness, w, thickness)
            .wall_rect(0, 0, thickness, h)
            .wall_rect(w - thickness, 0, thickness, h)
    }

    pub fn build(self) -> MazeBitmap {
        MazeBitmap {
            width: self.width,
            height: self.height,
            bits: self.bits,
        }
    }

    fn fill(mut self, x: i32, y: i32, w: i32, h: i32, open: bool) -> Self {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let index = (py * self.width + px) as usize;
                let mask = 1u8 << (7 - (index % 8));
                if open {
                    self.bits[index / 8] |= mask;
                } else {
                    self.bits[index / 8] &= !mask;
                }
            }
        }
        self
    }
}
