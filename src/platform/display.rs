//! In-memory screen

use std::collections::HashMap;

use super::{FrameBuffer, OnScreenDisplay};

/// Framebuffer plus character overlay kept in memory.
///
/// Pixel writes outside the surface are dropped.
#[derive(Debug, Clone)]
pub struct MemoryScreen {
    width: i32,
    height: i32,
    pixels: Vec<u16>,
    glyphs: HashMap<(u16, u16), u8>,
    palette: (u16, u16),
    pixel_writes: u64,
    clears: u32,
}

impl MemoryScreen {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            pixels: vec![0; len],
            glyphs: HashMap::new(),
            palette: (0xFFF, 0x000),
            pixel_writes: 0,
            clears: 0,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u16> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn glyph(&self, col: u16, row: u16) -> Option<u8> {
        self.glyphs.get(&(col, row)).copied()
    }

    /// Raw glyph codes for `len` cells starting at (col, row); blanks read as 0
    pub fn glyph_run(&self, col: u16, row: u16, len: u16) -> Vec<u8> {
        (col..col + len)
            .map(|c| self.glyph(c, row).unwrap_or(0))
            .collect()
    }

    pub fn palette(&self) -> (u16, u16) {
        self.palette
    }

    pub fn pixel_writes(&self) -> u64 {
        self.pixel_writes
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl FrameBuffer for MemoryScreen {
    fn write_pixel(&mut self, x: i32, y: i32, color: u16) {
        self.pixel_writes += 1;
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

impl OnScreenDisplay for MemoryScreen {
    fn clear_screen(&mut self) {
        self.glyphs.clear();
        self.clears += 1;
    }

    fn set_palette(&mut self, fg: u16, bg: u16) {
        self.palette = (fg, bg);
    }

    fn write_glyph(&mut self, col: u16, row: u16, glyph: u8) {
        self.glyphs.insert((col, row), glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_pixels_are_dropped() {
        let mut screen = MemoryScreen::new(4, 4);
        screen.write_pixel(1, 2, 0x700);
        screen.write_pixel(4, 0, 0x700);
        screen.write_pixel(-1, 0, 0x700);
        assert_eq!(screen.pixel(1, 2), Some(0x700));
        assert_eq!(screen.pixel(4, 0), None);
        assert_eq!(screen.pixel_writes(), 3);
    }

    #[test]
    fn test_clear_drops_glyphs() {
        let mut screen = MemoryScreen::new(4, 4);
        screen.write_glyph(3, 1, 65);
        assert_eq!(screen.glyph_run(2, 1, 2), vec![0, 65]);
        screen.clear_screen();
        assert_eq!(screen.glyph(3, 1), None);
        assert_eq!(screen.clears(), 1);
    }
}
