//! Peripheral abstraction layer
//!
//! The game core only talks to hardware through these small capability
//! traits. Each has a hardware-facing implementation and a deterministic
//! mock for tests and the native demo:
//! - `sensor`: accelerometer framing over SPI, scripted tilt source
//! - `input`: pointing-device edge detection, scripted pointer
//! - `time`: elapsed play clock
//! - `display`: in-memory framebuffer and character overlay

pub mod display;
pub mod input;
pub mod sensor;
pub mod time;

use std::time::Duration;

use crate::sim::AxisReading;

pub use display::MemoryScreen;
pub use input::{ButtonEdge, InputTracker, ScriptedPointer};
pub use sensor::{ScriptedTiltSensor, SpiTiltSensor};
pub use time::{ManualClock, MonotonicClock};

/// Byte-level SPI master
pub trait SpiBus {
    fn set_freq(&mut self, hz: u32);
    fn set_mode(&mut self, cpol: u8, cpha: u8);
    fn assert_select(&mut self, slave: u8);
    fn deassert_select(&mut self, slave: u8);
    /// Shift one byte out and return the byte shifted in
    fn transfer(&mut self, byte: u8) -> u8;
}

/// Three-axis tilt source
pub trait TiltSensor {
    /// Set bus clock (Hz) and (polarity, phase)
    fn configure(&mut self, freq_hz: u32, mode: (u8, u8));

    /// One raw reading in screen axis order
    fn read_axes(&mut self) -> AxisReading;

    /// Wait out the minimum delay between samples
    fn settle(&mut self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// Pixel sink for the playfield layer
pub trait FrameBuffer {
    /// `color` is 12-bit RGB (0xRGB)
    fn write_pixel(&mut self, x: i32, y: i32, color: u16);
}

/// Character-cell overlay
pub trait OnScreenDisplay {
    fn clear_screen(&mut self);
    fn set_palette(&mut self, fg: u16, bg: u16);
    fn write_glyph(&mut self, col: u16, row: u16, glyph: u8);
}

/// One report from the pointing device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerReport {
    pub left: bool,
    pub right: bool,
    pub dx: i32,
    pub dy: i32,
}

/// Non-blocking pointing device
pub trait PointingDevice {
    /// Drain every report that arrived since the last poll
    fn poll_activity(&mut self) -> Vec<PointerReport>;
}

/// Pausable elapsed-time counter
pub trait ElapsedClock {
    fn start(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    /// Zero the count without changing whether it runs
    fn reset(&mut self);
    fn read_microseconds(&self) -> u64;

    fn elapsed_seconds(&self) -> u64 {
        self.read_microseconds() / 1_000_000
    }
}
