//! Accelerometer backends

use std::collections::VecDeque;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{SpiBus, TiltSensor};
use crate::sim::AxisReading;

/// Register read command
pub const READ_COMMAND: u8 = 0x0B;
/// First data register (three consecutive axis bytes)
pub const DATA_REGISTER: u8 = 0x08;
/// Default bus clock
pub const SPI_FREQ_HZ: u32 = 400_000;
/// Chip select line the sensor sits on
pub const SENSOR_SLAVE: u8 = 0;

/// Accelerometer on an SPI bus.
///
/// The board mounts the sensor rotated a quarter turn, so the first data
/// byte drives screen Y and the second drives screen X.
#[derive(Debug)]
pub struct SpiTiltSensor<B: SpiBus> {
    bus: B,
}

impl<B: SpiBus> SpiTiltSensor<B> {
    pub fn new(mut bus: B) -> Self {
        bus.set_freq(SPI_FREQ_HZ);
        bus.set_mode(0, 0);
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<B: SpiBus> TiltSensor for SpiTiltSensor<B> {
    fn configure(&mut self, freq_hz: u32, mode: (u8, u8)) {
        self.bus.set_freq(freq_hz);
        self.bus.set_mode(mode.0, mode.1);
    }

    fn read_axes(&mut self) -> AxisReading {
        self.bus.assert_select(SENSOR_SLAVE);
        self.bus.transfer(READ_COMMAND);
        self.bus.transfer(DATA_REGISTER);
        let first = self.bus.transfer(0x00) as i8;
        let second = self.bus.transfer(0x00) as i8;
        let third = self.bus.transfer(0x00) as i8;
        self.bus.deassert_select(SENSOR_SLAVE);
        AxisReading::new(second, first, third)
    }
}

/// Deterministic tilt source replaying a script with optional seeded jitter.
///
/// Once the script runs out the last reading repeats. Settle requests are
/// totted up and only actually slept when built with [`paced`](Self::paced).
#[derive(Debug, Clone)]
pub struct ScriptedTiltSensor {
    script: VecDeque<AxisReading>,
    current: AxisReading,
    noise: i8,
    rng: Pcg32,
    reads: u64,
    settled: Duration,
    sleep: bool,
}

impl ScriptedTiltSensor {
    /// Always report `reading`
    pub fn steady(reading: AxisReading) -> Self {
        Self::new(Vec::new(), reading)
    }

    /// Replay `script` after reporting `rest` (the calibration sample)
    pub fn new(script: Vec<AxisReading>, rest: AxisReading) -> Self {
        let mut readings: VecDeque<AxisReading> = script.into();
        readings.push_front(rest);
        Self {
            script: readings,
            current: rest,
            noise: 0,
            rng: Pcg32::seed_from_u64(0),
            reads: 0,
            settled: Duration::ZERO,
            sleep: false,
        }
    }

    /// Add uniform jitter of up to `amplitude` raw counts per axis
    pub fn with_noise(mut self, amplitude: i8, seed: u64) -> Self {
        self.noise = amplitude.max(0);
        self.rng = Pcg32::seed_from_u64(seed);
        self
    }

    /// Really sleep on settle, for real-time runs
    pub fn paced(mut self) -> Self {
        self.sleep = true;
        self
    }

    /// Queue more readings
    pub fn push(&mut self, reading: AxisReading) {
        self.script.push_back(reading);
    }

    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Total settle time requested so far
    pub fn settled(&self) -> Duration {
        self.settled
    }

    fn jitter(&mut self, value: i8) -> i8 {
        if self.noise == 0 {
            return value;
        }
        let offset = self.rng.random_range(-self.noise..=self.noise);
        value.saturating_add(offset)
    }
}

impl TiltSensor for ScriptedTiltSensor {
    fn configure(&mut self, _freq_hz: u32, _mode: (u8, u8)) {}

    fn read_axes(&mut self) -> AxisReading {
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.reads += 1;
        let base = self.current;
        AxisReading::new(self.jitter(base.x), self.jitter(base.y), base.z)
    }

    fn settle(&mut self, period: Duration) {
        self.settled += period;
        if self.sleep {
            std::thread::sleep(period);
        }
    }
}
