//! Elapsed play clocks

use std::time::{Duration, Instant};

use super::ElapsedClock;

/// Wall-clock backed play timer
#[derive(Debug, Clone, Default)]
pub struct MonotonicClock {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + since.elapsed(),
            None => self.accumulated,
        }
    }
}

impl ElapsedClock for MonotonicClock {
    fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    fn resume(&mut self) {
        self.start();
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        if self.running_since.is_some() {
            self.running_since = Some(Instant::now());
        }
    }

    fn read_microseconds(&self) -> u64 {
        u64::try_from(self.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// Hand-advanced clock for deterministic runs
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    micros: u64,
    running: bool,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward; only counts while running
    pub fn advance(&mut self, duration: Duration) {
        if self.running {
            let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
            self.micros = self.micros.saturating_add(micros);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl ElapsedClock for ManualClock {
    fn start(&mut self) {
        self.running = true;
    }

    fn pause(&mut self) {
        self.running = false;
    }

    fn resume(&mut self) {
        self.running = true;
    }

    fn reset(&mut self) {
        self.micros = 0;
    }

    fn read_microseconds(&self) -> u64 {
        self.micros
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_counts_only_while_running() {
        let mut clock = ManualClock::new();
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.elapsed_seconds(), 0);

        clock.start();
        clock.advance(Duration::from_millis(2500));
        assert_eq!(clock.elapsed_seconds(), 2);

        clock.pause();
        clock.advance(Duration::from_secs(10));
        assert_eq!(clock.read_microseconds(), 2_500_000);

        clock.resume();
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.elapsed_seconds(), 3);

        clock.reset();
        assert_eq!(clock.read_microseconds(), 0);
        assert!(clock.is_running());
    }

    #[test]
    fn test_monotonic_clock_pause_freezes() {
        let mut clock = MonotonicClock::new();
        assert_eq!(clock.read_microseconds(), 0);
        clock.start();
        std::thread::sleep(Duration::from_millis(2));
        clock.pause();
        let frozen = clock.read_microseconds();
        assert!(frozen >= 2_000);
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.read_microseconds(), frozen);

        clock.reset();
        assert_eq!(clock.read_microseconds(), 0);
        assert!(!clock.is_running());
    }
}
