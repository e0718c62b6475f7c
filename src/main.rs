//! Tilt Maze - native demo
//!
//! Plays the classic maze against simulated peripherals: a scripted, jittery
//! tilt sensor that steers the ball down the left corridor and out through
//! the exit, paced at the real sample period.

use tilt_maze::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use tilt_maze::game::{Devices, Game};
use tilt_maze::hud;
use tilt_maze::platform::{MemoryScreen, MonotonicClock, ScriptedPointer, ScriptedTiltSensor};
use tilt_maze::sim::{AxisReading, GameMode, MazeBitmap};
use tilt_maze::Settings;

/// One minute of play at the default sample period
const MAX_TICKS: u64 = 3000;

fn demo_route() -> Vec<AxisReading> {
    let down = AxisReading::new(0, 40, 64);
    let left = AxisReading::new(-40, 0, 64);
    let mut route = vec![down; 100];
    route.extend(std::iter::repeat_n(left, 8));
    route.push(down);
    route
}

fn main() {
    env_logger::init();
    log::info!("Tilt Maze (native) starting...");

    let settings = Settings::default();
    let sensor = ScriptedTiltSensor::new(demo_route(), AxisReading::new(0, 0, 64))
        .with_noise(2, 0x5EED)
        .paced();
    let devices = Devices {
        sensor,
        pointer: ScriptedPointer::new(),
        clock: MonotonicClock::new(),
        screen: MemoryScreen::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
    };

    let mut game = Game::new(MazeBitmap::classic(), settings, devices);
    let ticks = game.run_until(MAX_TICKS, |state| state.mode == GameMode::Over);

    let state = game.state();
    match state.mode {
        GameMode::Over => log::info!(
            "Exit reached after {} ticks in {} with {} points",
            ticks,
            hud::format_clock(&state.clock),
            state.points()
        ),
        _ => log::warn!(
            "Gave up after {} ticks at ({}, {}) with {} points",
            ticks,
            state.sprite.position.x,
            state.sprite.position.y,
            state.points()
        ),
    }
    log::info!(
        "{} of {} bonus zones collected",
        state.bonus_zones.len() - state.bonuses_remaining(),
        state.bonus_zones.len()
    );
}
