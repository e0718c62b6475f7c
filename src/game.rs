//! Fixed-cadence control loop
//!
//! Each pass polls the pointer for pause/reset edges, samples the tilt
//! sensor while Running (the only blocking step), advances the simulation
//! and then mirrors the outcome onto the play clock and the screen.

use std::time::Duration;

use glam::IVec2;

use crate::hud;
use crate::platform::sensor::SPI_FREQ_HZ;
use crate::platform::{
    ElapsedClock, FrameBuffer, InputTracker, OnScreenDisplay, PointingDevice, TiltSensor,
};
use crate::settings::Settings;
use crate::sim::{
    BonusZone, Calibration, GameEvent, GameState, GoalZone, MazeBitmap, TickInput, normalize, tick,
};

/// The peripherals a game runs against
#[derive(Debug)]
pub struct Devices<T, P, C, S> {
    pub sensor: T,
    pub pointer: P,
    pub clock: C,
    pub screen: S,
}

/// Game instance holding all state and peripherals
pub struct Game<T, P, C, S> {
    state: GameState,
    maze: MazeBitmap,
    settings: Settings,
    devices: Devices<T, P, C, S>,
    input: InputTracker,
    ticks: u64,
}

impl<T, P, C, S> Game<T, P, C, S>
where
    T: TiltSensor,
    P: PointingDevice,
    C: ElapsedClock,
    S: FrameBuffer + OnScreenDisplay,
{
    /// Calibrate, draw the playfield and start the clock with the standard layout
    pub fn new(maze: MazeBitmap, settings: Settings, devices: Devices<T, P, C, S>) -> Self {
        Self::build(maze, settings, devices, |calibration, settings| {
            GameState::new(calibration, settings)
        })
    }

    /// Like [`Game::new`] with a custom spawn and zone layout
    pub fn with_layout(
        maze: MazeBitmap,
        settings: Settings,
        devices: Devices<T, P, C, S>,
        spawn: IVec2,
        bonus_zones: Vec<BonusZone>,
        goal: GoalZone,
    ) -> Self {
        Self::build(maze, settings, devices, move |calibration, settings| {
            GameState::with_layout(calibration, settings, spawn, bonus_zones, goal)
        })
    }

    fn build(
        maze: MazeBitmap,
        settings: Settings,
        mut devices: Devices<T, P, C, S>,
        make_state: impl FnOnce(Calibration, &Settings) -> GameState,
    ) -> Self {
        // Board is assumed level and still while the baseline is taken
        devices.sensor.configure(SPI_FREQ_HZ, (0, 0));
        let calibration = Calibration::capture(devices.sensor.read_axes(), &settings);
        let state = make_state(calibration, &settings);

        let mut game = Self {
            state,
            maze,
            settings,
            devices,
            input: InputTracker::new(),
            ticks: 0,
        };
        game.restart();
        log::info!(
            "Game started: spawn ({}, {}), {} bonus zones",
            game.state.spawn.x,
            game.state.spawn.y,
            game.state.bonus_zones.len()
        );
        game
    }

    /// Run one control-loop pass
    pub fn step(&mut self) -> Vec<GameEvent> {
        self.ticks += 1;

        let edges = self.input.poll(&mut self.devices.pointer);

        let tilt = if self.state.is_running() {
            let reading = self.devices.sensor.read_axes();
            self.devices
                .sensor
                .settle(Duration::from_millis(self.settings.sample_period_ms));
            Some(normalize(reading, &self.settings))
        } else {
            None
        };
        let played = tilt.is_some();

        let input = TickInput {
            pause: edges.pause,
            reset: edges.reset,
            tilt,
            elapsed_seconds: self.devices.clock.elapsed_seconds(),
        };
        let events = tick(&mut self.state, &self.maze, &self.settings, &input);

        if played {
            hud::draw_status(
                &mut self.devices.screen,
                &self.state.clock,
                self.state.points(),
            );
        }
        self.react(&events);
        events
    }

    /// Run until `done` returns true or `max_ticks` passes elapse; returns passes run
    pub fn run_until(&mut self, max_ticks: u64, mut done: impl FnMut(&GameState) -> bool) -> u64 {
        let mut ran = 0;
        while ran < max_ticks && !done(&self.state) {
            self.step();
            ran += 1;
        }
        ran
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn react(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::BonusCollected { zone, .. } => {
                    if let Some(zone) = self.state.bonus_zones.get(*zone) {
                        hud::draw_bonus_zone(&mut self.devices.screen, zone);
                    }
                }
                GameEvent::GoalReached { .. } => {
                    self.devices.clock.pause();
                    hud::draw_game_over(&mut self.devices.screen);
                }
                GameEvent::Paused => self.devices.clock.pause(),
                GameEvent::Resumed => self.devices.clock.resume(),
                GameEvent::Reset => self.restart(),
                GameEvent::WallHit { .. } | GameEvent::Stuck { .. } => {}
            }
        }
    }

    /// Repaint everything and restart the play clock from zero
    fn restart(&mut self) {
        hud::redraw(&mut self.devices.screen, &self.maze, &self.state);
        self.devices.clock.reset();
        self.devices.clock.start();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn maze(&self) -> &MazeBitmap {
        &self.maze
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn devices(&self) -> &Devices<T, P, C, S> {
        &self.devices
    }

    pub fn devices_mut(&mut self) -> &mut Devices<T, P, C, S> {
        &mut self.devices
    }

    /// Control-loop passes since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
