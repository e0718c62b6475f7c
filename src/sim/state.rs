//! Game state and core simulation types
//!
//! Everything that changes while playing lives in [`GameState`], owned by
//! the control loop and passed by reference into each tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Corner;
use super::motion::Calibration;
use super::scoring::ScoreLedger;
use super::zones::{BonusZone, GoalZone, sprite_center};
use crate::consts::{SPAWN_X, SPAWN_Y};
use crate::settings::Settings;

/// Current mode of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Sprite moves, clock runs
    #[default]
    Running,
    /// Frozen until the pause toggle fires again
    Paused,
    /// Goal reached; only reset leaves this mode
    Over,
}

/// The player's sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Top-left pixel of the 16x16 bounding box
    pub position: IVec2,
}

impl Sprite {
    pub fn center(&self) -> IVec2 {
        sprite_center(self.position)
    }
}

/// Elapsed play time as last observed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockState {
    pub elapsed_seconds: u64,
}

impl ClockState {
    /// (minutes, seconds) for display
    pub fn minutes_seconds(&self) -> (u64, u64) {
        (self.elapsed_seconds / 60, self.elapsed_seconds % 60)
    }
}

/// Something the control loop or HUD may need to react to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// One or more corners were pushed out of a wall
    WallHit { corners: Vec<Corner>, penalty: i32 },
    /// Depenetration gave up; the sprite stayed where it was
    Stuck { corner: Corner },
    BonusCollected { zone: usize, value: i32 },
    GoalReached { points: i32 },
    Paused,
    Resumed,
    Reset,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub sprite: Sprite,
    pub spawn: IVec2,
    pub ledger: ScoreLedger,
    pub clock: ClockState,
    pub bonus_zones: Vec<BonusZone>,
    pub goal: GoalZone,
    /// Level baseline; survives resets
    pub calibration: Calibration,
    /// Ticks spent in Running since the last reset
    pub running_ticks: u64,
}

impl GameState {
    /// Fresh game at the standard spawn with the standard zones
    pub fn new(calibration: Calibration, settings: &Settings) -> Self {
        Self::with_layout(
            calibration,
            settings,
            IVec2::new(SPAWN_X, SPAWN_Y),
            BonusZone::standard_set(),
            GoalZone::default(),
        )
    }

    /// Fresh game with a custom spawn and zone layout
    pub fn with_layout(
        calibration: Calibration,
        settings: &Settings,
        spawn: IVec2,
        bonus_zones: Vec<BonusZone>,
        goal: GoalZone,
    ) -> Self {
        Self {
            mode: GameMode::Running,
            sprite: Sprite { position: spawn },
            spawn,
            ledger: ScoreLedger::new(settings.starting_points),
            clock: ClockState::default(),
            bonus_zones,
            goal,
            calibration,
            running_ticks: 0,
        }
    }

    /// Reinitialize every runtime field except calibration
    pub fn reset(&mut self) {
        self.mode = GameMode::Running;
        self.sprite.position = self.spawn;
        self.ledger.reset();
        self.clock = ClockState::default();
        for zone in &mut self.bonus_zones {
            zone.collected = false;
        }
        self.running_ticks = 0;
    }

    #[inline]
    pub fn points(&self) -> i32 {
        self.ledger.points()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.mode == GameMode::Running
    }

    pub fn bonuses_remaining(&self) -> usize {
        self.bonus_zones.iter().filter(|z| !z.collected).count()
    }
}
