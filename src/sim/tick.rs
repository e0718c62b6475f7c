//! Fixed-cadence simulation tick
//!
//! One call advances the game by one control-loop pass. Gameplay (motion,
//! collision, scoring, zone checks) only runs while the mode is Running;
//! pause and reset requests latched from input are applied afterwards.

use glam::Vec2;

use super::collision::resolve;
use super::maze::MazeBitmap;
use super::motion::{apply_motion, integrate};
use super::state::{GameEvent, GameMode, GameState};
use super::zones::{check_bonus, check_goal};
use crate::error::CollisionError;
use crate::settings::Settings;

/// Inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pause toggle fired this tick
    pub pause: bool,
    /// Reset request fired this tick
    pub reset: bool,
    /// Normalized tilt sample; ignored unless Running
    pub tilt: Option<Vec2>,
    /// Whole seconds on the play clock since the last reset
    pub elapsed_seconds: u64,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(
    state: &mut GameState,
    maze: &MazeBitmap,
    settings: &Settings,
    input: &TickInput,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.mode == GameMode::Running {
        if let Some(sample) = input.tilt {
            step_gameplay(state, maze, settings, sample, input.elapsed_seconds, &mut events);
        }
    }

    apply_transitions(state, input, &mut events);
    events
}

fn step_gameplay(
    state: &mut GameState,
    maze: &MazeBitmap,
    settings: &Settings,
    sample: Vec2,
    elapsed_seconds: u64,
    events: &mut Vec<GameEvent>,
) {
    state.running_ticks += 1;

    // Motion
    let motion = integrate(sample, &state.calibration, settings);
    let previous = state.sprite.position;
    let tentative = apply_motion(previous, &motion);
    log::trace!(
        "tick {}: tilt ({:.3}, {:.3}) velocity {:?} active {:?}",
        state.running_ticks,
        sample.x,
        sample.y,
        motion.velocity,
        motion.active
    );

    // Collision
    match resolve(maze, tentative, settings.resolver_step_cap) {
        Ok(resolution) => {
            state.sprite.position = resolution.position;
            if resolution.hit_wall() {
                let penalty = resolution.penalty(settings.wall_penalty);
                state.ledger.apply_penalty(penalty);
                log::debug!("Wall hit at {:?}: -{} points", resolution.corners, penalty);
                events.push(GameEvent::WallHit {
                    corners: resolution.corners,
                    penalty,
                });
            }
        }
        Err(err) => {
            log::warn!("{err}; holding previous position");
            let CollisionError::Stuck { corner, .. } = err;
            state.sprite.position = previous;
            events.push(GameEvent::Stuck { corner });
        }
    }

    // Score / timer
    state.ledger.tick(elapsed_seconds);
    state.clock.elapsed_seconds = elapsed_seconds;

    // Zones
    let center = state.sprite.center();
    for bonus in check_bonus(center, &mut state.bonus_zones, settings.bonus_value) {
        state.ledger.apply_bonus(bonus.value);
        log::debug!("Bonus {} collected: +{}", bonus.zone, bonus.value);
        events.push(GameEvent::BonusCollected {
            zone: bonus.zone,
            value: bonus.value,
        });
    }

    if check_goal(center, &state.goal) {
        state.mode = GameMode::Over;
        log::info!(
            "Goal reached in {}s with {} points",
            elapsed_seconds,
            state.points()
        );
        events.push(GameEvent::GoalReached {
            points: state.points(),
        });
    }
}

fn apply_transitions(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.reset {
        state.reset();
        log::info!("Game reset");
        events.push(GameEvent::Reset);
        return;
    }

    if input.pause {
        match state.mode {
            GameMode::Running => {
                state.mode = GameMode::Paused;
                log::debug!("Paused");
                events.push(GameEvent::Paused);
            }
            GameMode::Paused => {
                state.mode = GameMode::Running;
                log::debug!("Resumed");
                events.push(GameEvent::Resumed);
            }
            GameMode::Over => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Corner;
    use crate::sim::motion::Calibration;
    use crate::sim::zones::{BonusZone, GoalZone};
    use glam::IVec2;

    /// 100x100 bordered room, spawn (10, 10), one bonus at (40, 10), goal at (70, 70)
    fn room_game() -> (GameState, MazeBitmap, Settings) {
        let settings = Settings::default();
        let maze = MazeBitmap::builder(100, 100).unwrap().border(8).build();
        let state = GameState::with_layout(
            Calibration::default(),
            &settings,
            IVec2::new(10, 10),
            vec![BonusZone::new(40, 10)],
            GoalZone::new(70, 70),
        );
        (state, maze, settings)
    }

    fn tilt(x: f32, y: f32, elapsed_seconds: u64) -> TickInput {
        TickInput {
            tilt: Some(Vec2::new(x, y)),
            elapsed_seconds,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_clamps_into_room_corner() {
        let (mut state, maze, settings) = room_game();
        // Deviation -2/3 gives velocity -10, clamped to -5
        let events = tick(&mut state, &maze, &settings, &tilt(-0.667, -0.667, 0));
        assert_eq!(state.sprite.position, IVec2::new(8, 8));
        assert_eq!(state.points(), 995);
        assert_eq!(
            events,
            vec![GameEvent::WallHit {
                corners: vec![Corner::TopLeft],
                penalty: 5
            }]
        );
    }

    #[test]
    fn test_level_board_does_not_move() {
        let (mut state, maze, settings) = room_game();
        let events = tick(&mut state, &maze, &settings, &tilt(0.05, -0.05, 0));
        assert!(events.is_empty());
        assert_eq!(state.sprite.position, IVec2::new(10, 10));
        assert_eq!(state.running_ticks, 1);
    }

    #[test]
    fn test_time_is_charged_while_running() {
        let (mut state, maze, settings) = room_game();
        tick(&mut state, &maze, &settings, &tilt(0.0, 0.0, 2));
        assert_eq!(state.points(), 998);
        assert_eq!(state.clock.elapsed_seconds, 2);
    }

    #[test]
    fn test_bonus_pays_once() {
        let (mut state, maze, settings) = room_game();
        state.sprite.position = IVec2::new(36, 10);
        // Center (44, 18) is inside the bonus at (40, 10)
        let events = tick(&mut state, &maze, &settings, &tilt(0.0, 0.0, 0));
        assert_eq!(events, vec![GameEvent::BonusCollected { zone: 0, value: 100 }]);
        assert_eq!(state.points(), 1100);

        let events = tick(&mut state, &maze, &settings, &tilt(0.0, 0.0, 0));
        assert!(events.is_empty());
        assert_eq!(state.points(), 1100);
    }

    #[test]
    fn test_goal_ends_game_once() {
        let (mut state, maze, settings) = room_game();
        state.sprite.position = IVec2::new(60, 60);
        // Move (+5, +5): center lands on (73, 73)
        let events = tick(&mut state, &maze, &settings, &tilt(0.4, 0.4, 1));
        assert_eq!(events, vec![GameEvent::GoalReached { points: 999 }]);
        assert_eq!(state.mode, GameMode::Over);

        let frozen = state.sprite.position;
        let events = tick(&mut state, &maze, &settings, &tilt(0.4, 0.4, 9));
        assert!(events.is_empty());
        assert_eq!(state.sprite.position, frozen);
        assert_eq!(state.points(), 999);
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let (mut state, maze, settings) = room_game();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &maze, &settings, &pause), vec![GameEvent::Paused]);
        assert_eq!(state.mode, GameMode::Paused);

        // Paused: tilt and time are ignored
        tick(&mut state, &maze, &settings, &tilt(0.4, 0.4, 5));
        assert_eq!(state.sprite.position, IVec2::new(10, 10));
        assert_eq!(state.points(), 1000);

        assert_eq!(tick(&mut state, &maze, &settings, &pause), vec![GameEvent::Resumed]);
        assert_eq!(state.mode, GameMode::Running);
    }

    #[test]
    fn test_pause_applies_after_gameplay() {
        let (mut state, maze, settings) = room_game();
        let input = TickInput {
            pause: true,
            ..tilt(0.4, 0.0, 0)
        };
        tick(&mut state, &maze, &settings, &input);
        assert_eq!(state.sprite.position, IVec2::new(15, 10));
        assert_eq!(state.mode, GameMode::Paused);
    }

    #[test]
    fn test_pause_is_ignored_when_over() {
        let (mut state, maze, settings) = room_game();
        state.mode = GameMode::Over;
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &maze, &settings, &pause).is_empty());
        assert_eq!(state.mode, GameMode::Over);
    }

    #[test]
    fn test_reset_from_any_mode() {
        for mode in [GameMode::Running, GameMode::Paused, GameMode::Over] {
            let (mut state, maze, settings) = room_game();
            tick(&mut state, &maze, &settings, &tilt(0.4, 0.4, 12));
            state.bonus_zones[0].collected = true;
            state.mode = mode;

            let reset = TickInput {
                reset: true,
                pause: true,
                ..Default::default()
            };
            let events = tick(&mut state, &maze, &settings, &reset);
            assert_eq!(events, vec![GameEvent::Reset]);
            assert_eq!(state.mode, GameMode::Running);
            assert_eq!(state.sprite.position, IVec2::new(10, 10));
            assert_eq!(state.points(), 1000);
            assert_eq!(state.clock.elapsed_seconds, 0);
            assert_eq!(state.bonuses_remaining(), 1);
        }
    }

    #[test]
    fn test_stuck_sprite_holds_position() {
        let settings = Settings {
            resolver_step_cap: 16,
            ..Settings::default()
        };
        // Fully solid maze: no move can ever be resolved
        let maze = MazeBitmap::builder(32, 32)
            .unwrap()
            .wall_rect(0, 0, 32, 32)
            .build();
        let mut state = GameState::with_layout(
            Calibration::default(),
            &settings,
            IVec2::new(4, 4),
            Vec::new(),
            GoalZone::new(500, 500),
        );
        let events = tick(&mut state, &maze, &settings, &tilt(0.4, 0.0, 0));
        assert_eq!(events, vec![GameEvent::Stuck { corner: Corner::TopLeft }]);
        assert_eq!(state.sprite.position, IVec2::new(4, 4));
        assert_eq!(state.points(), 1000);
    }
}
