//! Game resources (singleton state).

use bevy::prelude::*;
use std::time::Duration;

use super::Direction;
use crate::snake::InputData;
use crate::world::SnakeStatus;

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Update-schedule ordering: round start/restart runs before input is
/// collected and the simulation ticks.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Flow,
    Simulation,
}

/// Main game state resource.
#[derive(Resource, Default)]
pub struct GameState {
    pub score: usize,
    pub phase: GamePhase,
    /// How the last session ended.
    pub outcome: Option<SnakeStatus>,
}

impl GameState {
    /// Starts a fresh round.
    pub fn start(&mut self) {
        self.score = 0;
        self.outcome = None;
        self.phase = GamePhase::Playing;
    }

    /// Ends the round with a terminal status.
    pub fn finish(&mut self, status: SnakeStatus) {
        self.outcome = Some(status);
        self.phase = GamePhase::GameOver;
    }
}

/// Input collected between simulation ticks.
#[derive(Resource, Default)]
pub struct InputState {
    last_input_dir: Option<Direction>,
    direction_pressed: bool,
    eat_requested: bool,
    /// The eat key has been up since the round began.
    eat_key_released: bool,
}

impl InputState {
    /// Records a requested direction unless it would reverse the snake onto
    /// itself. Returns whether it was accepted.
    pub fn record_direction(&mut self, requested: Direction, current: Direction) -> bool {
        if requested == current.opposite() {
            return false;
        }
        self.last_input_dir = Some(requested);
        self.direction_pressed = true;
        true
    }

    /// Feeds the debug eat key's held state. Holding it requests one growth
    /// per tick, but only once it has been released after the round began,
    /// since the same key starts the round.
    pub fn record_eat_key(&mut self, held: bool) {
        if !held {
            self.eat_key_released = true;
        } else if self.eat_key_released {
            self.eat_requested = true;
        }
    }

    /// Snapshot handed to the brain for the coming tick.
    pub fn snapshot(&self) -> InputData {
        InputData {
            last_input_dir: self.last_input_dir,
            direction_pressed: self.direction_pressed,
            eat_requested: self.eat_requested,
        }
    }

    /// Clears the per-tick flags; the last direction is remembered.
    pub fn end_tick(&mut self) {
        self.direction_pressed = false;
        self.eat_requested = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Fixed-rate simulation pacing.
///
/// Frame time is subtracted from the countdown; when it drops to zero one
/// tick runs and a full interval is added back. Missed ticks are not caught
/// up, the leftover simply carries into the next countdown.
#[derive(Resource)]
pub struct TickAccumulator {
    interval: f32,
    time_until_tick: f32,
}

impl TickAccumulator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            time_until_tick: 0.0,
        }
    }

    /// Consumes `delta` and reports whether a tick is due.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.time_until_tick -= delta.as_secs_f32();

        if self.time_until_tick <= 0.0 {
            self.time_until_tick += self.interval;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.time_until_tick = self.interval;
    }
}

/// Resource for camera shake effect.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        CameraShake {
            timer: Timer::from_seconds(0.0, TimerMode::Once),
            intensity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_ticks_immediately() {
        let mut accumulator = TickAccumulator::new(Duration::from_millis(200));
        assert!(accumulator.advance(Duration::from_millis(16)));
        assert!(!accumulator.advance(Duration::from_millis(16)));
    }

    #[test]
    fn test_one_tick_per_interval() {
        let mut accumulator = TickAccumulator::new(Duration::from_millis(100));
        accumulator.reset();

        let ticks = (0..10)
            .filter(|_| accumulator.advance(Duration::from_millis(25)))
            .count();

        assert_eq!(ticks, 2);
    }

    #[test]
    fn test_long_frame_does_not_catch_up() {
        let mut accumulator = TickAccumulator::new(Duration::from_millis(100));
        accumulator.reset();

        assert!(accumulator.advance(Duration::from_millis(350)));
        // Still behind, but only one tick per frame.
        assert!(accumulator.advance(Duration::from_millis(1)));
        assert!(accumulator.advance(Duration::from_millis(1)));
        assert!(!accumulator.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut input = InputState::default();

        assert!(!input.record_direction(Direction::West, Direction::East));
        assert_eq!(input.snapshot(), InputData::default());

        assert!(input.record_direction(Direction::North, Direction::East));
        let snapshot = input.snapshot();
        assert_eq!(snapshot.last_input_dir, Some(Direction::North));
        assert!(snapshot.direction_pressed);
    }

    #[test]
    fn test_end_tick_keeps_direction() {
        let mut input = InputState::default();
        input.record_direction(Direction::South, Direction::East);
        input.record_eat_key(false);
        input.record_eat_key(true);
        assert!(input.snapshot().eat_requested);

        input.end_tick();

        let snapshot = input.snapshot();
        assert_eq!(snapshot.last_input_dir, Some(Direction::South));
        assert!(!snapshot.direction_pressed);
        assert!(!snapshot.eat_requested);
    }

    #[test]
    fn test_game_state_transitions() {
        let mut state = GameState::default();
        assert_eq!(state.phase, GamePhase::Menu);

        state.start();
        state.score = 4;
        assert_eq!(state.phase, GamePhase::Playing);

        state.finish(SnakeStatus::Dead);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.outcome, Some(SnakeStatus::Dead));

        state.start();
        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn test_eat_key_held_from_round_start_is_ignored() {
        let mut input = InputState::default();
        input.clear();

        input.record_eat_key(true);
        input.record_eat_key(true);
        assert!(!input.snapshot().eat_requested);

        input.record_eat_key(false);
        input.record_eat_key(true);
        assert!(input.snapshot().eat_requested);

        input.end_tick();
        input.record_eat_key(true);
        assert!(input.snapshot().eat_requested);

        input.clear();
        input.record_eat_key(true);
        assert!(!input.snapshot().eat_requested);
    }
}
