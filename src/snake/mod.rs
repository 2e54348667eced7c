//! Snake plugin - handles input collection and the fixed-rate simulation tick.

mod body;
mod brain;
mod graphics;

pub use body::{STARTING_LENGTH, Snake};
pub use brain::{Brain, InputData};
pub use graphics::{SegmentType, SnakeGraphics};

use bevy::log::{debug, info};
use bevy::prelude::*;

use crate::game::{
    Direction, FoodEatenEvent, GamePhase, GameSet, GameState, InputState, Session, SnakeConfig,
    TickAccumulator,
};
use crate::world::SnakeStatus;

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (snake_movement_input, snake_tick)
                .chain()
                .in_set(GameSet::Simulation),
        );
    }
}

/// System to read keyboard input into the buffer consumed by the next tick.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut input_state: ResMut<InputState>,
    session: Res<Session>,
    config: Res<SnakeConfig>,
    game_state: Res<GameState>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    if let Some(direction) = Direction::from_input(&keyboard_input) {
        let current = session.world().snake().direction();
        if !input_state.record_direction(direction, current) {
            debug!("ignored reversal {:?} while heading {:?}", direction, current);
        }
    }

    if config.brain == Brain::Debug {
        input_state.record_eat_key(keyboard_input.pressed(KeyCode::Space));
    }
}

/// System to advance the simulation once per tick interval.
fn snake_tick(
    time: Res<Time>,
    mut accumulator: ResMut<TickAccumulator>,
    mut session: ResMut<Session>,
    mut input_state: ResMut<InputState>,
    mut game_state: ResMut<GameState>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
) {
    if game_state.phase != GamePhase::Playing || !accumulator.advance(time.delta()) {
        return;
    }

    let report = session.tick(&input_state.snapshot());
    input_state.end_tick();

    if let Some(position) = report.food_eaten {
        game_state.score += 1;
        food_eaten_writer.write(FoodEatenEvent { position });
    }

    match report.status {
        SnakeStatus::Active => {}
        SnakeStatus::Dead => {
            info!("Game over! Final score: {}", game_state.score);
            game_state.finish(SnakeStatus::Dead);
        }
        SnakeStatus::Done => {
            info!("Board cleared! Final score: {}", game_state.score);
            game_state.finish(SnakeStatus::Done);
        }
    }
}
