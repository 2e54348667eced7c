//! Food plugin - keeps the food shape on the world's food cell and plays the eat effect.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    CELL_SIZE, FOOD_COLOR, FOOD_EATEN_COLOR, Food, FoodEatenEvent, FoodPulse, PulseEffect,
    Session, Z_FOOD,
};
use crate::rendering::grid_to_screen;

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_food,
                food_pulse_animation,
                spawn_food_eaten_effect,
                pulse_effect_system,
            )
                .chain(),
        );
    }
}

fn spawn_food(commands: &mut Commands, session: &Session) {
    let world = session.world();
    let Some(position) = world.food_position() else {
        return;
    };
    let center = grid_to_screen(position, world.width(), world.height());

    commands.spawn((
        ShapeBundle::circle(
            &ShapeConfig {
                color: FOOD_COLOR,
                transform: Transform::from_xyz(center.x, center.y, Z_FOOD),
                ..ShapeConfig::default_2d()
            },
            CELL_SIZE * 0.4,
        ),
        Food { position },
        FoodPulse {
            timer: Timer::from_seconds(0.8, TimerMode::Repeating),
        },
    ));
}

/// System to move the food shape when the world places food on a new cell.
fn sync_food(mut commands: Commands, session: Res<Session>, foods: Query<(Entity, &Food)>) {
    if !session.is_changed() {
        return;
    }

    let world = session.world();
    let current = world.food_position().filter(|_| !world.no_food_left());

    let mut up_to_date = false;
    for (entity, food) in foods.iter() {
        if Some(food.position) == current {
            up_to_date = true;
        } else {
            commands.entity(entity).despawn();
        }
    }

    if !up_to_date && current.is_some() {
        spawn_food(&mut commands, &session);
    }
}

/// System to animate food with a pulsing effect.
fn food_pulse_animation(
    time: Res<Time>,
    mut foods: Query<(&mut Transform, &mut FoodPulse), With<Food>>,
) {
    for (mut transform, mut pulse) in foods.iter_mut() {
        pulse.timer.tick(time.delta());

        let progress = pulse.timer.fraction();
        let scale = 1.0 + (progress * std::f32::consts::TAU).sin() * 0.15;

        transform.scale = Vec3::splat(scale);
    }
}

/// System to spawn a flash where food was eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
    session: Res<Session>,
) {
    let world = session.world();

    for event in food_eaten_reader.read() {
        let center = grid_to_screen(event.position, world.width(), world.height());

        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: FOOD_EATEN_COLOR,
                    transform: Transform::from_xyz(center.x, center.y, Z_FOOD + 0.25),
                    ..ShapeConfig::default_2d()
                },
                CELL_SIZE * 0.5,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to grow and then remove eat flashes.
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            transform.scale = Vec3::splat(
                effect.start_scale + (effect.end_scale - effect.start_scale) * progress,
            );
        }
    }
}
