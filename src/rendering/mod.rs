//! Rendering plugin - draws the arena, grid, snake and cell overlay, and shakes the camera.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::game::{
    ARENA_COLOR, CELL_SIZE, CORNER_RADIUS, CameraShake, CellInfo, FREE_CELL_COLOR, GRID_LINE_COLOR,
    GamePhase, GameState, OCCUPIED_CELL_COLOR, Position, SNAKE_EYE_COLOR, SNAKE_INNER_COLOR,
    SNAKE_OUTER_COLOR, Session, SnakeConfig, SnakeSprite, Z_BACKGROUND, Z_CELL_INFO, Z_GRID,
    Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
};
use crate::snake::SegmentType;
use crate::world::SnakeStatus;

const GRID_LINE_THICKNESS: f32 = 1.0;

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_arena).add_systems(
            Update,
            (
                draw_cell_info,
                draw_snake,
                trigger_camera_shake_on_death,
                camera_shake_system,
            )
                .chain(),
        );
    }
}

/// Maps a grid cell to the centre of its square on screen.
///
/// Grid y grows downwards while screen y grows upwards, so the row is
/// flipped. This keeps grid-space angles valid as screen rotations.
pub fn grid_to_screen(position: Position, width: usize, height: usize) -> Vec2 {
    Vec2::new(
        (position.x as f32 - width as f32 / 2.0 + 0.5) * CELL_SIZE,
        -(position.y as f32 - height as f32 / 2.0 + 0.5) * CELL_SIZE,
    )
}

/// Rounded rectangle in a segment's local frame.
fn rounded_rect(color: Color, offset: Vec2, size: Vec2, z: f32) -> impl Bundle {
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    let corner_radius_normalized = CORNER_RADIUS / (size.min_element() / 2.0);

    ShapeBundle::rect(
        &ShapeConfig {
            color,
            corner_radii: Vec4::splat(corner_radius_normalized),
            transform: Transform::from_xyz(offset.x, offset.y, z),
            ..ShapeConfig::default_2d()
        },
        size,
    )
}

/// Arena background and grid lines.
fn setup_arena(mut commands: Commands, config: Res<SnakeConfig>) {
    let arena_width = config.world_width as f32 * CELL_SIZE;
    let arena_height = config.world_height as f32 * CELL_SIZE;

    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(Vec2::new(arena_width, arena_height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));

    let line = |center: Vec2, size: Vec2| {
        ShapeBundle::rect(
            &ShapeConfig {
                color: GRID_LINE_COLOR,
                transform: Transform::from_xyz(center.x, center.y, Z_GRID),
                ..ShapeConfig::default_2d()
            },
            size,
        )
    };

    for column in 0..=config.world_width {
        let x = column as f32 * CELL_SIZE - arena_width / 2.0;
        commands.spawn(line(
            Vec2::new(x, 0.0),
            Vec2::new(GRID_LINE_THICKNESS, arena_height),
        ));
    }
    for row in 0..=config.world_height {
        let y = row as f32 * CELL_SIZE - arena_height / 2.0;
        commands.spawn(line(
            Vec2::new(0.0, y),
            Vec2::new(arena_width, GRID_LINE_THICKNESS),
        ));
    }
}

/// System to tint every cell by occupancy when the overlay is enabled.
fn draw_cell_info(
    mut commands: Commands,
    session: Res<Session>,
    config: Res<SnakeConfig>,
    overlay: Query<Entity, With<CellInfo>>,
) {
    if !config.show_cell_info || !session.is_changed() {
        return;
    }

    for entity in overlay.iter() {
        commands.entity(entity).despawn();
    }

    let world = session.world();
    for cell in world.grid().cells() {
        let center = grid_to_screen(cell.position, world.width(), world.height());
        let color = if cell.free {
            FREE_CELL_COLOR
        } else {
            OCCUPIED_CELL_COLOR
        };

        commands.spawn((
            Sprite {
                color,
                custom_size: Some(Vec2::splat(CELL_SIZE)),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, Z_CELL_INFO),
            CellInfo,
        ));
    }
}

/// System to rebuild the snake's shapes whenever the session changed.
///
/// Each segment gets a root entity carrying its cell position and rotation;
/// the shapes under it are authored facing east.
fn draw_snake(
    mut commands: Commands,
    session: Res<Session>,
    sprites: Query<Entity, With<SnakeSprite>>,
) {
    if !session.is_changed() {
        return;
    }

    for entity in sprites.iter() {
        commands.entity(entity).despawn();
    }

    let world = session.world();
    let snake = world.snake();

    for (segment, graphic) in snake
        .segments()
        .iter()
        .zip(session.graphics().live(snake))
    {
        let center = grid_to_screen(segment.position, world.width(), world.height());
        let z = if graphic.kind == SegmentType::Head {
            Z_SNAKE_HEAD
        } else {
            Z_SNAKE_SEGMENT
        };

        commands
            .spawn((
                Transform::from_xyz(center.x, center.y, z)
                    .with_rotation(Quat::from_rotation_z(graphic.angle.to_radians())),
                Visibility::default(),
                SnakeSprite,
            ))
            .with_children(|parent| match graphic.kind {
                SegmentType::Head => {
                    parent.spawn(rounded_rect(
                        SNAKE_OUTER_COLOR,
                        Vec2::ZERO,
                        Vec2::splat(CELL_SIZE * 0.9),
                        0.0,
                    ));
                    parent.spawn(rounded_rect(
                        SNAKE_INNER_COLOR,
                        Vec2::ZERO,
                        Vec2::splat(CELL_SIZE * 0.7),
                        0.01,
                    ));

                    let eye_radius = CELL_SIZE * 0.08;
                    for side in [1.0, -1.0] {
                        parent.spawn(ShapeBundle::circle(
                            &ShapeConfig {
                                color: SNAKE_EYE_COLOR,
                                transform: Transform::from_xyz(
                                    CELL_SIZE * 0.15,
                                    side * CELL_SIZE * 0.18,
                                    0.02,
                                ),
                                ..ShapeConfig::default_2d()
                            },
                            eye_radius,
                        ));
                    }
                }
                SegmentType::Body => {
                    parent.spawn(rounded_rect(
                        SNAKE_OUTER_COLOR,
                        Vec2::ZERO,
                        Vec2::new(CELL_SIZE, CELL_SIZE * 0.8),
                        0.0,
                    ));
                    parent.spawn(rounded_rect(
                        SNAKE_INNER_COLOR,
                        Vec2::ZERO,
                        Vec2::new(CELL_SIZE, CELL_SIZE * 0.5),
                        0.01,
                    ));
                }
                SegmentType::Tail => {
                    // Tapers away from the parent, which lies to the east.
                    parent.spawn(rounded_rect(
                        SNAKE_OUTER_COLOR,
                        Vec2::new(CELL_SIZE * 0.15, 0.0),
                        Vec2::new(CELL_SIZE * 0.7, CELL_SIZE * 0.6),
                        0.0,
                    ));
                    parent.spawn(rounded_rect(
                        SNAKE_INNER_COLOR,
                        Vec2::new(CELL_SIZE * 0.2, 0.0),
                        Vec2::new(CELL_SIZE * 0.6, CELL_SIZE * 0.35),
                        0.01,
                    ));
                }
                SegmentType::Turn => {
                    // Corner joining the north and east edges.
                    let arm = CELL_SIZE * 0.9;
                    let width = CELL_SIZE * 0.8;
                    let shift = CELL_SIZE * 0.05;
                    parent.spawn(rounded_rect(
                        SNAKE_OUTER_COLOR,
                        Vec2::new(shift, 0.0),
                        Vec2::new(arm, width),
                        0.0,
                    ));
                    parent.spawn(rounded_rect(
                        SNAKE_OUTER_COLOR,
                        Vec2::new(0.0, shift),
                        Vec2::new(width, arm),
                        0.0,
                    ));
                    parent.spawn(rounded_rect(
                        SNAKE_INNER_COLOR,
                        Vec2::ZERO,
                        Vec2::splat(CELL_SIZE * 0.5),
                        0.01,
                    ));
                }
            });
    }
}

/// System to trigger camera shake when the snake dies.
fn trigger_camera_shake_on_death(
    game_state: Res<GameState>,
    mut camera_shake: ResMut<CameraShake>,
) {
    if game_state.is_changed()
        && game_state.phase == GamePhase::GameOver
        && game_state.outcome == Some(SnakeStatus::Dead)
    {
        camera_shake.timer = Timer::from_seconds(0.5, TimerMode::Once);
        camera_shake.intensity = 8.0;
    }
}

/// System to apply camera shake effect.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if camera_shake.timer.is_finished() {
        return;
    }

    camera_shake.timer.tick(time.delta());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        if camera_shake.timer.is_finished() {
            camera_transform.translation.x = 0.0;
            camera_transform.translation.y = 0.0;
        } else {
            let decay = 1.0 - camera_shake.timer.fraction();

            let mut rng = rand::rng();
            camera_transform.translation.x =
                (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
            camera_transform.translation.y =
                (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
        }
    }
}
