mod food;
mod game;
mod math;
mod rendering;
mod snake;
mod ui;
mod world;

use anyhow::bail;
use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use food::FoodPlugin;
use game::{
    BACKGROUND_COLOR, CELL_SIZE, CameraShake, FoodEatenEvent, GameSet, GameState, InputState,
    Session, SnakeConfig, TickAccumulator,
};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

/// Margin around the arena, in pixels.
const WINDOW_PADDING: f32 = 20.0;

fn main() -> anyhow::Result<()> {
    let config = SnakeConfig::from_env()?;

    let window_width = config.world_width as f32 * CELL_SIZE + WINDOW_PADDING;
    let window_height = config.world_height as f32 * CELL_SIZE + WINDOW_PADDING;

    let exit = App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(window_width as u32, window_height as u32),
                    title: "Snake Game".to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(Session::from_config(&config))
        .insert_resource(TickAccumulator::new(config.tick_interval))
        .insert_resource(config)
        .init_resource::<GameState>()
        .init_resource::<InputState>()
        .init_resource::<CameraShake>()
        .add_message::<FoodEatenEvent>()
        .configure_sets(Update, (GameSet::Flow, GameSet::Simulation).chain())
        .add_plugins((SnakePlugin, FoodPlugin, RenderingPlugin, UiPlugin))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with code {code}"),
    }
}
