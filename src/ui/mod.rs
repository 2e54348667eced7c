//! UI plugin - handles menus, game over screen, score display, and game flow.

use bevy::log::info;
use bevy::prelude::*;

use crate::game::{
    GameOverUI, GamePhase, GameSet, GameState, InputState, MenuUI, ScoreText, Session,
    SnakeConfig, TickAccumulator,
};
use crate::snake::Brain;
use crate::world::SnakeStatus;

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                quit_on_escape,
                start_game_from_menu,
                restart_game,
                update_score_text,
                spawn_game_over_screen_system,
            )
                .chain()
                .in_set(GameSet::Flow),
        );
    }
}

fn text_font(font_size: f32) -> TextFont {
    TextFont {
        font_size,
        ..default()
    }
}

/// Initial setup system - camera, score text, start menu.
fn setup_system(mut commands: Commands, game_state: Res<GameState>, config: Res<SnakeConfig>) {
    info!(
        "{}x{} arena, {:?} brain, seed {:?}",
        config.world_width, config.world_height, config.brain, config.seed
    );

    commands.spawn(Camera2d);

    commands.spawn((
        Text::from("Score: 0"),
        text_font(20.0),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    if game_state.phase == GamePhase::Menu {
        spawn_start_menu(&mut commands, config.brain);
    }
}

/// A full-screen, centered column overlay.
fn overlay(alpha: f32) -> (Node, BackgroundColor) {
    (
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, alpha)),
    )
}

fn spaced(margin: f32) -> Node {
    Node {
        margin: UiRect::bottom(Val::Px(margin)),
        ..default()
    }
}

/// Spawns the start menu UI.
fn spawn_start_menu(commands: &mut Commands, brain: Brain) {
    let hint = Color::srgba(0.8, 0.8, 0.8, 1.0);

    commands
        .spawn((overlay(0.85), MenuUI))
        .with_children(|parent| {
            parent.spawn((
                Text::from("SNAKE"),
                text_font(80.0),
                TextColor(Color::srgba(0.3, 1.0, 0.3, 1.0)),
                spaced(40.0),
            ));

            parent.spawn((
                Text::from("CONTROLS"),
                text_font(24.0),
                TextColor(Color::WHITE),
                spaced(15.0),
            ));

            parent.spawn((
                Text::from("Arrow Keys or WASD to move"),
                text_font(18.0),
                TextColor(hint),
                spaced(10.0),
            ));

            if brain == Brain::Debug {
                parent.spawn((
                    Text::from("Debug: the snake moves only on key presses, hold SPACE to grow"),
                    text_font(18.0),
                    TextColor(hint),
                    spaced(10.0),
                ));
            }

            parent.spawn((
                Text::from("Don't hit the walls or yourself!"),
                text_font(18.0),
                TextColor(hint),
                spaced(10.0),
            ));

            parent.spawn((
                Text::from("ESC to quit"),
                text_font(18.0),
                TextColor(hint),
                spaced(40.0),
            ));

            parent.spawn((
                Text::from("Press SPACE to start"),
                text_font(24.0),
                TextColor(Color::srgba(1.0, 1.0, 0.3, 1.0)),
            ));
        });
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, outcome: Option<SnakeStatus>, score: usize) {
    let (title, color) = match outcome {
        Some(SnakeStatus::Done) => ("YOU WIN", Color::srgba(0.3, 1.0, 0.3, 1.0)),
        _ => ("GAME OVER", Color::srgba(1.0, 0.3, 0.3, 1.0)),
    };

    commands
        .spawn((overlay(0.7), GameOverUI))
        .with_children(|parent| {
            parent.spawn((
                Text::from(title),
                text_font(60.0),
                TextColor(color),
                spaced(20.0),
            ));

            parent.spawn((
                Text::from(format!("Final Score: {}", score)),
                text_font(30.0),
                TextColor(Color::WHITE),
                spaced(30.0),
            ));

            parent.spawn((
                Text::from("Press SPACE to restart"),
                text_font(20.0),
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

/// System to spawn game over screen when game ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    game_state: Res<GameState>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game_state.is_changed() && game_state.phase == GamePhase::GameOver && game_over_ui.is_empty()
    {
        spawn_game_over_screen(&mut commands, game_state.outcome, game_state.score);
    }
}

/// Puts every per-round resource back to its starting state and enters play.
fn begin_round(
    session: &mut Session,
    game_state: &mut GameState,
    input_state: &mut InputState,
    accumulator: &mut TickAccumulator,
) {
    session.reset();
    input_state.clear();
    accumulator.reset();
    game_state.start();
    info!("Round started");
}

/// System to start the game from the menu.
fn start_game_from_menu(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut session: ResMut<Session>,
    mut input_state: ResMut<InputState>,
    mut accumulator: ResMut<TickAccumulator>,
    menu_ui: Query<Entity, With<MenuUI>>,
) {
    if game_state.phase == GamePhase::Menu && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in menu_ui.iter() {
            commands.entity(entity).despawn();
        }

        begin_round(
            &mut session,
            &mut game_state,
            &mut input_state,
            &mut accumulator,
        );
    }
}

/// System to restart the game from game over screen.
fn restart_game(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut session: ResMut<Session>,
    mut input_state: ResMut<InputState>,
    mut accumulator: ResMut<TickAccumulator>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game_state.phase == GamePhase::GameOver && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn();
        }

        begin_round(
            &mut session,
            &mut game_state,
            &mut input_state,
            &mut accumulator,
        );
    }
}

/// System to update the score display.
fn update_score_text(game_state: Res<GameState>, mut query: Query<&mut Text, With<ScoreText>>) {
    if !game_state.is_changed() {
        return;
    }

    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(format!("Score: {}", game_state.score));
    }
}

/// System to exit the app when Escape is pressed.
fn quit_on_escape(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}
