//! Game constants for arena size, colors, timing, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Arena dimensions
pub const ARENA_WIDTH: usize = 20;
pub const ARENA_HEIGHT: usize = 15;
// Largest accepted side length, in cells
pub const MAX_ARENA_SIDE: usize = 256;

// Visual settings
pub const CELL_SIZE: f32 = 32.0;
pub const CORNER_RADIUS: f32 = 4.0;

// Timing: five cells per second
pub const MOVE_INTERVAL: Duration = Duration::from_millis(200);

// Segments gained per food eaten
pub const GROWTH_PER_FOOD: u32 = 5;

// Colors
pub const SNAKE_OUTER_COLOR: Color = Color::srgba(0.0, 0.40, 0.25, 1.0);
pub const SNAKE_INNER_COLOR: Color = Color::srgba(0.0, 0.57, 0.25, 1.0);
pub const SNAKE_EYE_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const FOOD_EATEN_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const ARENA_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const GRID_LINE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);
pub const FREE_CELL_COLOR: Color = Color::srgba(0.0, 0.0, 0.125, 1.0);
pub const OCCUPIED_CELL_COLOR: Color = Color::srgba(0.125, 0.0, 0.0, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_CELL_INFO: f32 = 0.5;
pub const Z_GRID: f32 = 0.75;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
