//! Startup configuration, built from the constants and environment overrides.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use bevy::prelude::*;

use super::{ARENA_HEIGHT, ARENA_WIDTH, GROWTH_PER_FOOD, MAX_ARENA_SIDE, MOVE_INTERVAL};
use crate::snake::{Brain, STARTING_LENGTH};

/// Configuration for the game
#[derive(Resource, Debug, Clone)]
pub struct SnakeConfig {
    /// Width of the world grid in cells
    pub world_width: usize,
    /// Height of the world grid in cells
    pub world_height: usize,
    /// Time between simulation ticks
    pub tick_interval: Duration,
    /// Segments gained per food eaten
    pub growth_per_food: u32,
    /// Input translation used for the whole run
    pub brain: Brain,
    /// Fixed seed for food placement; entropy when unset
    pub seed: Option<u64>,
    /// Tint free and occupied cells
    pub show_cell_info: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            world_width: ARENA_WIDTH,
            world_height: ARENA_HEIGHT,
            tick_interval: MOVE_INTERVAL,
            growth_per_food: GROWTH_PER_FOOD,
            brain: Brain::Normal,
            seed: None,
            show_cell_info: false,
        }
    }
}

impl SnakeConfig {
    /// Defaults overridden by `SNAKE_WIDTH`, `SNAKE_HEIGHT`, `SNAKE_SEED`,
    /// `SNAKE_BRAIN` and `SNAKE_CELL_INFO`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(width) = parse_var("SNAKE_WIDTH")? {
            config.world_width = width;
        }
        if let Some(height) = parse_var("SNAKE_HEIGHT")? {
            config.world_height = height;
        }
        if let Some(seed) = parse_var("SNAKE_SEED")? {
            config.seed = Some(seed);
        }
        if let Ok(brain) = env::var("SNAKE_BRAIN") {
            config.brain = parse_brain(&brain)?;
        }
        config.show_cell_info = matches!(env::var("SNAKE_CELL_INFO").as_deref(), Ok("1" | "true"));

        config.validate()?;
        Ok(config)
    }

    /// Rejects worlds that cannot hold the starting snake or are too large
    /// to allocate.
    pub fn validate(&self) -> Result<()> {
        // The starting body trails two cells west of the center column.
        ensure!(
            self.world_width / 2 >= STARTING_LENGTH - 1,
            "world width {} is too narrow for the starting snake",
            self.world_width
        );
        ensure!(self.world_height > 0, "world height must be positive");
        ensure!(
            self.world_width <= MAX_ARENA_SIDE && self.world_height <= MAX_ARENA_SIDE,
            "world {}x{} exceeds the {MAX_ARENA_SIDE} cell limit per side",
            self.world_width,
            self.world_height
        );
        self.world_width
            .checked_mul(self.world_height)
            .context("world cell count overflows")?;
        ensure!(
            !self.tick_interval.is_zero(),
            "tick interval must be positive"
        );
        Ok(())
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {name} value {value:?}")),
        Err(_) => Ok(None),
    }
}

fn parse_brain(value: &str) -> Result<Brain> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Ok(Brain::Normal),
        "debug" => Ok(Brain::Debug),
        other => bail!("unknown brain {other:?}, expected \"normal\" or \"debug\""),
    }
}
