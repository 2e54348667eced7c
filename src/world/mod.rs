//! The playing field: occupancy grid, food placement and the snake itself.

mod grid;

pub use grid::Grid;

use bevy::log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::game::Position;
use crate::snake::{Brain, InputData, Snake};

/// Outcome of a world update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStatus {
    /// There is food to be eaten (still playing).
    Active,
    /// All food eaten, the player won.
    Done,
    /// The snake hit a wall or itself.
    Dead,
}

/// Grid, food and snake for one play session.
pub struct World<R = StdRng> {
    grid: Grid,
    food: Option<usize>,
    no_food_left: bool,
    snake: Snake,
    growth_per_food: u32,
    rng: R,
}

impl<R: Rng> World<R> {
    pub fn new(width: usize, height: usize, growth_per_food: u32, rng: R) -> Self {
        let mut world = Self {
            grid: Grid::new(width, height),
            food: None,
            no_food_left: false,
            snake: Snake::new(width, height),
            growth_per_food,
            rng,
        };

        world.snake.mark_occupied_cells(&mut world.grid);
        world.generate_food();
        world
    }

    /// Advances the world by one tick.
    pub fn update(&mut self, brain: &Brain, input: &InputData) -> SnakeStatus {
        // A cleared board leaves the snake still, so nothing from the
        // winning move may carry over.
        self.snake.begin_update();

        if self.no_food_left {
            return SnakeStatus::Done;
        }

        self.grid.clear_all();

        // Keep the food cell claimed so it can't be picked again.
        if let Some(food) = self.food {
            self.grid.occupy_index(food);
        }

        self.snake.update(brain, input, &mut self.grid);

        if self.snake.is_dead() {
            return SnakeStatus::Dead;
        }

        if self.food_position() == Some(self.snake.head()) {
            self.snake.eat_food(self.growth_per_food);
            self.generate_food();

            if self.no_food_left {
                return SnakeStatus::Done;
            }
        }

        SnakeStatus::Active
    }

    /// Puts the world back into its starting state.
    pub fn reset(&mut self) {
        self.grid.clear_all();
        self.no_food_left = false;
        self.food = None;
        self.snake.reset();
        self.snake.mark_occupied_cells(&mut self.grid);
        self.generate_food();
    }

    /// Places food on a uniformly chosen free cell, or flags the board as
    /// cleared when there is none.
    fn generate_food(&mut self) {
        let free_cells = self.grid.free_cells();

        debug_assert_eq!(
            free_cells.len(),
            self.grid.len() - self.snake.len(),
            "snake occupancy must be marked before food is generated"
        );

        if free_cells.is_empty() {
            info!("no free cells left, board cleared");
            self.no_food_left = true;
            return;
        }

        let index = free_cells[self.rng.random_range(0..=free_cells.len() - 1)];
        self.grid.occupy_index(index);
        self.food = Some(index);

        let position = self.grid.cell(index).position;
        debug!("food placed at ({}, {})", position.x, position.y);
    }

    pub fn food_position(&self) -> Option<Position> {
        self.food.map(|index| self.grid.cell(index).position)
    }

    pub fn no_food_left(&self) -> bool {
        self.no_food_left
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, position: Position) {
        self.food = Some(self.grid.index_of(position.x, position.y));
    }
}
