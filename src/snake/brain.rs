//! Translates the player's input into snake commands.

use super::body::Snake;
use crate::game::Direction;
use crate::world::Grid;

/// Input gathered between two ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputData {
    /// Last direction the player requested that was not a reversal.
    pub last_input_dir: Option<Direction>,
    /// A valid direction key was hit since the previous tick.
    pub direction_pressed: bool,
    /// The debug eat key was held.
    pub eat_requested: bool,
}

/// Determines snake behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Brain {
    /// Keeps the snake moving every tick.
    #[default]
    Normal,
    /// Moves only on key presses and grows on demand.
    Debug,
}

impl Brain {
    pub fn update(&self, snake: &mut Snake, input: &InputData, grid: &mut Grid) {
        match self {
            Brain::Normal => snake.simulate(input.last_input_dir, grid),
            Brain::Debug => {
                if input.eat_requested {
                    snake.eat_food(1);
                }

                if input.direction_pressed {
                    assert!(
                        input.last_input_dir.is_some(),
                        "move key was recorded but no direction was stored"
                    );
                    snake.simulate(input.last_input_dir, grid);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_brain_always_moves() {
        let mut grid = Grid::new(10, 10);
        let mut snake = Snake::new(10, 10);

        Brain::Normal.update(&mut snake, &InputData::default(), &mut grid);

        assert!(snake.moved());
        assert_eq!(snake.head().x, 6);
    }

    #[test]
    fn test_normal_brain_forwards_last_direction() {
        let mut grid = Grid::new(10, 10);
        let mut snake = Snake::new(10, 10);
        let input = InputData {
            last_input_dir: Some(Direction::North),
            ..Default::default()
        };

        Brain::Normal.update(&mut snake, &input, &mut grid);

        assert_eq!(snake.direction(), Direction::North);
        assert_eq!(snake.head().y, 4);
    }

    #[test]
    fn test_debug_brain_waits_for_key() {
        let mut grid = Grid::new(10, 10);
        let mut snake = Snake::new(10, 10);
        let head = snake.head();
        let input = InputData {
            last_input_dir: Some(Direction::East),
            direction_pressed: false,
            eat_requested: false,
        };

        snake.update(&Brain::Debug, &input, &mut grid);

        assert!(!snake.moved());
        assert_eq!(snake.head(), head);
        // Occupancy is still refreshed.
        assert!(!grid.is_free(head.x, head.y));
    }

    #[test]
    fn test_debug_brain_eat_key_grows() {
        let mut grid = Grid::new(10, 10);
        let mut snake = Snake::new(10, 10);
        let input = InputData {
            last_input_dir: Some(Direction::East),
            direction_pressed: true,
            eat_requested: true,
        };

        Brain::Debug.update(&mut snake, &input, &mut grid);

        assert!(snake.moved());
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.grow_counter(), 0);
    }

    #[test]
    #[should_panic(expected = "no direction was stored")]
    fn test_debug_brain_press_without_direction_panics() {
        let mut grid = Grid::new(10, 10);
        let mut snake = Snake::new(10, 10);
        let input = InputData {
            last_input_dir: None,
            direction_pressed: true,
            eat_requested: false,
        };

        Brain::Debug.update(&mut snake, &input, &mut grid);
    }
}
