//! Grid primitives and ECS marker components for the snake game.

use bevy::prelude::*;

/// Integral cell coordinate on the world grid (x right, y down).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Vector pointing from `self` to `other`.
    pub fn delta_to(self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// The four cardinal directions the snake can move in.
///
/// Vectors are in world space, so `North` points towards decreasing y.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        let (dx, dy) = self.delta();
        Vec2::new(dx as f32, dy as f32)
    }

    /// Reads the direction keys pressed this frame.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
        if keyboard_input.just_pressed(KeyCode::ArrowLeft)
            || keyboard_input.just_pressed(KeyCode::KeyA)
        {
            Some(Direction::West)
        } else if keyboard_input.just_pressed(KeyCode::ArrowRight)
            || keyboard_input.just_pressed(KeyCode::KeyD)
        {
            Some(Direction::East)
        } else if keyboard_input.just_pressed(KeyCode::ArrowUp)
            || keyboard_input.just_pressed(KeyCode::KeyW)
        {
            Some(Direction::North)
        } else if keyboard_input.just_pressed(KeyCode::ArrowDown)
            || keyboard_input.just_pressed(KeyCode::KeyS)
        {
            Some(Direction::South)
        } else {
            None
        }
    }
}

/// Component to mark the drawn food, remembering which cell it sits on.
#[derive(Component)]
pub struct Food {
    pub position: Position,
}

/// Component for the food's idle pulsing animation.
#[derive(Component)]
pub struct FoodPulse {
    pub timer: Timer,
}

/// Component for the short flash left behind when food is eaten.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark shapes rebuilt from the snake every tick.
#[derive(Component)]
pub struct SnakeSprite;

/// Component to mark the free/occupied cell overlay.
#[derive(Component)]
pub struct CellInfo;

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the start menu UI.
#[derive(Component)]
pub struct MenuUI;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn test_direction_vectors_are_screen_space() {
        assert_eq!(Direction::North.as_vec2(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction::East.as_vec2(), Vec2::new(1.0, 0.0));
        assert_eq!(Direction::South.as_vec2(), Vec2::new(0.0, 1.0));
        assert_eq!(Direction::West.as_vec2(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_position_step() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::North), Position::new(5, 4));
        assert_eq!(pos.step(Direction::East), Position::new(6, 5));
        assert_eq!(pos.step(Direction::South), Position::new(5, 6));
        assert_eq!(pos.step(Direction::West), Position::new(4, 5));
        assert_eq!(pos.delta_to(Position::new(4, 5)), (-1, 0));
    }
}
