//! One play session: world, render state and brain advanced together.

use bevy::log::debug;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Position, SnakeConfig};
use crate::snake::{Brain, InputData, SnakeGraphics};
use crate::world::{SnakeStatus, World};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub status: SnakeStatus,
    /// Where food was eaten this tick, if it was.
    pub food_eaten: Option<Position>,
}

#[derive(Resource)]
pub struct Session<R = StdRng> {
    world: World<R>,
    graphics: SnakeGraphics,
    brain: Brain,
}

impl Session {
    pub fn from_config(config: &SnakeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: &SnakeConfig, rng: R) -> Self {
        let world = World::new(
            config.world_width,
            config.world_height,
            config.growth_per_food,
            rng,
        );
        let mut graphics = SnakeGraphics::new(world.snake().capacity());
        graphics.init(world.snake());

        Self {
            world,
            graphics,
            brain: config.brain,
        }
    }

    /// Runs one simulation tick and refreshes the render state if the snake
    /// moved.
    pub fn tick(&mut self, input: &InputData) -> TickReport {
        let food_before = self.world.food_position();
        let status = self.world.update(&self.brain, input);

        let snake = self.world.snake();
        if snake.moved() {
            self.graphics.update(snake, snake.last_turn());
        }

        let food_eaten = food_before.filter(|&food| {
            snake.moved() && status != SnakeStatus::Dead && snake.head() == food
        });
        if let Some(food) = food_eaten {
            debug!(
                "food eaten at ({}, {}), {} segments to grow",
                food.x,
                food.y,
                snake.grow_counter()
            );
        }

        TickReport { status, food_eaten }
    }

    pub fn reset(&mut self) {
        self.world.reset();
        self.graphics.init(self.world.snake());
    }

    pub fn world(&self) -> &World<R> {
        &self.world
    }

    pub fn graphics(&self) -> &SnakeGraphics {
        &self.graphics
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World<R> {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::snake::SegmentType;
    use crate::world::tests::ZeroRng;

    fn config() -> SnakeConfig {
        SnakeConfig {
            world_width: 10,
            world_height: 10,
            ..Default::default()
        }
    }

    fn steer(direction: Direction) -> InputData {
        InputData {
            last_input_dir: Some(direction),
            direction_pressed: true,
            eat_requested: false,
        }
    }

    #[test]
    fn test_tick_updates_render_state() {
        let mut session = Session::new(&config(), ZeroRng);

        let report = session.tick(&steer(Direction::South));

        assert_eq!(report.status, SnakeStatus::Active);
        assert_eq!(report.food_eaten, None);
        let kinds: Vec<SegmentType> = session
            .graphics()
            .live(session.world().snake())
            .iter()
            .map(|g| g.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![SegmentType::Head, SegmentType::Turn, SegmentType::Tail]
        );
    }

    #[test]
    fn test_tick_reports_food() {
        let mut session = Session::new(&config(), ZeroRng);
        // Food is at (0,0); head at (5,5). Go west along row 5 then north.
        for _ in 0..5 {
            session.tick(&steer(Direction::North));
        }
        assert_eq!(session.world().snake().head(), Position::new(5, 0));

        let mut eaten = None;
        for _ in 0..5 {
            let report = session.tick(&steer(Direction::West));
            assert_eq!(report.status, SnakeStatus::Active);
            if report.food_eaten.is_some() {
                eaten = report.food_eaten;
            }
        }

        assert_eq!(eaten, Some(Position::new(0, 0)));
        assert_eq!(session.world().snake().grow_counter(), 5);
    }

    #[test]
    fn test_reset_restores_graphics() {
        let mut session = Session::new(&config(), ZeroRng);
        while session.tick(&steer(Direction::North)).status != SnakeStatus::Dead {}

        session.reset();

        let graphics = session.graphics().live(session.world().snake());
        assert_eq!(graphics.len(), 3);
        assert_eq!(graphics[0].kind, SegmentType::Head);
        assert_eq!(graphics[1].kind, SegmentType::Body);
        assert_eq!(graphics[2].kind, SegmentType::Tail);
        assert_eq!(
            session.tick(&InputData::default()).status,
            SnakeStatus::Active
        );
    }

    #[test]
    fn test_ticks_after_win_change_nothing() {
        let config = SnakeConfig {
            world_width: 4,
            world_height: 1,
            growth_per_food: 1,
            ..Default::default()
        };
        let mut session = Session::new(&config, ZeroRng);
        session.world_mut().snake_mut().eat_food(1);

        let report = session.tick(&InputData::default());
        assert_eq!(report.status, SnakeStatus::Done);
        assert_eq!(report.food_eaten, Some(Position::new(3, 0)));
        let graphics = session.graphics().live(session.world().snake()).to_vec();

        for _ in 0..3 {
            let report = session.tick(&steer(Direction::South));
            assert_eq!(
                report,
                TickReport {
                    status: SnakeStatus::Done,
                    food_eaten: None,
                }
            );
            assert_eq!(
                session.graphics().live(session.world().snake()),
                graphics.as_slice()
            );
        }
    }
}
