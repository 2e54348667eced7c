//! The snake's segment chain: movement, deferred growth and death detection.

use bevy::log::debug;

use super::brain::{Brain, InputData};
use crate::game::{Direction, Position};
use crate::world::Grid;

/// Length the snake has before its first tick.
pub const STARTING_LENGTH: usize = 3;

const INITIAL_DIRECTION: Direction = Direction::East;

/// One unit of the snake's body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
}

/// A change of direction that happened on the most recent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub from: Direction,
    pub to: Direction,
}

/// Head-first chain of segments stored in an arena sized for the whole world.
///
/// Only the first `num_segments` entries are live; the rest are stale and
/// never read.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Segment>,
    num_segments: usize,
    grow_counter: u32,
    direction: Direction,
    last_turn: Option<Turn>,
    moved: bool,
    dead: bool,
    spawn: Position,
}

impl Snake {
    /// Creates a snake centered in a `world_width × world_height` world with
    /// its canonical three-segment starting shape.
    pub fn new(world_width: usize, world_height: usize) -> Self {
        let capacity = world_width * world_height;
        let spawn = Position::new((world_width / 2) as i32, (world_height / 2) as i32);

        let mut snake = Self {
            segments: vec![Segment::default(); capacity],
            num_segments: 0,
            grow_counter: 0,
            direction: INITIAL_DIRECTION,
            last_turn: None,
            moved: false,
            dead: false,
            spawn,
        };
        snake.reset();
        snake
    }

    /// Returns the snake to its starting shape at the world center.
    pub fn reset(&mut self) {
        self.segments[0] = Segment {
            position: self.spawn,
        };
        self.num_segments = 1;
        self.grow_counter = 0;
        self.direction = INITIAL_DIRECTION;
        self.last_turn = None;
        self.moved = false;
        self.dead = false;

        // Starting body is laid down the same way any growth happens.
        self.eat_food((STARTING_LENGTH - 1) as u32);
        while self.grow_counter > 0 {
            self.grow();
        }

        debug!(
            "snake spawned at ({}, {}) facing {:?}",
            self.spawn.x, self.spawn.y, self.direction
        );
    }

    /// Forgets what happened on the previous update.
    pub fn begin_update(&mut self) {
        self.moved = false;
        self.last_turn = None;
    }

    /// Runs one brain-driven update. Occupancy is re-marked even when the
    /// brain decides not to move.
    pub fn update(&mut self, brain: &Brain, input: &InputData, grid: &mut Grid) {
        self.begin_update();

        brain.update(self, input, grid);

        if !self.moved {
            self.mark_occupied_cells(grid);
        }
    }

    /// Queues `growth` segments to be added over the next simulations.
    pub fn eat_food(&mut self, growth: u32) {
        self.grow_counter += growth;
    }

    /// Advances the snake by one tick.
    pub fn simulate(&mut self, new_direction: Option<Direction>, grid: &mut Grid) {
        self.last_turn = None;

        if self.grow_counter > 0 && self.num_segments < self.capacity() {
            self.grow();
        }

        self.move_body(new_direction);
        self.moved = true;
        self.check_for_death(grid);
    }

    /// Appends a segment one step behind the current tail.
    pub fn grow(&mut self) {
        assert!(self.grow_counter > 0, "grow called with no pending growth");
        assert!(
            self.num_segments < self.capacity(),
            "snake cannot grow past {} segments",
            self.capacity()
        );

        let last = self.segments[self.num_segments - 1].position;
        let new_tail = if self.num_segments == 1 {
            last.step(self.direction.opposite())
        } else {
            let parent = self.segments[self.num_segments - 2].position;
            let (dx, dy) = parent.delta_to(last);
            Position::new(last.x + dx, last.y + dy)
        };

        self.segments[self.num_segments] = Segment { position: new_tail };
        self.num_segments += 1;
        self.grow_counter -= 1;
    }

    /// Shifts every segment onto its parent's cell, then advances the head.
    pub fn move_body(&mut self, new_direction: Option<Direction>) {
        // Tail first so each segment still reads its parent's old position.
        for i in (1..self.num_segments).rev() {
            self.segments[i].position = self.segments[i - 1].position;
        }

        if let Some(direction) = new_direction
            && direction != self.direction
        {
            self.last_turn = Some(Turn {
                from: self.direction,
                to: direction,
            });
            self.direction = direction;
        }

        self.segments[0].position = self.segments[0].position.step(self.direction);
    }

    /// Flags the snake dead if its head left the grid or hit its own body.
    ///
    /// The head cell is claimed first, then each body cell; a body segment
    /// landing on an already claimed cell means the head ran into it. This
    /// pass also leaves the grid with every live segment marked occupied.
    pub fn check_for_death(&mut self, grid: &mut Grid) {
        let head = self.head();
        if !grid.in_bounds(head.x, head.y) {
            debug!("snake left the grid at ({}, {})", head.x, head.y);
            self.dead = true;
            return;
        }

        grid.occupy_cell(head.x, head.y);

        for segment in &self.segments[1..self.num_segments] {
            let pos = segment.position;
            if !grid.is_free(pos.x, pos.y) {
                debug!("snake ran into itself at ({}, {})", pos.x, pos.y);
                self.dead = true;
                return;
            }
            grid.occupy_cell(pos.x, pos.y);
        }
    }

    /// Marks every live segment's cell occupied.
    pub fn mark_occupied_cells(&self, grid: &mut Grid) {
        for segment in self.segments() {
            let pos = segment.position;
            if grid.in_bounds(pos.x, pos.y) {
                grid.occupy_cell(pos.x, pos.y);
            }
        }
    }

    /// Live segments, head first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments[..self.num_segments]
    }

    pub fn head(&self) -> Position {
        self.segments[0].position
    }

    pub fn len(&self) -> usize {
        self.num_segments
    }

    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    pub fn grow_counter(&self) -> u32 {
        self.grow_counter
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The turn made by the latest move, if it changed direction.
    pub fn last_turn(&self) -> Option<Turn> {
        self.last_turn
    }

    /// Whether the latest update moved the snake.
    pub fn moved(&self) -> bool {
        self.moved
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    #[cfg(test)]
    pub(crate) fn set_segments(&mut self, positions: &[Position], direction: Direction) {
        for (segment, &position) in self.segments.iter_mut().zip(positions) {
            segment.position = position;
        }
        self.num_segments = positions.len();
        self.direction = direction;
    }
}
