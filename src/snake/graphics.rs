//! Per-segment sprite category and rotation, derived tick by tick from the
//! snake's shape.

use super::body::{Snake, Turn};
use crate::game::Direction;
use crate::math::world_vec_to_angle;

const HEAD_INDEX: usize = 0;
const NECK_INDEX: usize = 1;

/// Which sprite a segment is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SegmentType {
    Head,
    Tail,
    #[default]
    Body,
    Turn,
}

/// Sprite category plus its rotation in degrees (counter-clockwise).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SegmentGraphic {
    pub kind: SegmentType,
    pub angle: f32,
}

/// Calculates the angle to rotate the turn sprite by.
///
/// The unrotated turn sprite is a single quadrant joining the north and east
/// edges of the cell; rotating it through each quadrant gives all four corners.
/// `from_parent` and `from_child` point from the turning segment towards its
/// neighbours.
///
/// # Panics
///
/// If the two directions do not form a corner.
pub fn turn_sprite_rotation(from_parent: Direction, from_child: Direction) -> f32 {
    use Direction::*;

    match (from_parent, from_child) {
        (North, East) | (East, North) => 0.0,
        (West, North) | (North, West) => 90.0,
        (South, West) | (West, South) => 180.0,
        (East, South) | (South, East) => 270.0,
        _ => panic!("{from_parent:?} and {from_child:?} do not form a turn"),
    }
}

/// Index-parallel render state for every possible snake segment.
#[derive(Clone, Debug)]
pub struct SnakeGraphics {
    segment_graphics: Vec<SegmentGraphic>,
}

impl SnakeGraphics {
    pub fn new(max_segments: usize) -> Self {
        Self {
            segment_graphics: vec![SegmentGraphic::default(); max_segments],
        }
    }

    /// Sets up the graphics for a snake in its three-segment starting shape.
    pub fn init(&mut self, snake: &Snake) {
        let snake_angle = world_vec_to_angle(snake.direction().as_vec2());

        self.set(HEAD_INDEX, SegmentType::Head, snake_angle);
        let head_angle = self.segment_graphics[HEAD_INDEX].angle;
        self.set(NECK_INDEX, SegmentType::Body, head_angle);
        self.set(2, SegmentType::Tail, snake_angle);
    }

    /// Advances the render state by one tick of movement.
    ///
    /// Body graphics slide one segment towards the tail so a turn sprite
    /// follows the corner it was created on. The neck shows a turn only on
    /// the tick the direction changed.
    pub fn update(&mut self, snake: &Snake, turn: Option<Turn>) {
        let len = snake.len();

        self.set(
            HEAD_INDEX,
            SegmentType::Head,
            world_vec_to_angle(snake.direction().as_vec2()),
        );

        for i in (NECK_INDEX + 1..len - 1).rev() {
            self.segment_graphics[i] = self.segment_graphics[i - 1];
        }

        match turn {
            Some(turn) => {
                // The head now lies ahead in the new direction; the child lies
                // back the way the snake came.
                let rotation = turn_sprite_rotation(turn.to, turn.from.opposite());
                self.set(NECK_INDEX, SegmentType::Turn, rotation);
            }
            None => {
                let head_angle = self.segment_graphics[HEAD_INDEX].angle;
                self.set(NECK_INDEX, SegmentType::Body, head_angle);
            }
        }

        let segments = snake.segments();
        let tail_index = len - 1;
        let to_parent =
            segments[tail_index - 1].position.as_vec2() - segments[tail_index].position.as_vec2();
        self.set(tail_index, SegmentType::Tail, world_vec_to_angle(to_parent));
    }

    /// Graphics for the live segments of `snake`, head first.
    pub fn live<'a>(&'a self, snake: &Snake) -> &'a [SegmentGraphic] {
        &self.segment_graphics[..snake.len()]
    }

    fn set(&mut self, index: usize, kind: SegmentType, angle: f32) {
        self.segment_graphics[index] = SegmentGraphic { kind, angle };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::world::Grid;

    fn assert_graphic(graphic: SegmentGraphic, kind: SegmentType, angle: f32) {
        assert_eq!(graphic.kind, kind);
        assert!(
            (graphic.angle - angle).abs() < 1e-3,
            "expected angle {angle}, got {}",
            graphic.angle
        );
    }

    fn kinds(graphics: &SnakeGraphics, snake: &Snake) -> Vec<SegmentType> {
        graphics.live(snake).iter().map(|g| g.kind).collect()
    }

    #[test]
    fn test_turn_rotation_table() {
        use Direction::*;

        assert_eq!(turn_sprite_rotation(North, East), 0.0);
        assert_eq!(turn_sprite_rotation(East, North), 0.0);
        assert_eq!(turn_sprite_rotation(West, North), 90.0);
        assert_eq!(turn_sprite_rotation(North, West), 90.0);
        assert_eq!(turn_sprite_rotation(South, West), 180.0);
        assert_eq!(turn_sprite_rotation(West, South), 180.0);
        assert_eq!(turn_sprite_rotation(East, South), 270.0);
        assert_eq!(turn_sprite_rotation(South, East), 270.0);
    }

    #[test]
    #[should_panic(expected = "do not form a turn")]
    fn test_turn_rotation_rejects_straight_pair() {
        turn_sprite_rotation(Direction::North, Direction::South);
    }

    #[test]
    #[should_panic(expected = "do not form a turn")]
    fn test_turn_rotation_rejects_same_direction() {
        turn_sprite_rotation(Direction::East, Direction::East);
    }

    #[test]
    fn test_init_starting_shape() {
        let snake = Snake::new(10, 10);
        let mut graphics = SnakeGraphics::new(snake.capacity());

        graphics.init(&snake);

        assert_graphic(graphics.live(&snake)[0], SegmentType::Head, 0.0);
        assert_graphic(graphics.live(&snake)[1], SegmentType::Body, 0.0);
        assert_graphic(graphics.live(&snake)[2], SegmentType::Tail, 0.0);
    }

    #[test]
    fn test_straight_move_keeps_body() {
        let mut grid = Grid::new(10, 10);
        let mut snake = Snake::new(10, 10);
        let mut graphics = SnakeGraphics::new(snake.capacity());
        graphics.init(&snake);

        snake.simulate(None, &mut grid);
        graphics.update(&snake, snake.last_turn());

        assert_eq!(
            kinds(&graphics, &snake),
            vec![SegmentType::Head, SegmentType::Body, SegmentType::Tail]
        );
        assert_graphic(graphics.live(&snake)[2], SegmentType::Tail, 0.0);
    }

    #[test]
    fn test_turn_sets_neck_then_slides_down() {
        let mut grid = Grid::new(20, 20);
        let mut snake = Snake::new(20, 20);
        let mut graphics = SnakeGraphics::new(snake.capacity());
        graphics.init(&snake);
        snake.eat_food(2);

        // East -> North: neck sees its parent to the north and its child to
        // the west.
        snake.simulate(Some(Direction::North), &mut grid);
        graphics.update(&snake, snake.last_turn());
        assert_eq!(snake.len(), 4);
        assert_graphic(graphics.live(&snake)[0], SegmentType::Head, 90.0);
        assert_graphic(graphics.live(&snake)[1], SegmentType::Turn, 90.0);
        assert_eq!(graphics.live(&snake)[2].kind, SegmentType::Body);
        assert_graphic(graphics.live(&snake)[3], SegmentType::Tail, 0.0);

        grid.clear_all();
        snake.simulate(None, &mut grid);
        graphics.update(&snake, snake.last_turn());
        assert_eq!(snake.len(), 5);
        assert_graphic(graphics.live(&snake)[1], SegmentType::Body, 90.0);
        assert_graphic(graphics.live(&snake)[2], SegmentType::Turn, 90.0);
        assert_eq!(graphics.live(&snake)[3].kind, SegmentType::Body);
        assert_eq!(graphics.live(&snake)[4].kind, SegmentType::Tail);
    }

    #[test]
    fn test_tail_points_at_parent() {
        let mut snake = Snake::new(10, 10);
        snake.set_segments(
            &[
                Position::new(5, 3),
                Position::new(5, 4),
                Position::new(5, 5),
            ],
            Direction::North,
        );
        let mut graphics = SnakeGraphics::new(snake.capacity());
        graphics.init(&snake);

        graphics.update(&snake, None);

        assert_graphic(graphics.live(&snake)[0], SegmentType::Head, 90.0);
        assert_graphic(graphics.live(&snake)[1], SegmentType::Body, 90.0);
        assert_graphic(graphics.live(&snake)[2], SegmentType::Tail, 90.0);
    }

    #[test]
    fn test_corner_rotations_for_each_turn() {
        use Direction::*;

        let cases = [
            (East, North, 90.0),
            (East, South, 180.0),
            (West, North, 0.0),
            (West, South, 270.0),
            (North, East, 270.0),
            (North, West, 180.0),
            (South, East, 0.0),
            (South, West, 90.0),
        ];

        for (from, to, expected) in cases {
            let mut graphics = SnakeGraphics::new(9);
            let mut snake = Snake::new(3, 3);
            let head = Position::new(1, 1);
            let neck = head.step(from.opposite());
            let tail = neck.step(from.opposite());
            snake.set_segments(&[head, neck, tail], from);
            graphics.init(&snake);

            snake.move_body(Some(to));
            graphics.update(&snake, snake.last_turn());

            assert_graphic(graphics.live(&snake)[1], SegmentType::Turn, expected);
        }
    }
}
