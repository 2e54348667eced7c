//! Dense occupancy grid backing the world.

use crate::game::Position;

/// One grid position and whether anything currently sits on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Fixed at construction to the cell's own grid index.
    pub position: Position,
    /// Not occupied by the snake or food.
    pub free: bool,
}

/// Row-major `width × height` array of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "grid {width}x{height} does not fit cell coordinates"
        );

        let cells = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| Cell {
                    position: Position::new(x as i32, y as i32),
                    free: true,
                })
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the position is within the world limits.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Row-major index of an in-bounds cell.
    pub fn index_of(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width + x as usize
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn occupy_cell(&mut self, x: i32, y: i32) {
        let index = self.index_of(x, y);
        self.cells[index].free = false;
    }

    pub fn occupy_index(&mut self, index: usize) {
        self.cells[index].free = false;
    }

    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.cells[self.index_of(x, y)].free
    }

    /// Marks every cell free again.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.free = true;
        }
    }

    /// Indices of all free cells, in row-major scan order.
    pub fn free_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.free)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
