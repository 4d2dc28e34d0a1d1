//! Grid coordinates and 4-way movement directions.
//!
//! Cells are (column, row) pairs with row 0 at the top of the board and rows
//! growing downward. `Cell::step` performs no bounds checking: coordinates are
//! plain integers, and staying on the board is the `Board`'s responsibility.

use serde::{Deserialize, Serialize};

/// A movement direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

/// All four directions, in canonical enumeration order.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

impl Direction {
    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// The two directions orthogonal to this one.
    #[must_use]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Right | Direction::Left => [Direction::Down, Direction::Up],
            Direction::Down | Direction::Up => [Direction::Right, Direction::Left],
        }
    }

    /// Mirror across the vertical axis: Left and Right swap, Up and Down hold.
    #[must_use]
    pub const fn flip_horizontal(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Down,
            Direction::Up => Direction::Up,
        }
    }
}

/// A board coordinate. Ordered by (column, row).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The adjacent cell in the given direction. No bounds checking.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Cell {
        match direction {
            Direction::Right => Cell::new(self.column + 1, self.row),
            Direction::Down => Cell::new(self.column, self.row + 1),
            Direction::Left => Cell::new(self.column - 1, self.row),
            Direction::Up => Cell::new(self.column, self.row - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.step(Direction::Right), Cell::new(4, 4));
        assert_eq!(cell.step(Direction::Down), Cell::new(3, 5));
        assert_eq!(cell.step(Direction::Left), Cell::new(2, 4));
        assert_eq!(cell.step(Direction::Up), Cell::new(3, 3));
    }

    #[test]
    fn test_step_unchecked_bounds() {
        // Stepping off the origin is allowed; bounds belong to the board.
        assert_eq!(Cell::new(0, 0).step(Direction::Left), Cell::new(-1, 0));
        assert_eq!(Cell::new(0, 0).step(Direction::Up), Cell::new(0, -1));
    }

    #[test]
    fn test_opposite_round_trip() {
        for dir in DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(Cell::new(5, 5).step(dir).step(dir.opposite()), Cell::new(5, 5));
        }
    }

    #[test]
    fn test_perpendicular() {
        for dir in DIRECTIONS {
            for perp in dir.perpendicular() {
                assert_ne!(perp, dir);
                assert_ne!(perp, dir.opposite());
            }
        }
    }

    #[test]
    fn test_flip_horizontal() {
        assert_eq!(Direction::Right.flip_horizontal(), Direction::Left);
        assert_eq!(Direction::Left.flip_horizontal(), Direction::Right);
        assert_eq!(Direction::Up.flip_horizontal(), Direction::Up);
        assert_eq!(Direction::Down.flip_horizontal(), Direction::Down);
    }

    #[test]
    fn test_cell_ordering() {
        // Column-major: all of column 0 sorts before column 1.
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(2, 3) < Cell::new(2, 4));
    }

    #[test]
    fn test_serialization() {
        let cell = Cell::new(4, 8);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
