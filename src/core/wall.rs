//! Wall placements.
//!
//! A wall is anchored at a cell and blocks the single edge between that cell
//! and its right or down neighbor. Walls are unit-length: one wall, one edge.
//! Once placed, a wall stays for the rest of the game.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Direction};

/// Which of the two anchored edges a wall blocks.
///
/// `Right` sorts before `Down`, giving walls a total (cell, orientation) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Blocks movement between the anchor and its right neighbor.
    Right,
    /// Blocks movement between the anchor and its down neighbor.
    Down,
}

/// A wall placement: anchor cell plus orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub cell: Cell,
    pub orientation: Orientation,
}

impl Wall {
    #[must_use]
    pub const fn new(cell: Cell, orientation: Orientation) -> Self {
        Self { cell, orientation }
    }

    /// The wall blocking movement from `cell` in `direction`.
    ///
    /// Left and Up normalize to the equivalent Right/Down wall anchored at the
    /// neighboring cell, so every grid edge has exactly one wall position.
    #[must_use]
    pub const fn between(cell: Cell, direction: Direction) -> Self {
        match direction {
            Direction::Right => Wall::new(cell, Orientation::Right),
            Direction::Down => Wall::new(cell, Orientation::Down),
            Direction::Left => Wall::new(cell.step(Direction::Left), Orientation::Right),
            Direction::Up => Wall::new(cell.step(Direction::Up), Orientation::Down),
        }
    }

    /// The movement direction this wall blocks from its anchor.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self.orientation {
            Orientation::Right => Direction::Right,
            Orientation::Down => Direction::Down,
        }
    }
}
