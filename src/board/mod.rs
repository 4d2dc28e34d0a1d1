//! The authoritative game state.
//!
//! `Board` is a flat, cheaply clonable aggregate: a row-major `Vec` of
//! per-cell flag structs plus cached pawn positions and goals. Search layers
//! branch by cloning the whole board; nothing in here holds pointers, locks,
//! or I/O. Mutation is single-owner by convention — clone before mutating a
//! board another thread may read.
//!
//! Submodules split the engine by concern:
//! - [`movement`]: pawn steps, jumps, and their legality
//! - [`connectivity`]: wall blocking, bridge analysis, wall legality
//! - [`distance`]: BFS distances and heuristic distance fields
//! - [`hashing`]: symmetry-normalized position fingerprints

pub mod connectivity;
pub mod distance;
pub mod hashing;
pub mod movement;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Player};
use crate::error::BoardError;

/// Maximum supported grid, shared by the notation alphabet and the Zobrist
/// key tables.
pub const MAX_COLUMNS: i32 = 13;
pub const MAX_ROWS: i32 = 10;

/// Per-cell presence flags, indexed by [`Player::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CellState {
    pub player: [bool; 2],
    pub right_wall: [bool; 2],
    pub down_wall: [bool; 2],
    pub goal: [bool; 2],
}

impl CellState {
    /// A right wall of either color anchored here.
    pub fn any_right_wall(self) -> bool {
        self.right_wall[0] || self.right_wall[1]
    }

    /// A down wall of either color anchored here.
    pub fn any_down_wall(self) -> bool {
        self.down_wall[0] || self.down_wall[1]
    }
}

/// Cached pawn state: where the pawn is and where it is headed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Pawn {
    position: Cell,
    goal: Cell,
}

/// The mutable game state: grid dimensions, per-cell flags, pawn caches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: i32,
    rows: i32,
    cells: Vec<CellState>,
    pawns: [Pawn; 2],
}

impl Board {
    /// A minimal test board: Red runs the main diagonal from the top-left,
    /// Blue is the vertical mirror.
    pub fn new(columns: i32, rows: i32) -> Result<Self, BoardError> {
        Self::with_red(columns, rows, Cell::new(0, 0), Cell::new(columns - 1, rows - 1))
    }

    /// A board with Red's setup given and Blue mirrored across the horizontal
    /// midline.
    pub fn with_red(
        columns: i32,
        rows: i32,
        red_start: Cell,
        red_goal: Cell,
    ) -> Result<Self, BoardError> {
        let mirror = |cell: Cell| Cell::new(cell.column, rows - 1 - cell.row);
        Self::with_players(columns, rows, red_start, red_goal, mirror(red_start), mirror(red_goal))
    }

    /// A fully specified setup. Fails fast on out-of-range dimensions,
    /// out-of-bounds cells, or pawns sharing a start; nothing is clamped.
    pub fn with_players(
        columns: i32,
        rows: i32,
        red_start: Cell,
        red_goal: Cell,
        blue_start: Cell,
        blue_goal: Cell,
    ) -> Result<Self, BoardError> {
        if !(2..=MAX_COLUMNS).contains(&columns) || !(2..=MAX_ROWS).contains(&rows) {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }

        let check = |what: &'static str, cell: Cell| {
            if cell.column < 0 || cell.column >= columns || cell.row < 0 || cell.row >= rows {
                Err(BoardError::OutOfBounds { what, cell, columns, rows })
            } else {
                Ok(())
            }
        };
        check("red start", red_start)?;
        check("red goal", red_goal)?;
        check("blue start", blue_start)?;
        check("blue goal", blue_goal)?;

        if red_start == blue_start {
            return Err(BoardError::OverlappingStarts { cell: red_start });
        }

        let mut board = Board {
            columns,
            rows,
            cells: vec![CellState::default(); (columns * rows) as usize],
            pawns: [
                Pawn { position: red_start, goal: red_goal },
                Pawn { position: blue_start, goal: blue_goal },
            ],
        };

        board.state_mut(red_start).player[Player::Red.index()] = true;
        board.state_mut(blue_start).player[Player::Blue.index()] = true;
        board.state_mut(red_goal).goal[Player::Red.index()] = true;
        board.state_mut(blue_goal).goal[Player::Blue.index()] = true;

        Ok(board)
    }

    /// The standard competitive setup: 9x9, each pawn starting bottom/top
    /// center and racing to the opposite center cell.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_red(9, 9, Cell::new(4, 8), Cell::new(4, 0)).expect("standard setup is valid")
    }

    #[must_use]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells; the length of every distance-field buffer.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.column >= 0 && cell.column < self.columns && cell.row >= 0 && cell.row < self.rows
    }

    /// Row-major flat index for `cell`. Bijective with [`Board::cell_at_index`].
    #[must_use]
    pub fn index_from_cell(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        (cell.row * self.columns + cell.column) as usize
    }

    #[must_use]
    pub fn cell_at_index(&self, index: usize) -> Cell {
        debug_assert!(index < self.cells.len());
        Cell::new(index as i32 % self.columns, index as i32 / self.columns)
    }

    /// All cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cells.len()).map(|i| self.cell_at_index(i))
    }

    #[must_use]
    pub fn position(&self, player: Player) -> Cell {
        self.pawns[player.index()].position
    }

    #[must_use]
    pub fn goal(&self, player: Player) -> Cell {
        self.pawns[player.index()].goal
    }

    /// The player currently standing on its goal, if any. The game is over
    /// the instant this returns `Some`; Red is checked first.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::all().find(|&p| self.position(p) == self.goal(p))
    }

    /// Continuous evaluation in [-1, 1] for `player`, from both pawns'
    /// remaining goal distances. +1 exactly when `player` stands on its goal,
    /// -1 when the opponent does; sign always agrees with [`Board::winner`]
    /// at terminal states. A pawn with no path at all (impossible through
    /// legal play) counts as lost.
    #[must_use]
    pub fn score_for(&self, player: Player) -> f64 {
        let opponent = player.opponent();
        let own = self.distance(self.position(player), self.goal(player));
        let theirs = self.distance(self.position(opponent), self.goal(opponent));

        match (own, theirs) {
            (Some(0), _) => 1.0,
            (_, Some(0)) => -1.0,
            (None, _) => -1.0,
            (_, None) => 1.0,
            (Some(own), Some(theirs)) => {
                (theirs as f64 - own as f64) / (theirs as f64 + own as f64)
            }
        }
    }

    pub(crate) fn state(&self, cell: Cell) -> CellState {
        self.cells[self.index_from_cell(cell)]
    }

    pub(crate) fn state_mut(&mut self, cell: Cell) -> &mut CellState {
        let index = self.index_from_cell(cell);
        &mut self.cells[index]
    }

    pub(crate) fn set_position(&mut self, player: Player, cell: Cell) {
        self.pawns[player.index()].position = cell;
    }
}
