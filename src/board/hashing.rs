//! Symmetry-normalized position fingerprints.
//!
//! Search layers key transposition tables on `hash_from_pov`: the position as
//! seen from one player, optionally mirrored left-right, optionally blind to
//! wall ownership. Strategically identical positions under those symmetries
//! collide by construction.
//!
//! Keys are Zobrist tables sized for the largest supported grid, generated
//! once from a fixed-seed ChaCha8 stream so fingerprints are stable across
//! runs and processes.

use std::sync::OnceLock;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Board, MAX_COLUMNS, MAX_ROWS};
use crate::core::{Cell, Orientation, Player, Wall};

const ZOBRIST_SEED: u64 = 0x5eed_ba5e_ca11_ab1e;
const MAX_CELLS: usize = (MAX_COLUMNS * MAX_ROWS) as usize;
const MAX_EDGES: usize = 2 * MAX_CELLS;

struct ZobristKeys {
    own_pawn: [u64; MAX_CELLS],
    other_pawn: [u64; MAX_CELLS],
    own_goal: [u64; MAX_CELLS],
    other_goal: [u64; MAX_CELLS],
    wall: [u64; MAX_EDGES],
    own_wall: [u64; MAX_EDGES],
    other_wall: [u64; MAX_EDGES],
}

fn fill<const N: usize>(rng: &mut ChaCha8Rng) -> [u64; N] {
    let mut keys = [0u64; N];
    for key in keys.iter_mut() {
        *key = rng.next_u64();
    }
    keys
}

fn keys() -> &'static ZobristKeys {
    static KEYS: OnceLock<ZobristKeys> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = ChaCha8Rng::seed_from_u64(ZOBRIST_SEED);
        ZobristKeys {
            own_pawn: fill(&mut rng),
            other_pawn: fill(&mut rng),
            own_goal: fill(&mut rng),
            other_goal: fill(&mut rng),
            wall: fill(&mut rng),
            own_wall: fill(&mut rng),
            other_wall: fill(&mut rng),
        }
    })
}

/// Key-table slot for a cell, in max-grid coordinates.
fn key_index(cell: Cell) -> usize {
    debug_assert!((0..MAX_COLUMNS).contains(&cell.column) && (0..MAX_ROWS).contains(&cell.row));
    (cell.row * MAX_COLUMNS + cell.column) as usize
}

fn edge_index(wall: Wall) -> usize {
    let orientation = match wall.orientation {
        Orientation::Right => 0,
        Orientation::Down => 1,
    };
    key_index(wall.cell) * 2 + orientation
}

impl Board {
    /// Mirror a cell across the vertical axis (columns reverse).
    #[must_use]
    pub fn flip_horizontal(&self, cell: Cell) -> Cell {
        Cell::new(self.columns() - 1 - cell.column, cell.row)
    }

    /// Mirror a wall across the vertical axis. A Right wall's anchor lands
    /// on the mirrored edge's left cell (columns-2-column), not the plain
    /// column mirror; a Down wall keeps its edge under the plain mirror.
    #[must_use]
    pub fn flip_horizontal_wall(&self, wall: Wall) -> Wall {
        match wall.orientation {
            Orientation::Right => Wall::new(
                Cell::new(self.columns() - 2 - wall.cell.column, wall.cell.row),
                Orientation::Right,
            ),
            Orientation::Down => Wall::new(
                Cell::new(self.columns() - 1 - wall.cell.column, wall.cell.row),
                Orientation::Down,
            ),
        }
    }

    fn flip_vertical(&self, cell: Cell) -> Cell {
        Cell::new(cell.column, self.rows() - 1 - cell.row)
    }

    fn flip_vertical_wall(&self, wall: Wall) -> Wall {
        match wall.orientation {
            Orientation::Right => Wall::new(
                Cell::new(wall.cell.column, self.rows() - 1 - wall.cell.row),
                Orientation::Right,
            ),
            Orientation::Down => Wall::new(
                Cell::new(wall.cell.column, self.rows() - 2 - wall.cell.row),
                Orientation::Down,
            ),
        }
    }

    /// Fingerprint of the position as seen by `player`.
    ///
    /// Blue's point of view mirrors the board vertically, so both players
    /// see themselves advancing the same way and a color-swapped position
    /// hashes identically from the swapped perspective. `flip_horizontal`
    /// additionally mirrors columns (the game's left-right symmetry);
    /// `hash_wall_color` distinguishes wall ownership, which pure blocking
    /// semantics do not need but ownership-aware evaluations may.
    #[must_use]
    pub fn hash_from_pov(
        &self,
        player: Player,
        flip_horizontal: bool,
        hash_wall_color: bool,
    ) -> u64 {
        let keys = keys();
        let opponent = player.opponent();

        let transform_cell = |cell: Cell| {
            let cell = if player == Player::Blue { self.flip_vertical(cell) } else { cell };
            if flip_horizontal {
                self.flip_horizontal(cell)
            } else {
                cell
            }
        };
        let transform_wall = |wall: Wall| {
            let wall = if player == Player::Blue { self.flip_vertical_wall(wall) } else { wall };
            if flip_horizontal {
                self.flip_horizontal_wall(wall)
            } else {
                wall
            }
        };

        let mut hash = 0u64;
        hash ^= keys.own_pawn[key_index(transform_cell(self.position(player)))];
        hash ^= keys.other_pawn[key_index(transform_cell(self.position(opponent)))];
        hash ^= keys.own_goal[key_index(transform_cell(self.goal(player)))];
        hash ^= keys.other_goal[key_index(transform_cell(self.goal(opponent)))];

        for cell in self.cells() {
            let state = self.state(cell);
            for orientation in [Orientation::Right, Orientation::Down] {
                for owner in Player::all() {
                    let placed = match orientation {
                        Orientation::Right => state.right_wall[owner.index()],
                        Orientation::Down => state.down_wall[owner.index()],
                    };
                    if !placed {
                        continue;
                    }

                    let edge = edge_index(transform_wall(Wall::new(cell, orientation)));
                    hash ^= if !hash_wall_color {
                        keys.wall[edge]
                    } else if owner == player {
                        keys.own_wall[edge]
                    } else {
                        keys.other_wall[edge]
                    };
                }
            }
        }

        hash
    }

    /// The whole position mirrored left-right: pawns, goals, and walls.
    /// Useful to search layers exploiting the mirror symmetry, and the
    /// ground truth for `hash_from_pov`'s flip argument.
    #[must_use]
    pub fn flipped_horizontal(&self) -> Board {
        let mut flipped = Board::with_players(
            self.columns(),
            self.rows(),
            self.flip_horizontal(self.position(Player::Red)),
            self.flip_horizontal(self.goal(Player::Red)),
            self.flip_horizontal(self.position(Player::Blue)),
            self.flip_horizontal(self.goal(Player::Blue)),
        )
        .expect("mirror of a valid board is valid");

        for cell in self.cells() {
            let state = self.state(cell);
            for owner in Player::all() {
                if state.right_wall[owner.index()] {
                    let wall = self.flip_horizontal_wall(Wall::new(cell, Orientation::Right));
                    flipped.state_mut(wall.cell).right_wall[owner.index()] = true;
                }
                if state.down_wall[owner.index()] {
                    let wall = self.flip_horizontal_wall(Wall::new(cell, Orientation::Down));
                    flipped.state_mut(wall.cell).down_wall[owner.index()] = true;
                }
            }
        }

        flipped
    }
}
