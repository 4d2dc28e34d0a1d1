//! Shortest-path queries and heuristic distance fields.
//!
//! All metrics run on the wall graph only: pawn occupancy changes every turn
//! and the jump rules keep an occupied cell from ever being a lasting
//! obstacle, so paths treat every cell as passable.

use std::collections::VecDeque;

use super::Board;
use crate::core::{Cell, DIRECTIONS};

impl Board {
    /// Steps on the shortest path from `start` to `target` under the current
    /// walls, or `None` when no path exists. Legality enforcement keeps both
    /// pawns connected to their goals, but this query never assumes it.
    #[must_use]
    pub fn distance(&self, start: Cell, target: Cell) -> Option<u32> {
        debug_assert!(self.in_bounds(start) && self.in_bounds(target));

        let mut visited = vec![false; self.cell_count()];
        let mut queue = VecDeque::new();
        visited[self.index_from_cell(start)] = true;
        queue.push_back((start, 0));

        while let Some((cell, dist)) = queue.pop_front() {
            if cell == target {
                return Some(dist);
            }

            for dir in DIRECTIONS {
                if !self.is_edge_open(cell, dir) {
                    continue;
                }
                let neighbor = cell.step(dir);
                let index = self.index_from_cell(neighbor);
                if !visited[index] {
                    visited[index] = true;
                    queue.push_back((neighbor, dist + 1));
                }
            }
        }

        None
    }

    /// Per-cell snapshot of which of the four directions are blocked, in
    /// [`DIRECTIONS`] order. An explicit cache for batched distance-field
    /// computation; stale after any wall placement, and invalidating it is
    /// the caller's responsibility.
    #[must_use]
    pub fn blocked_directions(&self) -> Vec<[bool; 4]> {
        self.cells()
            .map(|cell| {
                let mut blocked = [false; 4];
                for (slot, dir) in blocked.iter_mut().zip(DIRECTIONS) {
                    *slot = !self.is_edge_open(cell, dir);
                }
                blocked
            })
            .collect()
    }

    /// Write every cell's distance from `start` into `dists`, indexed by
    /// [`Board::index_from_cell`]; unreachable cells get -1.0. The buffer
    /// length must equal [`Board::cell_count`].
    pub fn fill_relative_distances(&self, start: Cell, dists: &mut [f32]) {
        self.fill_distances_impl(start, dists, |cell, _, dir| self.is_edge_open(cell, dir));
    }

    /// [`Board::fill_relative_distances`] against a precomputed
    /// [`Board::blocked_directions`] snapshot, so repeated sweeps over one
    /// wall configuration skip re-deriving blocking state.
    pub fn fill_relative_distances_with(
        &self,
        start: Cell,
        dists: &mut [f32],
        blocked: &[[bool; 4]],
    ) {
        assert_eq!(
            blocked.len(),
            self.cell_count(),
            "blocked-direction snapshot must cover every cell"
        );
        self.fill_distances_impl(start, dists, |cell, dir_index, _| {
            !blocked[self.index_from_cell(cell)][dir_index]
        });
    }

    fn fill_distances_impl(
        &self,
        start: Cell,
        dists: &mut [f32],
        edge_open: impl Fn(Cell, usize, crate::core::Direction) -> bool,
    ) {
        assert_eq!(
            dists.len(),
            self.cell_count(),
            "distance buffer must cover every cell"
        );
        debug_assert!(self.in_bounds(start));

        dists.fill(-1.0);
        let mut queue = VecDeque::new();
        dists[self.index_from_cell(start)] = 0.0;
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            let next = dists[self.index_from_cell(cell)] + 1.0;
            for (dir_index, dir) in DIRECTIONS.into_iter().enumerate() {
                if !edge_open(cell, dir_index, dir) {
                    continue;
                }
                let neighbor = cell.step(dir);
                let index = self.index_from_cell(neighbor);
                if dists[index] < 0.0 {
                    dists[index] = next;
                    queue.push_back(neighbor);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Player, Wall};

    #[test]
    fn test_open_board_distances() {
        let board = Board::with_players(
            3,
            3,
            Cell::new(0, 0),
            Cell::new(2, 2),
            Cell::new(2, 0),
            Cell::new(0, 2),
        )
        .unwrap();
        assert_eq!(board.distance(Cell::new(0, 0), Cell::new(2, 2)), Some(4));
        assert_eq!(board.distance(Cell::new(2, 1), Cell::new(2, 2)), Some(1));
        assert_eq!(board.distance(Cell::new(1, 1), Cell::new(1, 1)), Some(0));
    }

    #[test]
    fn test_goals_reachable_after_construction() {
        for board in [Board::new(2, 2).unwrap(), Board::new(5, 4).unwrap(), Board::standard()] {
            for player in Player::all() {
                assert!(board.distance(board.position(player), board.goal(player)).is_some());
            }
        }
    }

    #[test]
    fn test_standard_opening_distance() {
        let board = Board::standard();
        assert_eq!(
            board.distance(board.position(Player::Red), board.goal(Player::Red)),
            Some(8)
        );
    }

    #[test]
    fn test_walls_lengthen_paths() {
        let mut board = Board::new(3, 3).unwrap();
        assert_eq!(board.distance(Cell::new(0, 0), Cell::new(0, 2)), Some(2));

        // Wall off the straight route down column 0.
        board.place_wall(Player::Red, Wall::new(Cell::new(0, 0), Orientation::Down));
        assert_eq!(board.distance(Cell::new(0, 0), Cell::new(0, 2)), Some(4));
    }

    #[test]
    fn test_disconnected_is_none() {
        let mut board = Board::new(2, 2).unwrap();
        // Sever both of (0,0)'s edges directly; place_wall does not check
        // connectivity, which is exactly what this query must survive.
        board.place_wall(Player::Red, Wall::new(Cell::new(0, 0), Orientation::Right));
        board.place_wall(Player::Red, Wall::new(Cell::new(0, 0), Orientation::Down));

        assert_eq!(board.distance(Cell::new(0, 0), Cell::new(1, 1)), None);
        assert_eq!(board.distance(Cell::new(1, 1), Cell::new(0, 0)), None);
    }

    #[test]
    fn test_fill_relative_distances() {
        let mut board = Board::new(3, 3).unwrap();
        board.place_wall(Player::Red, Wall::new(Cell::new(0, 0), Orientation::Down));

        let mut dists = vec![0.0; board.cell_count()];
        board.fill_relative_distances(Cell::new(0, 0), &mut dists);

        assert_eq!(dists[board.index_from_cell(Cell::new(0, 0))], 0.0);
        assert_eq!(dists[board.index_from_cell(Cell::new(1, 0))], 1.0);
        assert_eq!(dists[board.index_from_cell(Cell::new(0, 1))], 3.0);
        assert_eq!(dists[board.index_from_cell(Cell::new(2, 2))], 4.0);
    }

    #[test]
    fn test_fill_marks_unreachable() {
        let mut board = Board::new(2, 2).unwrap();
        board.place_wall(Player::Red, Wall::new(Cell::new(0, 0), Orientation::Right));
        board.place_wall(Player::Red, Wall::new(Cell::new(0, 0), Orientation::Down));

        let mut dists = vec![0.0; board.cell_count()];
        board.fill_relative_distances(Cell::new(1, 1), &mut dists);

        assert_eq!(dists[board.index_from_cell(Cell::new(0, 0))], -1.0);
        assert_eq!(dists[board.index_from_cell(Cell::new(1, 1))], 0.0);
    }

    #[test]
    fn test_snapshot_overload_matches() {
        let mut board = Board::standard();
        board.place_wall(Player::Red, Wall::new(Cell::new(4, 4), Orientation::Right));
        board.place_wall(Player::Blue, Wall::new(Cell::new(3, 2), Orientation::Down));

        let blocked = board.blocked_directions();
        let mut plain = vec![0.0; board.cell_count()];
        let mut snapshot = vec![0.0; board.cell_count()];

        for start in [board.position(Player::Red), board.goal(Player::Blue), Cell::new(0, 0)] {
            board.fill_relative_distances(start, &mut plain);
            board.fill_relative_distances_with(start, &mut snapshot, &blocked);
            assert_eq!(plain, snapshot);
        }
    }

    #[test]
    #[should_panic(expected = "distance buffer must cover every cell")]
    fn test_wrong_buffer_length_panics() {
        let board = Board::new(3, 3).unwrap();
        let mut dists = vec![0.0; 4];
        board.fill_relative_distances(Cell::new(0, 0), &mut dists);
    }
}
