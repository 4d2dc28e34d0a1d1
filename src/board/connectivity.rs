//! Wall blocking and placement legality.
//!
//! Placing a wall is legal when it neither overlaps an existing wall nor cuts
//! the last path between either pawn and its goal. The cut test does not BFS
//! per candidate: one depth-first traversal per player over the open-edge
//! grid graph assigns discovery levels and low-links (Tarjan bridge finding)
//! and collects every edge whose removal would separate that pawn from its
//! goal. A candidate wall is then illegal iff its edge is in either bridge
//! set — a set lookup, not a traversal.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::Board;
use crate::core::{Cell, Direction, Orientation, Player, Wall, DIRECTIONS};

impl Board {
    /// Whether movement across this wall's edge is currently impossible:
    /// the anchor is off the board, the edge leaves the grid, or a wall of
    /// either color already sits on it.
    ///
    /// This is pure blocking state. Whether *placing* a new wall here would
    /// be legal is a connectivity question answered by [`Board::legal_walls`].
    #[must_use]
    pub fn is_blocked(&self, wall: Wall) -> bool {
        if !self.in_bounds(wall.cell) {
            return true;
        }

        let state = self.state(wall.cell);
        match wall.orientation {
            Orientation::Right => {
                wall.cell.column == self.columns() - 1 || state.any_right_wall()
            }
            Orientation::Down => wall.cell.row == self.rows() - 1 || state.any_down_wall(),
        }
    }

    /// Abstract adjacency view over the grid graph: can a pawn cross from
    /// `cell` in `direction`?
    pub(crate) fn is_edge_open(&self, cell: Cell, direction: Direction) -> bool {
        !self.is_blocked(Wall::between(cell, direction))
    }

    /// Every wall placement that is currently legal: unblocked and severing
    /// neither player from its goal. Empty once the game has a winner — a
    /// terminal position admits no further actions.
    #[must_use]
    pub fn legal_walls(&self) -> Vec<Wall> {
        if self.winner().is_some() {
            return Vec::new();
        }

        let mut cut_walls = FxHashSet::default();
        let mut levels = vec![-1; self.cell_count()];

        for player in Player::all() {
            levels.fill(-1);
            self.find_bridges(
                self.position(player),
                self.goal(player),
                1,
                &mut levels,
                &mut cut_walls,
            );
        }

        let mut walls = Vec::new();
        for cell in self.cells() {
            for orientation in [Orientation::Right, Orientation::Down] {
                let wall = Wall::new(cell, orientation);
                if !self.is_blocked(wall) && !cut_walls.contains(&wall) {
                    walls.push(wall);
                }
            }
        }

        debug!(legal = walls.len(), cuts = cut_walls.len(), "enumerated walls");
        walls
    }

    /// Place `wall` for `player`, unconditionally.
    ///
    /// Caller contract: the wall must come from [`Board::legal_walls`].
    /// Debug builds assert the overlap half of the contract; the
    /// connectivity half is never re-checked, and violating it leaves the
    /// board in a state later queries are not specified for.
    pub fn place_wall(&mut self, player: Player, wall: Wall) {
        debug_assert!(
            !self.is_blocked(wall),
            "wall {wall:?} placed on a blocked edge; pre-validate with legal_walls()"
        );
        trace!(?player, ?wall, "place wall");

        let index = player.index();
        let state = self.state_mut(wall.cell);
        match wall.orientation {
            Orientation::Right => state.right_wall[index] = true,
            Orientation::Down => state.down_wall[index] = true,
        }
    }

    /// Depth-first bridge collection restricted to the `start` → `target`
    /// path. `levels` holds -1 for unvisited cells, else the DFS depth.
    /// Returns (target seen in this subtree, low-link of this subtree).
    ///
    /// A tree edge is recorded as a cut wall when the subtree below it saw
    /// the target and no back edge escapes above the edge — exactly the
    /// edges whose removal would strand `target` from `start`.
    fn find_bridges(
        &self,
        start: Cell,
        target: Cell,
        level: i32,
        levels: &mut [i32],
        cut_walls: &mut FxHashSet<Wall>,
    ) -> (bool, i32) {
        levels[self.index_from_cell(start)] = level;
        let mut target_found = start == target;
        let mut min_level = level;

        for dir in DIRECTIONS {
            if !self.is_edge_open(start, dir) {
                continue;
            }

            let neighbor = start.step(dir);
            let neighbor_level = levels[self.index_from_cell(neighbor)];

            // The only level-1 neighbor in an undirected DFS is the tree
            // parent; skip it rather than treat the tree edge as a cycle.
            if neighbor_level == level - 1 {
                continue;
            }

            if neighbor_level == -1 {
                let (sub_found, sub_level) =
                    self.find_bridges(neighbor, target, level + 1, levels, cut_walls);
                target_found = target_found || sub_found;
                min_level = min_level.min(sub_level);

                if sub_found && sub_level > level {
                    cut_walls.insert(Wall::between(start, dir));
                }
            } else {
                min_level = min_level.min(neighbor_level);
            }
        }

        (target_found, min_level)
    }
}
