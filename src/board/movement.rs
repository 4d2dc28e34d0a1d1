//! Pawn movement: plain steps, jumps over the opponent, and diagonal
//! deflections.
//!
//! Stepping toward the adjacent opponent is a jump: the pawn lands one cell
//! beyond when that edge is open. When a wall or the board edge closes the
//! straight landing, the two perpendicular deflections over the opponent are
//! offered instead. Pawns never share a cell.

use smallvec::SmallVec;
use tracing::trace;

use super::Board;
use crate::core::{Action, Cell, Direction, Player, Step, DIRECTIONS};

impl Board {
    /// Directions `player` may step in, jump semantics included: a direction
    /// toward the adjacent opponent is legal only when the straight-jump
    /// landing is open. Diagonal deflections are not directions; see
    /// [`Board::legal_steps`] for the full pawn-move enumeration.
    #[must_use]
    pub fn legal_directions(&self, player: Player) -> SmallVec<[Direction; 4]> {
        if self.winner().is_some() {
            return SmallVec::new();
        }

        let position = self.position(player);
        let opponent = self.position(player.opponent());

        DIRECTIONS
            .into_iter()
            .filter(|&dir| {
                if !self.is_edge_open(position, dir) {
                    return false;
                }
                let target = position.step(dir);
                target != opponent || self.is_edge_open(target, dir)
            })
            .collect()
    }

    /// Every pawn move available to `player`: straight steps, straight
    /// jumps, and diagonal deflections where the straight jump is closed.
    /// Both open diagonals are enumerated; preferring one is the search
    /// layer's business.
    #[must_use]
    pub fn legal_steps(&self, player: Player) -> SmallVec<[Step; 8]> {
        let mut steps = SmallVec::new();
        if self.winner().is_some() {
            return steps;
        }

        let position = self.position(player);
        let opponent = self.position(player.opponent());

        for dir in DIRECTIONS {
            if !self.is_edge_open(position, dir) {
                continue;
            }

            let over = position.step(dir);
            if over != opponent || self.is_edge_open(over, dir) {
                steps.push(Step::Straight(dir));
            } else {
                for deflect in dir.perpendicular() {
                    if self.is_edge_open(over, deflect) {
                        steps.push(Step::Diagonal(dir, deflect));
                    }
                }
            }
        }

        steps
    }

    /// The cell `step` lands `player` on, jump resolution included.
    #[must_use]
    pub fn step_target(&self, player: Player, step: Step) -> Cell {
        let position = self.position(player);
        match step {
            Step::Straight(dir) => {
                let target = position.step(dir);
                if target == self.position(player.opponent()) {
                    target.step(dir)
                } else {
                    target
                }
            }
            Step::Diagonal(toward, deflect) => position.step(toward).step(deflect),
        }
    }

    /// Move `player` by `step`, unconditionally.
    ///
    /// Caller contract: `step` must come from [`Board::legal_steps`]. Debug
    /// builds assert it; release builds trust the caller and an illegal step
    /// leaves the board in a state later queries are not specified for.
    pub fn take_step(&mut self, player: Player, step: Step) {
        debug_assert!(
            self.legal_steps(player).contains(&step),
            "step {step:?} is not legal for {player:?}; pre-validate with legal_steps()"
        );

        let target = self.step_target(player, step);
        trace!(?player, ?step, ?target, "take step");

        let position = self.position(player);
        self.state_mut(position).player[player.index()] = false;
        self.state_mut(target).player[player.index()] = true;
        self.set_position(player, target);
    }

    /// Apply one atomic action: a pawn step or a wall placement. Inherits
    /// the caller contract of [`Board::take_step`] / [`Board::place_wall`].
    pub fn do_action(&mut self, player: Player, action: Action) {
        match action {
            Action::Step(step) => self.take_step(player, step),
            Action::Wall(wall) => self.place_wall(player, wall),
        }
    }

    /// The complete action set for `player`: pawn moves plus legal walls.
    #[must_use]
    pub fn legal_actions(&self, player: Player) -> Vec<Action> {
        let steps = self.legal_steps(player);
        let walls = self.legal_walls();

        let mut actions = Vec::with_capacity(steps.len() + walls.len());
        actions.extend(steps.into_iter().map(Action::Step));
        actions.extend(walls.into_iter().map(Action::Wall));
        actions
    }
}
