//! Actions and full-turn moves.
//!
//! An atomic action is either a pawn step or a wall placement. A full turn is
//! an ordered pair of two actions. Consumers must match exhaustively; there is
//! no catch-all action kind.

use serde::{Deserialize, Serialize};

use super::cell::Direction;
use super::wall::Wall;

/// A pawn movement.
///
/// `Straight(d)` moves one cell in `d`; when the adjacent cell in `d` holds
/// the opponent, the same action is the straight jump and lands one cell
/// beyond. `Diagonal(toward, deflect)` jumps the opponent adjacent in
/// `toward` and lands sideways in `deflect` — only offered when the straight
/// jump is blocked by a wall or the board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    Straight(Direction),
    Diagonal(Direction, Direction),
}

/// One atomic action: a pawn step or a wall placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    Step(Step),
    Wall(Wall),
}

impl From<Step> for Action {
    fn from(step: Step) -> Self {
        Action::Step(step)
    }
}

impl From<Wall> for Action {
    fn from(wall: Wall) -> Self {
        Action::Wall(wall)
    }
}

/// A full turn: two actions in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub first: Action,
    pub second: Action,
}

impl Move {
    #[must_use]
    pub const fn new(first: Action, second: Action) -> Self {
        Self { first, second }
    }
}
