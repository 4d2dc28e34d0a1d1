//! The turn cycle.
//!
//! Each player takes two actions per turn. The cycle is a four-state machine
//! driven by pure transitions:
//! Red:First → Red:Second → Blue:First → Blue:Second → Red:First → …

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Which of a player's two actions is being taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    First,
    Second,
}

/// A position in the turn cycle: whose action, and which of their two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub player: Player,
    pub phase: TurnPhase,
}

impl Turn {
    #[must_use]
    pub const fn new(player: Player, phase: TurnPhase) -> Self {
        Self { player, phase }
    }

    /// The opening turn of a game.
    #[must_use]
    pub const fn start() -> Self {
        Turn::new(Player::Red, TurnPhase::First)
    }

    /// The turn after this one.
    #[must_use]
    pub const fn next(self) -> Turn {
        match self.phase {
            TurnPhase::First => Turn::new(self.player, TurnPhase::Second),
            TurnPhase::Second => Turn::new(self.player.opponent(), TurnPhase::First),
        }
    }

    /// The turn before this one.
    #[must_use]
    pub const fn prev(self) -> Turn {
        match self.phase {
            TurnPhase::Second => Turn::new(self.player, TurnPhase::First),
            TurnPhase::First => Turn::new(self.player.opponent(), TurnPhase::Second),
        }
    }
}
