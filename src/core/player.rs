//! Player identification.
//!
//! Exactly two players, Red and Blue. Red advances toward the top of the
//! board, Blue toward the bottom (see `Board` construction for the mirrored
//! default setup).

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Index for per-player array storage: Red = 0, Blue = 1.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// Both players, Red first.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::Red, Player::Blue].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent(), Player::Red);
    }

    #[test]
    fn test_index() {
        assert_eq!(Player::Red.index(), 0);
        assert_eq!(Player::Blue.index(), 1);
    }

    #[test]
    fn test_all() {
        let players: Vec<_> = Player::all().collect();
        assert_eq!(players, vec![Player::Red, Player::Blue]);
    }
}
