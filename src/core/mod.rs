//! Core value types: players, cells, directions, walls, actions, turns.
//!
//! Everything here is a small `Copy` value with a total order, suitable for
//! keys in sets and transposition tables. The mutable game state lives in
//! [`crate::board`].

pub mod action;
pub mod cell;
pub mod player;
pub mod turn;
pub mod wall;

pub use action::{Action, Move, Step};
pub use cell::{Cell, Direction, DIRECTIONS};
pub use player::Player;
pub use turn::{Turn, TurnPhase};
pub use wall::{Orientation, Wall};
