//! # corridors
//!
//! A rules engine for a two-player wall-and-pathing board game: each pawn
//! races to its goal cell while both players place walls that reroute — but
//! may never fully block — the opponent's path.
//!
//! ## Design Principles
//!
//! 1. **Single source of truth**: `Board` holds the entire game state as a
//!    flat aggregate. No other component keeps duplicate mutable state.
//!
//! 2. **Cheap clones for search**: the state is a plain `Vec` of per-cell
//!    flags plus cached pawn data. Tree search branches by cloning the whole
//!    board; nothing blocks, suspends, or does I/O.
//!
//! 3. **Legality is enumerated, mutation is trusted**: `legal_steps` /
//!    `legal_walls` / `legal_actions` are the complete action sets, and the
//!    mutating primitives apply actions without re-validating. Callers
//!    pre-validate; debug builds assert the contract.
//!
//! 4. **Incremental connectivity**: wall legality needs proof that neither
//!    pawn loses its last path. One bridge-finding DFS per player answers
//!    every candidate wall at once — no per-candidate path search.
//!
//! ## Modules
//!
//! - `core`: value types — players, cells, directions, walls, actions, turns
//! - `board`: the mutable state and the movement/legality/distance/hashing engine
//! - `notation`: text encoding of every value, the only durable form
//! - `error`: construction and parse error types

pub mod board;
pub mod core;
pub mod error;
pub mod notation;

// Re-export commonly used types
pub use crate::board::{Board, MAX_COLUMNS, MAX_ROWS};
pub use crate::core::{
    Action, Cell, Direction, Move, Orientation, Player, Step, Turn, TurnPhase, Wall, DIRECTIONS,
};
pub use crate::error::{BoardError, ParseError};
