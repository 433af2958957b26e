//! # gridline
//!
//! A turn-based board-game engine for N×M grid games of the tic-tac-toe
//! family: board state, move validation, win/draw detection, and a
//! two-player turn loop driven by pluggable move-providers.
//!
//! ## Design Principles
//!
//! 1. **Engine, not a game shell**: no console I/O, no input parsing, no
//!    process wiring. Hosts render the board and announce results through
//!    the engine's query surface.
//!
//! 2. **Strategy over inheritance**: anything that can produce a position
//!    for the current board plugs in through the `MoveProvider` trait —
//!    scripted sequences, random play, or an interactive source.
//!
//! 3. **Outcome as data**: the game result is a tagged variant
//!    (`InProgress | Won(symbol) | Draw`) consumed via pattern matching,
//!    not a hierarchy of state objects.
//!
//! ## Modules
//!
//! - `core`: Symbols, positions, errors, deterministic RNG
//! - `board`: Grid storage, move validation, line evaluation
//! - `players`: Player bindings and the move-provider capability
//! - `engine`: Turn orchestration and the game-outcome state machine
//!
//! ## Example
//!
//! ```
//! use gridline::{FirstEmptyProvider, GameEngine, GameOutcome, Player, Symbol};
//!
//! let x = Player::new(Symbol::X, Box::new(FirstEmptyProvider::new()));
//! let o = Player::new(Symbol::O, Box::new(FirstEmptyProvider::new()));
//!
//! let mut engine = GameEngine::with_standard_board(x, o).unwrap();
//! let outcome = engine.play_to_end().unwrap();
//!
//! // Two first-empty players on a 3×3 board: X completes the anti-diagonal.
//! assert_eq!(outcome, GameOutcome::Won(Symbol::X));
//! ```

pub mod core;
pub mod board;
pub mod players;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, Position, Symbol};

pub use crate::board::{Board, LineResult};

pub use crate::players::{
    FirstEmptyProvider, MoveProvider, Player, RandomProvider, ScriptedProvider,
};

pub use crate::engine::{GameEngine, GameOutcome};
