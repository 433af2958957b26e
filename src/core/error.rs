//! Error types.
//!
//! Validation errors (`OutOfBounds`, `CellOccupied`) are local, recoverable
//! conditions: a well-behaved move-provider handles them by re-soliciting a
//! move. They become fatal only when they escape the provider and reach the
//! engine, which wraps them in `InvalidMove` and refuses to apply the move.

use thiserror::Error;

use super::{Position, Symbol};

/// Errors produced by the board and the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A proposed position lies outside the grid.
    #[error("position {pos} is outside the {rows}x{columns} board")]
    OutOfBounds {
        pos: Position,
        rows: usize,
        columns: usize,
    },

    /// A proposed position targets an already-filled cell.
    #[error("cell at {pos} already holds {occupant}")]
    CellOccupied { pos: Position, occupant: Symbol },

    /// A move-provider yielded a move failing validation.
    ///
    /// This is a contract violation by the move source: providers are
    /// expected to retry internally and only return playable positions.
    /// The engine surfaces it to the caller rather than retrying itself.
    #[error("move provider for {symbol} proposed an illegal move: {source}")]
    InvalidMove {
        symbol: Symbol,
        #[source]
        source: Box<GameError>,
    },

    /// The engine was constructed with unusable parameters.
    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),

    /// A move was requested on a game whose outcome is already terminal.
    #[error("the game has already ended")]
    GameOver,
}

impl GameError {
    /// Wrap a validation error as a provider contract violation.
    #[must_use]
    pub fn invalid_move(symbol: Symbol, cause: GameError) -> Self {
        GameError::InvalidMove {
            symbol,
            source: Box::new(cause),
        }
    }
}
