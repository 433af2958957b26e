//! The game-outcome state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::LineResult;
use crate::core::Symbol;

/// Current status of a game.
///
/// Starts at `InProgress` and transitions exactly once to a terminal value
/// (`Won` or `Draw`); terminal values are final for the life of the game
/// instance. A rematch needs a fresh engine, not a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The game continues; moves are still legal.
    #[default]
    InProgress,
    /// The given symbol completed a line.
    Won(Symbol),
    /// The board filled with no winning line.
    Draw,
}

impl GameOutcome {
    /// Check whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// The winning symbol, if any.
    #[must_use]
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameOutcome::Won(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Apply the per-move transition rule from a line-evaluation result.
    ///
    /// Winner reported → `Won`; otherwise full board → `Draw`; otherwise
    /// stay `InProgress`. Attempting a transition out of a terminal state is
    /// a programming error; it is ignored and logged, never silently
    /// re-opening a finished game.
    pub fn advance(&mut self, result: LineResult) {
        if self.is_terminal() {
            warn!(outcome = ?self, ?result, "ignoring outcome transition on a finished game");
            return;
        }

        match result {
            LineResult::Winner(symbol) => {
                debug!(%symbol, "game won");
                *self = GameOutcome::Won(symbol);
            }
            LineResult::Draw => {
                debug!("game drawn");
                *self = GameOutcome::Draw;
            }
            LineResult::InProgress => {}
        }
    }
}
