//! Player bindings.

use crate::board::Board;
use crate::core::{Position, Symbol};

use super::MoveProvider;

/// An immutable binding of a symbol to a move-provider.
///
/// The symbol and provider are fixed at construction; the two players of a
/// game must carry distinct, non-empty symbols, which the engine checks
/// when it is built.
pub struct Player {
    symbol: Symbol,
    provider: Box<dyn MoveProvider>,
}

impl Player {
    /// Bind `symbol` to a move-provider.
    #[must_use]
    pub fn new(symbol: Symbol, provider: Box<dyn MoveProvider>) -> Self {
        Self { symbol, provider }
    }

    /// The mark this player places.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Ask this player's provider for a move against `board`.
    pub(crate) fn propose_move(&mut self, board: &Board) -> Position {
        self.provider.propose_move(board)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}
