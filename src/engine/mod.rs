//! Turn orchestration.
//!
//! The engine owns one board, two players, and the outcome state machine.
//! Each call to [`GameEngine::play_turn`] obtains a move from the active
//! player's provider, applies it, evaluates the resulting lines, updates the
//! outcome, and alternates the active player. Engines are created per game
//! and never reused: a rematch needs a fresh engine.

pub mod outcome;

pub use outcome::GameOutcome;

use tracing::{debug, error};

use crate::board::Board;
use crate::core::{GameError, Symbol};
use crate::players::Player;

/// Two-player turn-loop orchestrator over one board.
///
/// Execution is single-threaded and synchronous: exactly one move is being
/// produced or applied at a time, and the only suspension point is the
/// provider call, which may block awaiting external input.
///
/// ## Example
///
/// ```
/// use gridline::{GameEngine, GameOutcome, Player, ScriptedProvider, Symbol};
///
/// // X takes row 0; O plays elsewhere and never blocks.
/// let x = Player::new(Symbol::X, Box::new(ScriptedProvider::new([(0, 0), (0, 1), (0, 2)])));
/// let o = Player::new(Symbol::O, Box::new(ScriptedProvider::new([(1, 0), (1, 1)])));
///
/// let mut engine = GameEngine::with_standard_board(x, o).unwrap();
/// assert_eq!(engine.play_to_end().unwrap(), GameOutcome::Won(Symbol::X));
/// ```
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    outcome: GameOutcome,
    /// Index of the player whose turn it is.
    active: usize,
    /// Completed turns.
    turns: usize,
}

impl GameEngine {
    /// Create an engine over a fresh `rows` × `columns` board.
    ///
    /// `first` moves first; turn order is fixed for the life of the game.
    /// Fails with [`GameError::InvalidConfiguration`] if either dimension is
    /// zero, if either player uses the empty symbol, or if the players share
    /// a symbol.
    pub fn new(
        rows: usize,
        columns: usize,
        first: Player,
        second: Player,
    ) -> Result<Self, GameError> {
        if first.symbol().is_empty() || second.symbol().is_empty() {
            return Err(GameError::InvalidConfiguration(
                "players must use non-empty symbols".to_string(),
            ));
        }
        if first.symbol() == second.symbol() {
            return Err(GameError::InvalidConfiguration(format!(
                "both players use the symbol {}",
                first.symbol()
            )));
        }

        Ok(Self {
            board: Board::new(rows, columns)?,
            players: [first, second],
            outcome: GameOutcome::InProgress,
            active: 0,
            turns: 0,
        })
    }

    /// Create an engine over the canonical 3×3 board.
    pub fn with_standard_board(first: Player, second: Player) -> Result<Self, GameError> {
        Self::new(Board::STANDARD_SIZE, Board::STANDARD_SIZE, first, second)
    }

    /// The current board contents, for display or inspection.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current game outcome.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// The winning symbol, if the game has been won.
    #[must_use]
    pub fn winner(&self) -> Option<Symbol> {
        self.outcome.winner()
    }

    /// The symbol of the player whose turn it is.
    ///
    /// After a win this remains the winner's symbol: the active player does
    /// not alternate past a terminal outcome.
    #[must_use]
    pub fn active_symbol(&self) -> Symbol {
        self.players[self.active].symbol()
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.turns
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Play a single turn: solicit a move from the active player, apply it,
    /// update the outcome, and alternate the active player unless the game
    /// just ended.
    ///
    /// Fails with [`GameError::GameOver`] if the outcome is already
    /// terminal, and with [`GameError::InvalidMove`] if the provider yields
    /// a move failing validation; in the latter case the board is unchanged
    /// and the same player remains active.
    pub fn play_turn(&mut self) -> Result<GameOutcome, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let symbol = self.players[self.active].symbol();
        let pos = self.players[self.active].propose_move(&self.board);

        if let Err(cause) = self.board.apply_move(pos, symbol) {
            let err = GameError::invalid_move(symbol, cause);
            error!(%symbol, %pos, %err, "rejecting move from provider");
            return Err(err);
        }
        debug!(%symbol, %pos, turn = self.turns, "applied move");

        self.outcome.advance(self.board.evaluate_lines());
        self.turns += 1;

        if !self.outcome.is_terminal() {
            self.active = 1 - self.active;
        }

        Ok(self.outcome)
    }

    /// Drive the turn loop until the outcome is terminal.
    ///
    /// Each turn fills exactly one previously-empty cell, so the loop runs
    /// at most `rows * columns` iterations before a full board forces a
    /// draw on the same turn.
    pub fn play_to_end(&mut self) -> Result<GameOutcome, GameError> {
        while !self.outcome.is_terminal() {
            self.play_turn()?;
        }
        Ok(self.outcome)
    }
}
