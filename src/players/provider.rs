//! The move-provider capability and its built-in implementations.

use std::collections::VecDeque;

use crate::board::Board;
use crate::core::{GameRng, Position};

/// A position no board can contain, returned by providers whose source of
/// moves is exhausted. The engine rejects it as `InvalidMove`.
const EXHAUSTED: Position = Position::new(usize::MAX, usize::MAX);

/// Capability for producing the next move for a player.
///
/// `board` is a read-only view sufficient to validate candidate moves
/// (dimensions plus per-cell symbols). Implementations must eventually
/// return a position for which [`Board::is_valid_move`] is true;
/// implementations sourcing unreliable input (interactive prompts, network
/// peers) must loop internally and never hand an invalid move back to the
/// engine.
///
/// This is a blocking call in the synchronous design: it may suspend the
/// calling thread indefinitely awaiting external input. Automated
/// implementations return immediately.
pub trait MoveProvider {
    /// Produce the next move for the given board.
    fn propose_move(&mut self, board: &Board) -> Position;
}

/// Replays a fixed sequence of positions.
///
/// Intended for tests and replays. The script is trusted as-is: positions
/// are not validated here, so a bad script surfaces as an engine
/// `InvalidMove` error. An exhausted script returns an out-of-range
/// position, which the engine likewise rejects.
#[derive(Clone, Debug)]
pub struct ScriptedProvider {
    moves: VecDeque<Position>,
}

impl ScriptedProvider {
    /// Create a provider replaying `moves` in order.
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of scripted moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveProvider for ScriptedProvider {
    fn propose_move(&mut self, _board: &Board) -> Position {
        self.moves.pop_front().unwrap_or(EXHAUSTED)
    }
}

/// Picks uniformly among the currently-empty cells.
///
/// Backed by the crate's seeded RNG, so games against a `RandomProvider`
/// replay identically from the same seed.
#[derive(Clone, Debug)]
pub struct RandomProvider {
    rng: GameRng,
}

impl RandomProvider {
    /// Create a provider drawing from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveProvider for RandomProvider {
    fn propose_move(&mut self, board: &Board) -> Position {
        let empties: Vec<Position> = board.empty_positions().collect();
        self.rng.choose(&empties).copied().unwrap_or(EXHAUSTED)
    }
}

/// Plays the first empty cell in row-major order.
///
/// The simplest conforming automated provider; useful as a deterministic
/// baseline opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstEmptyProvider;

impl FirstEmptyProvider {
    /// Create the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MoveProvider for FirstEmptyProvider {
    fn propose_move(&mut self, board: &Board) -> Position {
        board.empty_positions().next().unwrap_or(EXHAUSTED)
    }
}
