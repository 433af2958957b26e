//! Grid storage, move validation, and line evaluation.
//!
//! The board owns a contiguous row-major grid of [`Symbol`]s. Cells are
//! written exactly once per game, only through [`Board::apply_move`]; every
//! other operation is a read-only query, so a shared `&Board` doubles as the
//! read-only view handed to move-providers.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Position, Symbol};

/// Result of scanning the board's lines for a winner.
///
/// Lines are scanned in a fixed order — rows, then columns, then the main
/// diagonal, then the anti-diagonal — so the result is deterministic. In any
/// reachable game state at most one symbol can hold a winning line, so the
/// scan order never changes which symbol is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineResult {
    /// Some full line is uniformly this non-empty symbol.
    Winner(Symbol),
    /// No line wins and every cell is filled.
    Draw,
    /// No line wins and empty cells remain.
    InProgress,
}

/// An owned rows × columns grid of symbols.
///
/// ## Diagonals
///
/// Both diagonals are evaluated over `min(rows, columns)` cells starting at
/// `(0, 0)` and `(0, columns - 1)`. On non-square boards this degenerates to
/// a partial line, so diagonal win conditions are only meaningful for square
/// boards; rows and columns work for any dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Row-major cell storage, `rows * columns` entries.
    grid: Vec<Symbol>,
}

impl Board {
    /// Rows and columns of the canonical tic-tac-toe board.
    pub const STANDARD_SIZE: usize = 3;

    /// Create an empty board.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] if either dimension
    /// is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board dimensions must be at least 1x1, got {}x{}",
                rows, columns
            )));
        }

        Ok(Self {
            rows,
            columns,
            grid: vec![Symbol::Empty; rows * columns],
        })
    }

    /// Create the canonical 3×3 board.
    #[must_use]
    pub fn standard() -> Self {
        // 3x3 always satisfies the dimension check.
        Self::new(Self::STANDARD_SIZE, Self::STANDARD_SIZE)
            .unwrap_or_else(|_| unreachable!())
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.columns + pos.col
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.columns
    }

    /// Get the symbol at a position, or `None` if out of range.
    #[must_use]
    pub fn symbol_at(&self, pos: Position) -> Option<Symbol> {
        self.in_bounds(pos).then(|| self.grid[self.index(pos)])
    }

    /// Check whether a move at `pos` would be legal: in bounds and targeting
    /// an empty cell. No side effects.
    #[must_use]
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.symbol_at(pos).is_some_and(Symbol::is_empty)
    }

    /// Validate a move, reporting why it is illegal.
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::CellOccupied`].
    pub fn validate_move(&self, pos: Position) -> Result<(), GameError> {
        match self.symbol_at(pos) {
            None => Err(GameError::OutOfBounds {
                pos,
                rows: self.rows,
                columns: self.columns,
            }),
            Some(occupant) if !occupant.is_empty() => {
                Err(GameError::CellOccupied { pos, occupant })
            }
            Some(_) => Ok(()),
        }
    }

    /// Write `symbol` into the cell at `pos`.
    ///
    /// Fails with the validation error rather than overwriting state, so a
    /// cell is set at most once per game.
    ///
    /// # Panics
    ///
    /// Panics if asked to place [`Symbol::Empty`]; that is a programming
    /// error, not a game condition.
    pub fn apply_move(&mut self, pos: Position, symbol: Symbol) -> Result<(), GameError> {
        assert!(!symbol.is_empty(), "cannot place the empty symbol");
        self.validate_move(pos)?;

        let idx = self.index(pos);
        self.grid[idx] = symbol;
        Ok(())
    }

    /// Check whether every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.iter().all(|s| !s.is_empty())
    }

    /// Iterate over the positions of all currently-empty cells, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid.iter().enumerate().filter_map(|(i, s)| {
            s.is_empty()
                .then(|| Position::new(i / self.columns, i % self.columns))
        })
    }

    /// Scan all rows, all columns, and both diagonals for a winner.
    ///
    /// A line wins iff every cell in it holds the same non-empty symbol.
    /// If no line wins and the board is full the result is [`LineResult::Draw`];
    /// otherwise [`LineResult::InProgress`].
    #[must_use]
    pub fn evaluate_lines(&self) -> LineResult {
        for row in 0..self.rows {
            if let Some(winner) = self.line_winner(self.row_cells(row)) {
                return LineResult::Winner(winner);
            }
        }

        for col in 0..self.columns {
            if let Some(winner) = self.line_winner(self.column_cells(col)) {
                return LineResult::Winner(winner);
            }
        }

        if let Some(winner) = self.line_winner(self.main_diagonal_cells()) {
            return LineResult::Winner(winner);
        }
        if let Some(winner) = self.line_winner(self.anti_diagonal_cells()) {
            return LineResult::Winner(winner);
        }

        if self.is_full() {
            LineResult::Draw
        } else {
            LineResult::InProgress
        }
    }

    fn row_cells(&self, row: usize) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.columns).map(move |col| self.grid[row * self.columns + col])
    }

    fn column_cells(&self, col: usize) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.rows).map(move |row| self.grid[row * self.columns + col])
    }

    fn main_diagonal_cells(&self) -> impl Iterator<Item = Symbol> + '_ {
        let len = self.rows.min(self.columns);
        (0..len).map(move |i| self.grid[i * self.columns + i])
    }

    fn anti_diagonal_cells(&self) -> impl Iterator<Item = Symbol> + '_ {
        let len = self.rows.min(self.columns);
        (0..len).map(move |i| self.grid[i * self.columns + (self.columns - 1 - i)])
    }

    fn line_winner(&self, mut cells: impl Iterator<Item = Symbol>) -> Option<Symbol> {
        let first = cells.next()?;
        if first.is_empty() {
            return None;
        }
        cells.all(|s| s == first).then_some(first)
    }
}
