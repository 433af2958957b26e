//! Board positions.

use serde::{Deserialize, Serialize};

/// A zero-indexed (row, column) pair.
///
/// Positions carry no inherent bounds; whether a position is on a given
/// board (and whether that cell is playable) is answered by
/// [`Board::is_valid_move`](crate::board::Board::is_valid_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_equality() {
        assert_eq!(Position::new(1, 2), Position::new(1, 2));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
    }

    #[test]
    fn test_position_from_tuple() {
        let pos: Position = (0, 2).into();
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(1, 2)), "(1, 2)");
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new(2, 0);
        let json = serde_json::to_string(&pos).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
