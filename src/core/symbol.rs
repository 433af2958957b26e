//! Cell symbols.
//!
//! A cell holds either one of the two player marks or `Empty`. The engine
//! never interprets `X` and `O` beyond identity: which mark moves first is
//! decided by player configuration, not by the symbol itself.

use serde::{Deserialize, Serialize};

/// The mark occupying a board cell.
///
/// `Empty` is the state of an unplayed cell; it is never a legal mark for a
/// player to place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The first mark (canonically the cross).
    X,
    /// The second mark (canonically the nought).
    O,
    /// An unplayed cell.
    #[default]
    Empty,
}

impl Symbol {
    /// Check whether this is the empty (unplayed) symbol.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Symbol::Empty)
    }

    /// The opposing mark.
    ///
    /// `Empty` has no opponent and maps to itself.
    ///
    /// ```
    /// use gridline::Symbol;
    ///
    /// assert_eq!(Symbol::X.opponent(), Symbol::O);
    /// assert_eq!(Symbol::O.opponent(), Symbol::X);
    /// assert_eq!(Symbol::Empty.opponent(), Symbol::Empty);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
            Symbol::Empty => Symbol::Empty,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
            Symbol::Empty => '.',
        };
        write!(f, "{}", c)
    }
}
