//! Players and the move-provider capability.
//!
//! A [`Player`] is an immutable binding of a board symbol to a
//! [`MoveProvider`], the single polymorphic seam of the engine. Anything
//! that can produce a position for the current board — a scripted sequence,
//! a random strategy, an interactive prompt loop — plugs in here.

pub mod player;
pub mod provider;

pub use player::Player;
pub use provider::{FirstEmptyProvider, MoveProvider, RandomProvider, ScriptedProvider};
