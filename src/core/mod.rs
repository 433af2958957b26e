//! Core value types: symbols, positions, errors, deterministic RNG.
//!
//! These are the building blocks shared by the board, the players, and the
//! engine. All of them are small, owned values with no interior mutability.

pub mod symbol;
pub mod position;
pub mod error;
pub mod rng;

pub use symbol::Symbol;
pub use position::Position;
pub use error::GameError;
pub use rng::GameRng;
