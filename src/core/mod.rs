//! Core engine types: piles, moves, variants, RNG, errors.
//!
//! These are the leaves of the dependency graph; everything else in the
//! crate is built on top of them.

pub mod error;
pub mod moves;
pub mod pile;
pub mod rng;
pub mod variant;

pub use error::GameError;
pub use moves::{Move, MoveRecord};
pub use pile::{PileState, Piles, Turn, MAX_PILES, MAX_PILE_SIZE, MIN_PILES};
pub use rng::GameRng;
pub use variant::{GameVariant, VariantRules};
