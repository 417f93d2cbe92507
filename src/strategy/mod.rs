//! Opponent move selection: Sprague-Grundy (nim-sum) analysis per variant.
//!
//! Each variant gets one `Strategy` implementation, selected once at setup
//! and held for the lifetime of the game. Every implementation derives an
//! algebraic winning move when one exists and otherwise falls back to the
//! shared randomized policy - a position with nim-sum zero is already lost
//! for the mover, so no decisive move can be derived from it.

pub mod fallback;
pub mod misere;
pub mod normal;
pub mod staircase;

use crate::core::{GameRng, GameVariant, Move, PileState};

pub use fallback::random_move;
pub use misere::MisereNim;
pub use normal::NormalNim;
pub use staircase::StaircaseNim;

/// Bitwise XOR of all pile sizes.
///
/// Zero indicates a losing position for the side about to move, under
/// normal play.
#[must_use]
pub fn nim_sum(piles: &[u8]) -> u8 {
    piles.iter().fold(0, |sum, &pile| sum ^ pile)
}

/// Variant-specific move selection for the automated opponent.
///
/// `select_move` never fails: callers only invoke it on a verified
/// non-terminal state, which always has at least one nonempty pile.
pub trait Strategy: Send + Sync {
    /// The variant this strategy plays.
    fn variant(&self) -> GameVariant;

    /// Pick the opponent's move for a non-terminal state.
    fn select_move(&self, state: &PileState, rng: &mut GameRng) -> Move;
}

/// The strategy implementation for a variant.
#[must_use]
pub fn strategy_for(variant: GameVariant) -> Box<dyn Strategy> {
    match variant {
        GameVariant::Normal => Box::new(NormalNim),
        GameVariant::Misere => Box::new(MisereNim),
        GameVariant::Staircase => Box::new(StaircaseNim),
    }
}
