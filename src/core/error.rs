//! Typed, recoverable errors at the engine boundary.
//!
//! Every rejected operation leaves the game state unchanged; the caller
//! presents the error and may retry. Nothing here is fatal, and the engine
//! never enters an undefined state from invalid input.

use thiserror::Error;

/// Why an operation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The named pile does not exist on this board.
    #[error("pile index {index} is out of range")]
    InvalidPileIndex {
        /// The offending index.
        index: usize,
    },

    /// The requested removal is empty or exceeds the pile.
    #[error("cannot remove {requested} stones from a pile holding {available}")]
    InvalidStoneCount {
        /// Stones the move asked to remove.
        requested: u8,
        /// Stones actually in the pile.
        available: u8,
    },

    /// The acting side is not the side to move.
    #[error("it is not that side's turn to move")]
    WrongTurn,

    /// All piles are already empty; no further moves exist.
    #[error("the game has already ended")]
    GameAlreadyTerminal,

    /// The move's cascade target violates staircase discipline: moves on
    /// pile 0 take no target, moves on any other pile must target the
    /// adjacent preceding pile, and non-staircase variants never cascade.
    #[error("invalid cascade for a move on pile {pile_index}")]
    InvalidCascade {
        /// The pile the move removes from.
        pile_index: usize,
    },

    /// The initial pile configuration is outside the accepted bounds.
    #[error("invalid setup: {reason}")]
    InvalidSetup {
        /// What was wrong with the configuration.
        reason: &'static str,
    },

    /// An opponent move was computed against a state the machine has since
    /// moved past (or against a machine that was reset); it must be
    /// discarded, not applied.
    #[error("opponent move was computed from a superseded state")]
    StaleOpponentMove,
}
