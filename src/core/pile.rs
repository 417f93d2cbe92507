//! Pile state: the board of a Nim-family game.
//!
//! ## PileState
//!
//! An immutable-per-step snapshot of the pile sizes plus whose turn it is.
//! `apply` never mutates in place: it returns a fresh `PileState` with the
//! move's effect and the turn passed to the other side, so a caller can keep
//! every intermediate position for history or inspection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GameError;
use super::moves::Move;

/// Minimum number of piles accepted at setup.
pub const MIN_PILES: usize = 2;

/// Maximum number of piles accepted at setup.
pub const MAX_PILES: usize = 7;

/// Maximum stones per pile accepted at setup.
pub const MAX_PILE_SIZE: u8 = 15;

/// Inline pile storage. Seven piles fit without heap allocation.
pub type Piles = SmallVec<[u8; MAX_PILES]>;

/// Which side is to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

impl Turn {
    /// The side that moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Turn::Player => Turn::Opponent,
            Turn::Opponent => Turn::Player,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Player => write!(f, "player"),
            Turn::Opponent => write!(f, "opponent"),
        }
    }
}

/// Immutable snapshot of pile sizes and the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileState {
    piles: Piles,
    turn: Turn,
}

impl PileState {
    /// Create the initial state from validated setup input.
    ///
    /// Fails with `InvalidSetup` unless there are 2-7 piles, each holding
    /// 1-15 stones.
    pub fn new(piles: &[u8], first_to_move: Turn) -> Result<Self, GameError> {
        if !(MIN_PILES..=MAX_PILES).contains(&piles.len()) {
            return Err(GameError::InvalidSetup {
                reason: "pile count must be between 2 and 7",
            });
        }
        if piles.iter().any(|&p| p == 0 || p > MAX_PILE_SIZE) {
            return Err(GameError::InvalidSetup {
                reason: "each pile must hold between 1 and 15 stones",
            });
        }
        Ok(Self {
            piles: SmallVec::from_slice(piles),
            turn: first_to_move,
        })
    }

    /// The pile sizes, in board order.
    #[must_use]
    pub fn piles(&self) -> &[u8] {
        &self.piles
    }

    /// Number of piles (fixed for the lifetime of a game).
    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// The side to move in this snapshot.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Total stones remaining across all piles.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.piles.iter().map(|&p| u32::from(p)).sum()
    }

    /// True once every pile is empty; the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.total_stones() == 0
    }

    /// Apply a move, producing the successor snapshot with the turn passed
    /// to the other side.
    ///
    /// Callers are expected to validate first; this re-checks the structural
    /// facts (index in range, count available, cascade target adjacent) so a
    /// skipped validation cannot corrupt the board.
    pub fn apply(&self, mv: &Move) -> Result<PileState, GameError> {
        let available = *self
            .piles
            .get(mv.pile_index)
            .ok_or(GameError::InvalidPileIndex { index: mv.pile_index })?;
        if mv.stone_count == 0 || mv.stone_count > available {
            return Err(GameError::InvalidStoneCount {
                requested: mv.stone_count,
                available,
            });
        }
        if let Some(target) = mv.cascade_target {
            if mv.pile_index == 0 || target != mv.pile_index - 1 {
                return Err(GameError::InvalidCascade {
                    pile_index: mv.pile_index,
                });
            }
        }

        let mut piles = self.piles.clone();
        piles[mv.pile_index] -= mv.stone_count;
        if let Some(target) = mv.cascade_target {
            // Removed stones reappear in the preceding pile; the total is
            // conserved but pile 0 can only shrink, so play still terminates.
            piles[target] += mv.stone_count;
        }

        Ok(Self {
            piles,
            turn: self.turn.other(),
        })
    }
}
