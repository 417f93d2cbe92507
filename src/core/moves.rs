//! Move representation: which pile, how many stones, and where they cascade.
//!
//! A staircase move touching two piles is a single atomic `Move` value with
//! an optional cascade target, applied as one indivisible transition - never
//! two separate pile mutations.

use serde::{Deserialize, Serialize};

use super::pile::Turn;

/// A complete move: remove `stone_count` stones from `piles[pile_index]`.
///
/// `cascade_target` is present only for staircase moves on a pile other than
/// the first, and always names the adjacent preceding pile, which receives
/// the removed stones instead of them leaving the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the pile stones are removed from.
    pub pile_index: usize,
    /// How many stones to remove (at least 1).
    pub stone_count: u8,
    /// Receiving pile for staircase cascades; `None` when stones leave play.
    pub cascade_target: Option<usize>,
}

impl Move {
    /// A plain removal: stones leave the game.
    #[must_use]
    pub const fn take(pile_index: usize, stone_count: u8) -> Self {
        Self {
            pile_index,
            stone_count,
            cascade_target: None,
        }
    }

    /// A staircase removal from `pile_index > 0`: the stones land in the
    /// preceding pile.
    #[must_use]
    pub const fn cascade(pile_index: usize, stone_count: u8) -> Self {
        Self {
            pile_index,
            stone_count,
            cascade_target: Some(pile_index - 1),
        }
    }

    /// True if this move cascades into a preceding pile.
    #[must_use]
    pub const fn is_cascade(&self) -> bool {
        self.cascade_target.is_some()
    }
}

/// A recorded move with ordering metadata, kept by the state machine so a
/// finished game can be replayed or inspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position in the game, starting at 0.
    pub sequence: u32,
    /// The side that made the move.
    pub actor: Turn,
    /// The move as applied.
    pub mv: Move,
}
