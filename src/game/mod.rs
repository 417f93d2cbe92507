//! The game state machine and setup helpers.

pub mod machine;

use crate::core::{GameRng, Piles, MAX_PILE_SIZE};

pub use machine::{Game, Outcome, PendingMove, Phase, Snapshot};

/// Generate a random legal setup: 2-5 piles of 1-15 stones.
///
/// Backs the "random setup" option on the configuration screen. Draws from
/// the injected RNG, so a fixed seed yields a fixed board.
#[must_use]
pub fn random_initial_piles(rng: &mut GameRng) -> Piles {
    let count = rng.gen_range_usize(2..6);
    (0..count)
        .map(|_| rng.gen_stone_count(1..=MAX_PILE_SIZE))
        .collect()
}
