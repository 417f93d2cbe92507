//! # nim-engine
//!
//! Rules and strategy engine for Nim-family stone-removal games: a human
//! player against an automated opponent across three rule variants (normal,
//! misère, staircase).
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, theming, dialogs, and audio live in an
//!    external UI collaborator that submits moves and reads snapshots
//!    through [`Game`]; it never touches pile data directly.
//!
//! 2. **Validate, then apply**: legality checking is a pure predicate and
//!    applying a move is a separate, atomic step producing a fresh
//!    [`PileState`] snapshot.
//!
//! 3. **Deterministic by injection**: the opponent's randomized fallback
//!    draws from a caller-seeded [`GameRng`], so every game is reproducible.
//!
//! ## Modules
//!
//! - `core`: piles, moves, variants, RNG, errors
//! - `rules`: move legality checks
//! - `strategy`: per-variant nim-sum move selection plus random fallback
//! - `game`: the `Setup -> PlayerTurn <-> OpponentTurn -> Terminal` machine
//!
//! ## Example
//!
//! ```
//! use nim_engine::{Game, GameVariant, Outcome, Phase};
//!
//! let mut game = Game::new(GameVariant::Normal, &[3, 4, 5], 42).unwrap();
//! game.start();
//!
//! let snapshot = game.submit_move(0, 2).unwrap();
//! assert_eq!(snapshot.piles, vec![1, 4, 5]);
//! assert_eq!(snapshot.phase, Phase::OpponentTurn);
//!
//! let snapshot = game.play_opponent_turn().unwrap();
//! assert_eq!(snapshot.phase, Phase::PlayerTurn);
//! assert_eq!(snapshot.outcome, Outcome::Ongoing);
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod game;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameVariant, Move, MoveRecord, PileState, Piles, Turn, VariantRules,
    MAX_PILES, MAX_PILE_SIZE, MIN_PILES,
};

pub use crate::rules::{move_for_variant, validate_move};

pub use crate::strategy::{
    nim_sum, random_move, strategy_for, MisereNim, NormalNim, StaircaseNim, Strategy,
};

pub use crate::game::{random_initial_piles, Game, Outcome, PendingMove, Phase, Snapshot};
