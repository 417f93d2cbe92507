//! The game state machine.
//!
//! `Setup -> PlayerTurn <-> OpponentTurn -> Terminal`. One `Game` instance
//! owns its `PileState` exclusively; it is single-threaded and synchronous,
//! and validate-then-apply is one atomic step. Opponent moves may be
//! computed ahead of committing (the UI usually inserts a think delay); the
//! pending handle pins the game id and state version it was computed from,
//! so a computation that outlived its state is rejected instead of applied.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::{
    GameError, GameRng, GameVariant, Move, MoveRecord, PileState, Piles, Turn,
};
use crate::rules::{move_for_variant, validate_move};
use crate::strategy::{strategy_for, Strategy};

static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(0);

/// Where the machine is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Configured but not started.
    Setup,
    /// Waiting for the human player's move.
    PlayerTurn,
    /// Waiting for the opponent's move to be computed and committed.
    OpponentTurn,
    /// The game is over; absorbing.
    Terminal,
}

/// Who won, if anyone yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still in progress.
    Ongoing,
    /// The human player won.
    PlayerWins,
    /// The automated opponent won.
    OpponentWins,
}

/// Read-only view of the game for the UI collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current pile sizes, in board order.
    pub piles: Vec<u8>,
    /// The side to move.
    pub turn: Turn,
    /// Lifecycle phase.
    pub phase: Phase,
    /// Winner, once terminal.
    pub outcome: Outcome,
    /// The rule variant in play.
    pub variant: GameVariant,
}

/// An opponent move computed but not yet committed.
///
/// Carries the identity and version of the state it was derived from;
/// committing it against any other state fails with `StaleOpponentMove`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    game_id: u64,
    version: u64,
    /// The move the strategy chose.
    pub mv: Move,
}

/// A single game: validated setup, turn alternation, terminal detection,
/// and orchestration of the validator and the variant strategy.
pub struct Game {
    id: u64,
    variant: GameVariant,
    seed: u64,
    initial_piles: Piles,
    state: PileState,
    phase: Phase,
    outcome: Outcome,
    strategy: Box<dyn Strategy>,
    rng: GameRng,
    history: Vec<MoveRecord>,
    version: u64,
}

impl Game {
    /// Create a game in the `Setup` phase.
    ///
    /// `initial_piles` must hold 2-7 piles of 1-15 stones each, else
    /// `InvalidSetup`. The seed drives the opponent's fallback policy, so a
    /// fixed seed replays identically.
    pub fn new(variant: GameVariant, initial_piles: &[u8], seed: u64) -> Result<Self, GameError> {
        let state = PileState::new(initial_piles, Turn::Player)?;
        Ok(Self {
            id: NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed),
            variant,
            seed,
            initial_piles: Piles::from_slice(initial_piles),
            state,
            phase: Phase::Setup,
            outcome: Outcome::Ongoing,
            strategy: strategy_for(variant),
            rng: GameRng::new(seed),
            history: Vec::new(),
            version: 0,
        })
    }

    /// Begin play: `Setup -> PlayerTurn`. No effect outside `Setup`.
    pub fn start(&mut self) {
        if self.phase == Phase::Setup {
            self.phase = Phase::PlayerTurn;
        }
    }

    /// The rule variant in play.
    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, once the game is terminal.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The current board snapshot (piles plus side to move).
    #[must_use]
    pub fn state(&self) -> &PileState {
        &self.state
    }

    /// Every move applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Read-only view for the UI.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            piles: self.state.piles().to_vec(),
            turn: self.state.turn(),
            phase: self.phase,
            outcome: self.outcome,
            variant: self.variant,
        }
    }

    /// Submit the human player's move as `(pile index, stone count)`.
    ///
    /// The cascade target is derived from the variant, never supplied by the
    /// caller. On rejection the state is unchanged and the turn does not
    /// pass.
    pub fn submit_move(
        &mut self,
        pile_index: usize,
        stone_count: u8,
    ) -> Result<Snapshot, GameError> {
        match self.phase {
            Phase::Terminal => return Err(GameError::GameAlreadyTerminal),
            Phase::PlayerTurn => {}
            Phase::Setup | Phase::OpponentTurn => return Err(GameError::WrongTurn),
        }
        let mv = move_for_variant(self.variant, pile_index, stone_count);
        self.commit(mv, Turn::Player)
    }

    /// Ask the strategy for the opponent's move without committing it.
    ///
    /// The returned handle is only valid against the exact state it was
    /// computed from; commit it promptly or discard it.
    pub fn compute_opponent_move(&mut self) -> Result<PendingMove, GameError> {
        match self.phase {
            Phase::Terminal => return Err(GameError::GameAlreadyTerminal),
            Phase::OpponentTurn => {}
            Phase::Setup | Phase::PlayerTurn => return Err(GameError::WrongTurn),
        }
        let mv = self.strategy.select_move(&self.state, &mut self.rng);
        Ok(PendingMove {
            game_id: self.id,
            version: self.version,
            mv,
        })
    }

    /// Commit a previously computed opponent move.
    ///
    /// Fails with `StaleOpponentMove` if this machine is not the one the
    /// move was computed on, or has moved past that state (including after a
    /// reset).
    pub fn commit_opponent_move(&mut self, pending: PendingMove) -> Result<Snapshot, GameError> {
        if pending.game_id != self.id || pending.version != self.version {
            return Err(GameError::StaleOpponentMove);
        }
        self.commit(pending.mv, Turn::Opponent)
    }

    /// Compute and commit the opponent's move in one synchronous step.
    pub fn play_opponent_turn(&mut self) -> Result<Snapshot, GameError> {
        let pending = self.compute_opponent_move()?;
        self.commit_opponent_move(pending)
    }

    /// A fresh machine with the same variant, setup, and seed.
    ///
    /// The old instance is untouched; pending moves computed on it can no
    /// longer be committed anywhere.
    #[must_use]
    pub fn reset(&self) -> Game {
        Game::new(self.variant, &self.initial_piles, self.seed)
            .expect("setup was validated when this game was created")
    }

    /// Validate-then-apply as one atomic step, then advance the phase.
    fn commit(&mut self, mv: Move, actor: Turn) -> Result<Snapshot, GameError> {
        validate_move(&self.state, self.variant, &mv, actor)?;
        self.state = self.state.apply(&mv)?;
        self.version += 1;
        self.history.push(MoveRecord {
            sequence: self.history.len() as u32,
            actor,
            mv,
        });

        if self.state.is_terminal() {
            self.phase = Phase::Terminal;
            // Normal and staircase play: the mover who empties the board
            // wins. Misere: that mover loses.
            let winner = match self.variant {
                GameVariant::Misere => actor.other(),
                GameVariant::Normal | GameVariant::Staircase => actor,
            };
            self.outcome = match winner {
                Turn::Player => Outcome::PlayerWins,
                Turn::Opponent => Outcome::OpponentWins,
            };
        } else {
            self.phase = match actor {
                Turn::Player => Phase::OpponentTurn,
                Turn::Opponent => Phase::PlayerTurn,
            };
        }
        Ok(self.snapshot())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("variant", &self.variant)
            .field("phase", &self.phase)
            .field("outcome", &self.outcome)
            .field("piles", &self.state.piles())
            .field("moves", &self.history.len())
            .finish()
    }
}
