//! Move legality checks.
//!
//! Validation is a pure predicate over `(state, variant, move, acting side)`:
//! no side effects, no mutation, identical inputs always yield the identical
//! verdict. Applying a validated move is a separate step so callers may
//! validate without committing.

use crate::core::{GameError, GameVariant, Move, PileState, Turn};

/// Check a proposed move against the variant rules and the current turn.
///
/// Checks run in a fixed order, and the first failure wins:
///
/// 1. the acting side holds the turn,
/// 2. the game is not already over,
/// 3. the pile exists,
/// 4. the removal count is between 1 and the pile size,
/// 5. the cascade target obeys staircase discipline.
pub fn validate_move(
    state: &PileState,
    variant: GameVariant,
    mv: &Move,
    acting: Turn,
) -> Result<(), GameError> {
    if acting != state.turn() {
        return Err(GameError::WrongTurn);
    }
    if state.is_terminal() {
        return Err(GameError::GameAlreadyTerminal);
    }
    let Some(&available) = state.piles().get(mv.pile_index) else {
        return Err(GameError::InvalidPileIndex { index: mv.pile_index });
    };
    if mv.stone_count == 0 || mv.stone_count > available {
        return Err(GameError::InvalidStoneCount {
            requested: mv.stone_count,
            available,
        });
    }
    validate_cascade(variant, mv)
}

/// Cascade discipline: only staircase moves off pile 0 cascade, and always
/// into the adjacent preceding pile. Stones removed from pile 0 leave the
/// game entirely under every variant.
fn validate_cascade(variant: GameVariant, mv: &Move) -> Result<(), GameError> {
    let expected = match variant {
        GameVariant::Staircase if mv.pile_index > 0 => Some(mv.pile_index - 1),
        _ => None,
    };
    if mv.cascade_target == expected {
        Ok(())
    } else {
        Err(GameError::InvalidCascade {
            pile_index: mv.pile_index,
        })
    }
}

/// Build the move a UI submission `(pile_index, stone_count)` means under
/// the given variant, deriving the cascade target instead of trusting the
/// caller to supply one.
#[must_use]
pub fn move_for_variant(variant: GameVariant, pile_index: usize, stone_count: u8) -> Move {
    match variant {
        GameVariant::Staircase if pile_index > 0 => Move::cascade(pile_index, stone_count),
        _ => Move::take(pile_index, stone_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(piles: &[u8], turn: Turn) -> PileState {
        PileState::new(piles, turn).unwrap()
    }

    #[test]
    fn test_wrong_turn_checked_first() {
        let s = state(&[3, 4], Turn::Opponent);
        // Even an otherwise-illegal move reports WrongTurn first.
        let verdict = validate_move(&s, GameVariant::Normal, &Move::take(9, 0), Turn::Player);
        assert_eq!(verdict, Err(GameError::WrongTurn));
    }

    #[test]
    fn test_terminal_rejected() {
        let s = state(&[1, 1], Turn::Player)
            .apply(&Move::take(0, 1))
            .unwrap()
            .apply(&Move::take(1, 1))
            .unwrap();
        assert!(s.is_terminal());
        let verdict = validate_move(&s, GameVariant::Normal, &Move::take(0, 1), s.turn());
        assert_eq!(verdict, Err(GameError::GameAlreadyTerminal));
    }

    #[test]
    fn test_pile_index_bounds() {
        let s = state(&[3, 4], Turn::Player);
        let verdict = validate_move(&s, GameVariant::Normal, &Move::take(2, 1), Turn::Player);
        assert_eq!(verdict, Err(GameError::InvalidPileIndex { index: 2 }));
    }

    #[test]
    fn test_stone_count_bounds() {
        let s = state(&[3, 4], Turn::Player);

        assert_eq!(
            validate_move(&s, GameVariant::Normal, &Move::take(0, 0), Turn::Player),
            Err(GameError::InvalidStoneCount { requested: 0, available: 3 })
        );
        assert_eq!(
            validate_move(&s, GameVariant::Normal, &Move::take(0, 4), Turn::Player),
            Err(GameError::InvalidStoneCount { requested: 4, available: 3 })
        );
        assert!(validate_move(&s, GameVariant::Normal, &Move::take(0, 3), Turn::Player).is_ok());
    }

    #[test]
    fn test_staircase_cascade_required_off_pile_zero() {
        let s = state(&[2, 3], Turn::Player);

        // Missing cascade target on a non-zero pile.
        assert_eq!(
            validate_move(&s, GameVariant::Staircase, &Move::take(1, 1), Turn::Player),
            Err(GameError::InvalidCascade { pile_index: 1 })
        );
        assert!(
            validate_move(&s, GameVariant::Staircase, &Move::cascade(1, 1), Turn::Player).is_ok()
        );
    }

    #[test]
    fn test_staircase_pile_zero_takes_no_cascade() {
        let s = state(&[2, 3], Turn::Player);

        assert!(validate_move(&s, GameVariant::Staircase, &Move::take(0, 2), Turn::Player).is_ok());
        let bad = Move { pile_index: 0, stone_count: 1, cascade_target: Some(0) };
        assert_eq!(
            validate_move(&s, GameVariant::Staircase, &bad, Turn::Player),
            Err(GameError::InvalidCascade { pile_index: 0 })
        );
    }

    #[test]
    fn test_non_staircase_never_cascades() {
        let s = state(&[2, 3], Turn::Player);
        for variant in [GameVariant::Normal, GameVariant::Misere] {
            assert_eq!(
                validate_move(&s, variant, &Move::cascade(1, 1), Turn::Player),
                Err(GameError::InvalidCascade { pile_index: 1 })
            );
        }
    }

    #[test]
    fn test_validation_is_pure() {
        let s = state(&[3, 4], Turn::Player);
        let mv = Move::take(0, 2);
        let first = validate_move(&s, GameVariant::Normal, &mv, Turn::Player);
        for _ in 0..10 {
            assert_eq!(validate_move(&s, GameVariant::Normal, &mv, Turn::Player), first);
        }
        assert_eq!(s.piles(), &[3, 4]);
    }

    #[test]
    fn test_move_for_variant() {
        assert_eq!(
            move_for_variant(GameVariant::Normal, 2, 3),
            Move::take(2, 3)
        );
        assert_eq!(
            move_for_variant(GameVariant::Staircase, 2, 3),
            Move::cascade(2, 3)
        );
        // First pile never cascades, even under staircase rules.
        assert_eq!(
            move_for_variant(GameVariant::Staircase, 0, 3),
            Move::take(0, 3)
        );
    }
}
