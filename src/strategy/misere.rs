//! Misère Nim: last stone taken loses.
//!
//! Away from the endgame misère and normal play coincide, so the normal
//! algorithm is reused while more than one pile holds several stones. The
//! endgame is decided by the parity of singleton piles: the mover wants to
//! leave the other side an odd number of them.

use crate::core::{GameRng, GameVariant, Move, PileState};

use super::{fallback, normal, Strategy};

/// Optimal misère Nim.
#[derive(Clone, Copy, Debug, Default)]
pub struct MisereNim;

/// The misère winning move, if one exists.
///
/// With `big` piles above one stone and `ones` singleton piles:
///
/// - `big > 1`: normal-play algorithm unchanged.
/// - `big == 1`: reduce the big pile to 0 when `ones` is odd, else to 1,
///   leaving singletons whose parity forces the other side onto the last
///   stone. The reduction formula is kept exactly as documented.
/// - `big == 0`: with `ones` even, take one stone from any singleton; with
///   `ones` odd the position is already lost and no decisive move exists.
#[must_use]
pub fn winning_move(piles: &[u8]) -> Option<Move> {
    let big = piles.iter().filter(|&&pile| pile > 1).count();
    let ones = piles.iter().filter(|&&pile| pile == 1).count();

    if big > 1 {
        normal::winning_move(piles)
    } else if big == 1 {
        let idx = piles.iter().position(|&pile| pile > 1)?;
        let leave = if ones % 2 == 1 { 0 } else { 1 };
        Some(Move::take(idx, piles[idx] - leave))
    } else if ones % 2 == 0 {
        let idx = piles.iter().position(|&pile| pile == 1)?;
        Some(Move::take(idx, 1))
    } else {
        None
    }
}

impl Strategy for MisereNim {
    fn variant(&self) -> GameVariant {
        GameVariant::Misere
    }

    fn select_move(&self, state: &PileState, rng: &mut GameRng) -> Move {
        winning_move(state.piles())
            .unwrap_or_else(|| fallback::random_move(state.piles(), self.variant(), rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Turn;
    use crate::strategy::nim_sum;

    #[test]
    fn test_two_singletons_takes_one() {
        // big = 0, ones even: take a singleton, leaving the other side the
        // final stone.
        let mv = winning_move(&[1, 1]).unwrap();
        assert_eq!(mv.stone_count, 1);
        assert_eq!(mv.cascade_target, None);
        assert_eq!(mv.pile_index, 0);
    }

    #[test]
    fn test_endgame_all_singletons_odd_is_lost() {
        assert_eq!(winning_move(&[1, 0, 0]), None);
        assert_eq!(winning_move(&[1, 1, 1]), None);
    }

    #[test]
    fn test_single_big_pile_odd_ones_empties_it() {
        // ones = 1 (odd): reduce the big pile to 0, leaving [1, 0].
        let mv = winning_move(&[1, 3]).unwrap();
        assert_eq!(mv, Move::take(1, 3));
    }

    #[test]
    fn test_single_big_pile_even_ones_leaves_one() {
        // ones = 0 (even): reduce the big pile to 1.
        let mv = winning_move(&[3, 0]).unwrap();
        assert_eq!(mv, Move::take(0, 2));

        // ones = 2 (even): reduce to 1, leaving three singletons.
        let mv = winning_move(&[1, 4, 1]).unwrap();
        assert_eq!(mv, Move::take(1, 3));
    }

    #[test]
    fn test_away_from_endgame_plays_normal() {
        // Two big piles: misère coincides with normal play.
        let mv = winning_move(&[2, 2, 1]).unwrap();
        assert_eq!(mv, Move::take(2, 1));
        assert_eq!(nim_sum(&[2, 2, 0]), 0);

        // Two big piles with nim-sum zero: no decisive move either way.
        assert_eq!(winning_move(&[2, 3, 1]), None);
    }

    #[test]
    fn test_select_move_falls_back_when_lost() {
        let state = PileState::new(&[1, 1, 1], Turn::Opponent).unwrap();
        let mut rng = GameRng::new(3);
        let mv = MisereNim.select_move(&state, &mut rng);

        assert!(mv.pile_index < 3);
        assert_eq!(mv.stone_count, 1);
        assert!(mv.cascade_target.is_none());
    }
}
