//! Game state: hold, bag advance, back-to-back/combo tracking, and the
//! top-level `legal_moves`/`apply_move` transition.
//!
//! Grounded on `original_source/tetris_state.cpp`. `Bag` replaces the C++
//! `PieceBag` 1:1 (see [`crate::bag`]). A "turn" here is a single atomic
//! [`Landing`] -- either a placement of the current piece, or of the
//! held/swapped-in piece -- rather than a separate hold-then-place step,
//! matching the original's treatment of hold as just another placement
//! option evaluated up front.

use crate::bag::Bag;
use crate::board::Board;
use crate::piece::{spawn_position_with_fallback, Piece};
use crate::search::{enumerate_landings, Landing};

/// A single player's live game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub bag: Bag,
    pub current: Piece,
    pub hold: Option<Piece>,
    pub back_to_back: bool,
    pub combo: u32,
    pub dead: bool,
}

impl GameState {
    /// A fresh game state seeded from `seed`, with the first piece already
    /// drawn from the bag.
    pub fn new(seed: u64) -> Self {
        let mut bag = Bag::new(seed);
        let current = bag.pop();
        GameState {
            board: Board::new(),
            bag,
            current,
            hold: None,
            back_to_back: false,
            combo: 0,
            dead: false,
        }
    }
}

/// Every legal placement available this turn: every reachable placement
/// of `state.current` (`used_hold = false`), concatenated with every
/// reachable placement of the piece hold would swap in (`used_hold =
/// true`, `piece_after_hold = Some(that piece)`) -- the held piece if one
/// is already held, otherwise a non-consuming preview of the next piece
/// in the bag.
pub fn legal_moves(state: &GameState) -> Vec<Landing> {
    if state.dead {
        return Vec::new();
    }

    let mut moves = Vec::new();

    let spawn = spawn_position_with_fallback(&state.board, state.current);
    if spawn != (-1, -1) {
        let landings = enumerate_landings(
            &state.board,
            state.current,
            spawn.0,
            spawn.1,
            state.combo,
            state.back_to_back,
        );
        moves.extend(landings);
    }

    let swapped_piece = match state.hold {
        Some(p) => p,
        None => state.bag.peek(1)[0],
    };
    let swapped_spawn = spawn_position_with_fallback(&state.board, swapped_piece);
    if swapped_spawn != (-1, -1) {
        let mut landings = enumerate_landings(
            &state.board,
            swapped_piece,
            swapped_spawn.0,
            swapped_spawn.1,
            state.combo,
            state.back_to_back,
        );
        for l in &mut landings {
            l.used_hold = true;
            l.piece_after_hold = Some(swapped_piece);
        }
        moves.extend(landings);
    }

    moves
}

/// Applies `landing` to `state`, returning the new state. A `used_hold`
/// landing swaps `current` into hold first (drawing from the bag only if
/// hold was empty, matching the preview [`legal_moves`] used to build
/// that landing), then commits the landing's precomputed board/combo/B2B
/// fields and draws the next active piece.
pub fn apply_move(state: &GameState, landing: &Landing) -> GameState {
    let mut next = state.clone();

    if landing.used_hold {
        let outgoing = next.current;
        if next.hold.is_none() {
            next.bag.pop();
        }
        next.hold = Some(outgoing);
    }

    next.board = landing.board_after;
    next.combo = landing.combo;
    next.back_to_back = landing.back_to_back;
    next.current = next.bag.pop();

    if spawn_position_with_fallback(&next.board, next.current) == (-1, -1) {
        next.dead = true;
    }

    next
}

/// `true` iff `state`'s active piece cannot spawn at all -- the
/// top-level game-over condition, kept separate from
/// [`crate::duel::is_dead`] which also accounts for a hard-dropped piece
/// overflowing the visible field.
pub fn is_dead_state(state: &GameState) -> bool {
    state.dead
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_not_dead_and_has_moves() {
        let state = GameState::new(1);
        assert!(!is_dead_state(&state));
        assert!(!legal_moves(&state).is_empty());
    }

    #[test]
    fn legal_moves_includes_both_current_and_hold_swapped_placements() {
        let state = GameState::new(1);
        let moves = legal_moves(&state);
        assert!(moves.iter().any(|l| !l.used_hold));
        assert!(moves.iter().any(|l| l.used_hold));
    }

    #[test]
    fn first_hold_swap_previews_the_next_bag_piece_without_consuming_it() {
        let state = GameState::new(2);
        let preview = state.bag.peek(1)[0];
        let moves = legal_moves(&state);
        let held = moves.iter().find(|l| l.used_hold).expect("a hold-swap landing should exist");
        assert_eq!(held.piece_after_hold, Some(preview));
        // legal_moves must not have mutated the bag.
        assert_eq!(state.bag.peek(1)[0], preview);
    }

    #[test]
    fn applying_a_hold_swap_landing_draws_the_previewed_piece_into_hold() {
        let state = GameState::new(3);
        let original_current = state.current;
        let moves = legal_moves(&state);
        let held = moves.iter().find(|l| l.used_hold).unwrap().clone();
        let after = apply_move(&state, &held);
        assert_eq!(after.hold, Some(original_current));
        assert_eq!(after.board, held.board_after);
    }

    #[test]
    fn applying_a_direct_placement_advances_the_bag_and_leaves_hold_untouched() {
        let state = GameState::new(4);
        let moves = legal_moves(&state);
        let direct = moves.iter().find(|l| !l.used_hold).unwrap().clone();
        let after = apply_move(&state, &direct);
        assert_eq!(after.hold, None);
        assert_eq!(after.combo, direct.combo);
        assert_eq!(after.back_to_back, direct.back_to_back);
    }

    #[test]
    fn clearing_lines_increments_combo_and_non_clears_reset_it() {
        let state = GameState::new(5);
        let moves = legal_moves(&state);
        let non_clearing = moves
            .iter()
            .find(|l| !l.used_hold && l.lines_cleared == 0)
            .expect("empty board has non-clearing placements");
        let after = apply_move(&state, non_clearing);
        assert_eq!(after.combo, 0);
    }
}
