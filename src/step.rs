//! Hard-drop, lock, and clear-kind classification.
//!
//! Grounded on `original_source/tetris_step.cpp` (drop + lock + corner
//! check) and `libtetris::Board::lock_piece`
//! (`examples/MinusKelvin-cold-clear/libtetris/src/board.rs`) for the
//! overall shape of the operation (clear lines, then classify). The
//! T-spin/mini corner rule intentionally does NOT use the teacher's
//! orientation-dependent `mini_tspin_corners`/`non_mini_tspin_corners`
//! tables — `spec.md` §4.4 specifies a simpler, orientation-agnostic rule
//! (count occupied diagonal corners around the piece's center cell), which
//! is what's implemented here. Per the Design Note in §4.4, this function
//! does NOT check that the last successful action was a rotation -- any
//! policy wishing to require that tracks it outside the core, the same
//! way `original_source/tetris_search.cpp`'s `step_lock_piece` does.

use crate::board::Board;
use crate::piece::Piece;
use crate::search::ClearKind;

/// The result of locking a piece onto a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockResult {
    pub board: Board,
    pub lines_cleared: usize,
    pub clear_kind: ClearKind,
    pub perfect_clear: bool,
}

/// Diagonal corner occupancy around the piece's center reference point
/// `(x, y)`: `(total occupied, upper-left occupied, upper-right occupied)`.
/// Matches `spec.md` §4.4's T-spin rule exactly, independent of piece
/// rotation or kind (it's evaluated for every piece, but only meaningful
/// for T per the spin-naming convention upstream of this module).
fn corner_status(board: &Board, x: i32, y: i32) -> (usize, bool, bool) {
    let lower_left = board.occupied(x - 1, y - 1);
    let lower_right = board.occupied(x + 1, y - 1);
    let upper_left = board.occupied(x - 1, y + 1);
    let upper_right = board.occupied(x + 1, y + 1);
    let total = [lower_left, lower_right, upper_left, upper_right]
        .iter()
        .filter(|&&occ| occ)
        .count();
    (total, upper_left, upper_right)
}

/// Hard-drops `piece` (given as `shape`, already rotated) at `(x,
/// start_y)`, locks it, clears any full rows, and classifies the result.
/// Exactly the 5 parameters `spec.md` §4.4 specifies: no rotation-state
/// or "last action" parameter -- T-spin detection is purely a function
/// of diagonal corner occupancy at the landing position.
pub fn step_lock_piece(
    board: &Board,
    piece: Piece,
    shape: &[(i32, i32)],
    x: i32,
    start_y: i32,
) -> LockResult {
    let landing_y = board.drop_piece(shape, x, start_y);
    let locked = board.place_piece(shape, x, landing_y);
    let (cleared_board, lines_cleared) = locked.clear_lines();
    let perfect_clear = lines_cleared > 0 && cleared_board.is_empty();

    let (corners, upper_left, upper_right) = if piece == Piece::T {
        corner_status(board, x, landing_y)
    } else {
        (0, false, false)
    };

    let is_tspin = piece == Piece::T && corners >= 3;
    // Mini iff it's a T-spin and NOT both upper diagonals are occupied:
    // a 3-corner placement missing a lower corner still has both upper
    // corners walled and is a full T-spin; only a 3-corner placement
    // missing an upper corner is mini.
    let is_mini = is_tspin && !(upper_left && upper_right);

    let clear_kind = ClearKind::classify(lines_cleared, is_tspin, is_mini);

    LockResult {
        board: cleared_board,
        lines_cleared,
        clear_kind,
        perfect_clear,
    }
}
