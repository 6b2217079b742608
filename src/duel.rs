//! Two-player game-over and winner oracle.
//!
//! Grounded on `original_source/tetris_duel.cpp` and `tetris_gameover.cpp`:
//! a player is dead if their active piece can't even spawn, or if hard
//! dropping it from its spawn rotation and locking it (no clear) leaves
//! any cell occupied on the topmost row of the field.

use crate::board::{Board, BOARD_HEIGHT, BOARD_WIDTH};
use crate::piece::{get_shape, spawn_position_with_fallback, Piece};

/// `true` iff `piece` cannot spawn on `board` at all, or hard-dropping it
/// from its spawn rotation (no clear) occupies any cell on the top row.
pub fn is_dead(board: &Board, piece: Piece) -> bool {
    let spawn = spawn_position_with_fallback(board, piece);
    if spawn == (-1, -1) {
        return true;
    }

    let shape = get_shape(piece, 0);
    let landing_y = board.drop_piece(&shape, spawn.0, spawn.1);
    let placed = board.place_piece(&shape, spawn.0, landing_y);

    let top_row = BOARD_HEIGHT as i32 - 1;
    for x in 0..BOARD_WIDTH as i32 {
        if placed.occupied(x, top_row) {
            return true;
        }
    }
    false
}

/// Which player, if anyone, has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player1,
    Player2,
    Draw,
    None,
}

/// Judges a two-player duel from each side's board and active piece.
/// Matches `original_source/tetris_duel.cpp`: simultaneous death is a
/// draw, one-sided death names the survivor, and neither dying means the
/// game continues (`None`).
pub fn judge_winner(board1: &Board, piece1: Piece, board2: &Board, piece2: Piece) -> Winner {
    match (is_dead(board1, piece1), is_dead(board2, piece2)) {
        (true, true) => Winner::Draw,
        (true, false) => Winner::Player2,
        (false, true) => Winner::Player1,
        (false, false) => Winner::None,
    }
}
