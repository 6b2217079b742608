//! Per-rotation/column landing enumeration, and the full reachability- and
//! scoring-aware landing enumerator that sits on top of it.
//!
//! Grounded on `original_source/tetris_search.cpp`: `enumerate_drop_landings`
//! (here: [`enumerate_drop_landings_from_board`]) is the cheap inner loop --
//! for every rotation `0..4` and every column offset `x` in `-4..14` (wide
//! enough to cover every piece's horizontal extent at every rotation over a
//! 10-wide board), hard-drop the piece and keep the landing, with no
//! reachability check at all. `enumerate_landings` wraps it: for each
//! candidate, confirm it's reachable from spawn via [`crate::reach::find_path`],
//! then lock it with [`crate::step::step_lock_piece`] and score the result
//! into a full [`Landing`]. Neither is a full BFS move enumerator like
//! `bot::moves::find_moves` -- that function explores DAS/soft-drop/20G
//! real-time movement modes, which `spec.md` §1 places out of scope.

use crate::attack::compute_attack;
use crate::board::{Board, BOARD_HEIGHT};
use crate::piece::{get_shape, Piece, Rotation};
use crate::reach::{find_path, Action};
use crate::step::step_lock_piece;

/// The kind of line clear (or non-clear) a lock produced, independent of
/// whether it also triggered a T-spin. T-spin variants imply the rotation
/// gate in `step::step_lock_piece` was satisfied; this enum only encodes
/// the combination spec.md §4.4/§4.7 key the attack table on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearKind {
    None,
    Single,
    Double,
    Triple,
    Tetris,
    TSpinMini,
    TSpinMiniSingle,
    TSpin,
    TSpinSingle,
    TSpinDouble,
    TSpinTriple,
}

impl ClearKind {
    pub fn classify(lines_cleared: usize, is_tspin: bool, is_mini: bool) -> ClearKind {
        match (is_tspin, is_mini, lines_cleared) {
            (true, true, 0) => ClearKind::TSpinMini,
            (true, true, _) => ClearKind::TSpinMiniSingle,
            (true, false, 0) => ClearKind::TSpin,
            (true, false, 1) => ClearKind::TSpinSingle,
            (true, false, 2) => ClearKind::TSpinDouble,
            (true, false, _) => ClearKind::TSpinTriple,
            (false, _, 0) => ClearKind::None,
            (false, _, 1) => ClearKind::Single,
            (false, _, 2) => ClearKind::Double,
            (false, _, 3) => ClearKind::Triple,
            (false, _, _) => ClearKind::Tetris,
        }
    }

    /// `true` for any clear that extends a back-to-back streak (Tetrises
    /// and any T-spin clear, per `spec.md` §4.9).
    pub fn is_back_to_back_eligible(self) -> bool {
        matches!(
            self,
            ClearKind::Tetris
                | ClearKind::TSpin
                | ClearKind::TSpinSingle
                | ClearKind::TSpinDouble
                | ClearKind::TSpinTriple
                | ClearKind::TSpinMini
                | ClearKind::TSpinMiniSingle
        )
    }
}

/// A bare hard-drop candidate: where `piece` would come to rest at a given
/// `(rot, x)`, with no reachability check performed. The cheap inner loop
/// [`enumerate_landings`] filters and scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropCandidate {
    pub piece: Piece,
    pub x: i32,
    pub y: i32,
    pub rot: Rotation,
}

/// A fully scored placement: the terminal `(x, y, rot)`, the board and
/// clear-kind it produces, the B2B/combo it results in, whether it used
/// hold, and the attack it sends. The crate's canonical "scored move"
/// value, per `spec.md` §3/§6.
#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub piece: Piece,
    pub x: i32,
    pub y: i32,
    pub rot: Rotation,
    pub board_after: Board,
    pub lines_cleared: usize,
    pub kind: ClearKind,
    pub combo: u32,
    pub back_to_back: bool,
    pub used_hold: bool,
    pub piece_after_hold: Option<Piece>,
    pub used_t_piece: bool,
    pub perfect_clear: bool,
    pub attack: u32,
    pub path: Vec<Action>,
}

// One row below the playfield's top boundary: every piece shape's tallest
// cell offset is +1 relative to its reference point, so starting the drop
// check here (rather than at `BOARD_HEIGHT - 1`) keeps every rotation's
// bounding box in bounds.
const CEILING: i32 = BOARD_HEIGHT as i32 - 2;

/// Enumerates every distinct hard-drop resting placement of `piece` over
/// every rotation and column, without checking whether spawn can actually
/// reach it -- that's [`enumerate_landings`]'s job. Deduplicates identical
/// `(x, y, rot)` results (multiple columns can drop to the same cell set
/// for pieces with fewer than 4 distinct rotations, e.g. `O`).
pub fn enumerate_drop_landings_from_board(board: &Board, piece: Piece) -> Vec<DropCandidate> {
    let mut candidates = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for rot in 0..4u8 {
        let shape = get_shape(piece, rot);
        for x in -4..14 {
            if !board.is_valid_position(&shape, x, CEILING) {
                continue;
            }
            let landing_y = board.drop_piece(&shape, x, CEILING);
            if seen.insert((x, landing_y, rot)) {
                candidates.push(DropCandidate { piece, x, y: landing_y, rot });
            }
        }
    }

    candidates
}

/// Enumerates every legal, reachable placement of `piece` from
/// `(spawn_x, spawn_y)`, each locked and scored into a full [`Landing`].
/// `combo_in`/`b2b_in` are the combo count and back-to-back state going
/// into the placement, used to compute the resulting combo/B2B/attack.
/// `used_hold`/`piece_after_hold` on each returned `Landing` are left at
/// their "no hold" defaults (`false`/`None`) -- callers enumerating a
/// hold-swapped piece (`state::legal_moves`) set them afterward.
pub fn enumerate_landings(
    board: &Board,
    piece: Piece,
    spawn_x: i32,
    spawn_y: i32,
    combo_in: u32,
    b2b_in: bool,
) -> Vec<Landing> {
    let spawn: (i32, i32, Rotation) = (spawn_x, spawn_y, 0);
    let candidates = enumerate_drop_landings_from_board(board, piece);
    let mut landings = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let path = match find_path(board, piece, spawn, (candidate.x, candidate.y, candidate.rot)) {
            Some(p) => p,
            None => continue,
        };

        let shape = get_shape(piece, candidate.rot);
        let result = step_lock_piece(board, piece, &shape, candidate.x, candidate.y);

        let combo = if result.lines_cleared > 0 { combo_in + 1 } else { 0 };
        let back_to_back = if result.clear_kind.is_back_to_back_eligible() {
            true
        } else if result.lines_cleared > 0 {
            false
        } else {
            b2b_in
        };
        let attack = compute_attack(result.clear_kind, b2b_in, combo, result.perfect_clear);

        landings.push(Landing {
            piece,
            x: candidate.x,
            y: candidate.y,
            rot: candidate.rot,
            board_after: result.board,
            lines_cleared: result.lines_cleared,
            kind: result.clear_kind,
            combo,
            back_to_back,
            used_hold: false,
            piece_after_hold: None,
            used_t_piece: piece == Piece::T,
            perfect_clear: result.perfect_clear,
            attack,
            path,
        });
    }

    landings
}
