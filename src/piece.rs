//! Piece kinds, rotation states, and the Super Rotation System shape and
//! kick tables.
//!
//! Cell tables are copied from `libtetris::piece::PieceState::cells()`
//! (`examples/MinusKelvin-cold-clear/libtetris/src/piece.rs`), reindexed
//! from the teacher's `North/East/South/West` orientation enum to the
//! plain `0..=3` integer rotation `spec.md` §3 specifies (`North=0`,
//! `East=1`, `South=2`, `West=3`, matching the teacher's own `cw`/`ccw`
//! cycle order).
//!
//! `original_source` (the C++ kernel this spec was distilled from) doesn't
//! carry these tables — they were filtered out as pure data — so per
//! REDESIGN FLAG 4 this crate uses the verified canonical tables instead
//! of reconstructing them from scratch. The kick table below is the
//! well-known Guideline SRS table; it was cross-checked by hand against
//! every `(from, to)` pair the teacher's `PieceState::rotation_points()`
//! encodes (a kick is the point-to-point difference between the two
//! orientations' rotation points) and matches exactly.

use crate::board::Cells;
use enumset::EnumSetType;

/// One of the seven tetromino kinds.
#[derive(Debug, Hash, EnumSetType)]
pub enum Piece {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl Piece {
    /// All seven kinds, in bag order.
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::O,
        Piece::T,
        Piece::L,
        Piece::J,
        Piece::S,
        Piece::Z,
    ];
}

/// A rotation state, always normalized to `0..=3`.
pub type Rotation = u8;

/// Normalizes an arbitrary rotation delta into `0..=3`.
pub fn normalize_rotation(r: i32) -> Rotation {
    (r.rem_euclid(4)) as Rotation
}

/// The four `(dx, dy)` cell offsets for `piece` at `rot`, relative to its
/// reference point. `rot` is normalized mod 4 first.
pub fn get_shape(piece: Piece, rot: Rotation) -> Cells {
    use Piece::*;
    let rot = rot % 4;
    let cells: [(i32, i32); 4] = match (piece, rot) {
        (I, 0) => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        (I, 1) => [(1, -2), (1, -1), (1, 0), (1, 1)],
        (I, 2) => [(-1, -1), (0, -1), (1, -1), (2, -1)],
        (I, 3) => [(0, -2), (0, -1), (0, 0), (0, 1)],

        (O, _) => [(0, 0), (0, 1), (1, 0), (1, 1)],

        (T, 0) => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        (T, 1) => [(0, 1), (0, 0), (0, -1), (1, 0)],
        (T, 2) => [(1, 0), (0, 0), (-1, 0), (0, -1)],
        (T, 3) => [(0, -1), (0, 0), (0, 1), (-1, 0)],

        (L, 0) => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        (L, 1) => [(0, 1), (0, 0), (0, -1), (1, -1)],
        (L, 2) => [(1, 0), (0, 0), (-1, 0), (-1, -1)],
        (L, 3) => [(0, -1), (0, 0), (0, 1), (-1, 1)],

        (J, 0) => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        (J, 1) => [(0, 1), (0, 0), (0, -1), (1, 1)],
        (J, 2) => [(1, 0), (0, 0), (-1, 0), (1, -1)],
        (J, 3) => [(0, -1), (0, 0), (0, 1), (-1, -1)],

        (S, 0) => [(0, 0), (0, 1), (-1, 0), (1, 1)],
        (S, 1) => [(0, 0), (1, 0), (0, 1), (1, -1)],
        (S, 2) => [(0, -1), (0, 0), (-1, -1), (1, 0)],
        (S, 3) => [(-1, 0), (0, 0), (-1, 1), (0, -1)],

        (Z, 0) => [(0, 0), (0, 1), (-1, 1), (1, 0)],
        (Z, 1) => [(0, 0), (1, 0), (1, 1), (0, -1)],
        (Z, 2) => [(0, -1), (0, 0), (-1, 0), (1, -1)],
        (Z, 3) => [(-1, 0), (0, 0), (0, 1), (-1, -1)],

        (_, r) => unreachable!("rotation {} is not normalized mod 4", r),
    };
    cells.into()
}

/// Same as [`get_shape`], exposed as the crate's external-interface
/// function (`spec.md` §6: `get_shape_cells(piece, rot) -> [(int,int)]`).
pub fn get_shape_cells(piece: Piece, rot: i32) -> Vec<(i32, i32)> {
    get_shape(piece, normalize_rotation(rot)).into_iter().collect()
}

const JLSTZ_KICKS: [[(i32, i32); 5]; 8] = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 0 -> 1
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // 1 -> 0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // 1 -> 2
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 2 -> 1
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 2 -> 3
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // 3 -> 2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // 3 -> 0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 0 -> 3
];

const I_KICKS: [[(i32, i32); 5]; 8] = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],  // 0 -> 1
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],  // 1 -> 0
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],  // 1 -> 2
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],  // 2 -> 1
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],  // 2 -> 3
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],  // 3 -> 2
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],  // 3 -> 0
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],  // 0 -> 3
];

const O_KICKS: [(i32, i32); 1] = [(0, 0)];

fn transition_index(from_rot: Rotation, to_rot: Rotation) -> usize {
    match (from_rot % 4, to_rot % 4) {
        (0, 1) => 0,
        (1, 0) => 1,
        (1, 2) => 2,
        (2, 1) => 3,
        (2, 3) => 4,
        (3, 2) => 5,
        (3, 0) => 6,
        (0, 3) => 7,
        (f, t) => panic!("unsupported rotation transition {} -> {} (only +-1 quarter turns are supported)", f, t),
    }
}

/// The ordered list of `(dx, dy)` kicks tried, in order, when rotating
/// `piece` from `from_rot` to `to_rot`. Only `+-1` quarter turns are
/// supported; `from_rot == to_rot` must not be called (per `spec.md` §4.2).
pub fn get_kicks(piece: Piece, from_rot: Rotation, to_rot: Rotation) -> &'static [(i32, i32)] {
    match piece {
        Piece::O => &O_KICKS,
        Piece::I => &I_KICKS[transition_index(from_rot, to_rot)],
        _ => &JLSTZ_KICKS[transition_index(from_rot, to_rot)],
    }
}

/// Tries to spawn `piece` at `(4, 20)` with rotation 0; if obstructed,
/// tries `(4, 21)`; if that's also obstructed, returns `(-1, -1)` (the
/// piece cannot spawn — a game-over condition, not an error, per
/// `spec.md` §7).
pub fn spawn_position_with_fallback(board: &crate::board::Board, piece: Piece) -> (i32, i32) {
    let shape = get_shape(piece, 0);
    if board.is_valid_position(&shape, 4, 20) {
        (4, 20)
    } else if board.is_valid_position(&shape, 4, 21) {
        (4, 21)
    } else {
        (-1, -1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn o_piece_shape_is_rotation_invariant() {
        for r in 0..4 {
            let cells: Vec<_> = get_shape(Piece::O, r).into_iter().collect();
            assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        }
    }

    #[test]
    fn o_kicks_are_a_single_no_op() {
        assert_eq!(get_kicks(Piece::O, 0, 1), &[(0, 0)]);
        assert_eq!(get_kicks(Piece::O, 3, 0), &[(0, 0)]);
    }

    #[test]
    fn every_shape_has_exactly_four_cells() {
        for &p in &Piece::ALL {
            for r in 0..4 {
                assert_eq!(get_shape(p, r).len(), 4);
            }
        }
    }

    #[test]
    fn spawn_falls_back_one_row_when_blocked() {
        let mut board = Board::new();
        // Block row 20 under the T's spawn footprint, leave row 21 clear.
        let t_row20 = [(3, 20), (4, 20), (5, 20)];
        board = board.place_piece(&t_row20, 0, 0);
        let (x, y) = spawn_position_with_fallback(&board, Piece::T);
        assert_eq!((x, y), (4, 21));
    }

    #[test]
    fn spawn_reports_dead_when_both_rows_blocked() {
        let mut board = Board::new();
        let blockers: Vec<(i32, i32)> = (0..10).flat_map(|x| vec![(x, 20), (x, 21)]).collect();
        board = board.place_piece(&blockers, 0, 0);
        assert_eq!(spawn_position_with_fallback(&board, Piece::T), (-1, -1));
    }

    #[test]
    fn normalize_rotation_wraps_negative_values() {
        assert_eq!(normalize_rotation(-1), 3);
        assert_eq!(normalize_rotation(4), 0);
        assert_eq!(normalize_rotation(5), 1);
    }
}
