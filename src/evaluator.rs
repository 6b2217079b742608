//! The board heuristic and landing-specific score.
//!
//! Every feature function here is grounded on
//! `original_source/tetris_eval.cpp`, which matches
//! `bot/src/evaluation/standard.rs`'s feature math in shape but not
//! always in exact coefficient or algorithm choice. Two deliberate
//! departures from the teacher, both because the original kernel this
//! spec distills from does it the simpler way:
//!
//! - `cavities_and_overhangs` here is the plain neighbor-height-compare
//!   rule (`heights[x-1] <= y-1 && heights[x-2] <= y` style), not the
//!   teacher's BFS flood-fill connected-component version.
//! - the T-slot chain tries exactly one shape per iteration ("place an
//!   upward T and see what it would clear"), not the teacher's five-shape
//!   `sky_tslot`/`tst_twist`/`cave_tslot`/`fin_to_win`/`cutout_tslot`
//!   detector, but it repeats that single shape in a commit-and-clear loop
//!   until no more slots produce a clear, matching `tetris_eval.cpp`'s
//!   `t_slot_center`/`simulate_tspin_lines`/`cutout_once` chain.
//!
//! `Weights` is this crate's "configuration": a plain struct of signed
//! weights with a `Default` impl, exactly like
//! `bot::evaluation::standard::Standard`.

use crate::attack::combo_garbage;
use crate::board::{Board, BOARD_HEIGHT, BOARD_WIDTH};
use crate::piece::{get_shape, Piece};
use crate::search::{ClearKind, Landing};

/// Tunable coefficients for [`evaluate_board`] and [`evaluate_landing`].
/// Mirrors `bot::evaluation::standard::Standard`'s shape; default values
/// come from `spec.md` §4.6, which tunes several coefficients
/// differently than the teacher (e.g. `cavity_cells_sq` and
/// `overhang_cells` below are not the teacher's numbers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub height: i32,
    pub top_half: i32,
    pub top_quarter: i32,
    pub row_transitions: i32,
    pub bumpiness: i32,
    pub bumpiness_sq: i32,
    pub cavity_cells: i32,
    pub cavity_cells_sq: i32,
    pub overhang_cells: i32,
    pub overhang_cells_sq: i32,
    pub covered_cells: i32,
    pub covered_cells_sq: i32,
    pub well_depth: i32,
    pub max_well_depth: i32,
    pub well_column: [i32; BOARD_WIDTH],
    pub tslot: [i32; 4],
    pub back_to_back: i32,
    pub clear1: i32,
    pub clear2: i32,
    pub clear3: i32,
    pub clear4: i32,
    pub tspin1: i32,
    pub tspin2: i32,
    pub tspin3: i32,
    pub mini_tspin1: i32,
    pub mini_tspin2: i32,
    pub perfect_clear: i32,
    pub combo_bonus: i32,
    pub wasted_t: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            height: -39,
            top_half: -150,
            top_quarter: -511,
            row_transitions: -5,
            bumpiness: -24,
            bumpiness_sq: -7,
            cavity_cells: -173,
            cavity_cells_sq: -3,
            overhang_cells: -34,
            overhang_cells_sq: 0,
            covered_cells: -17,
            covered_cells_sq: -1,
            well_depth: 57,
            max_well_depth: 17,
            well_column: [20, 23, 20, 50, 59, 21, 59, 10, -10, 24],
            tslot: [8, 148, 192, 407],
            back_to_back: 52,
            clear1: -150,
            clear2: -100,
            clear3: -50,
            clear4: 400,
            tspin1: 130,
            tspin2: 400,
            tspin3: 700,
            mini_tspin1: 0,
            mini_tspin2: 100,
            perfect_clear: 999,
            combo_bonus: 50,
            wasted_t: -150,
        }
    }
}

/// Row transitions: the number of times an occupied/empty boundary is
/// crossed scanning each row left to right, including the implicit walls
/// on both sides, summed over every row up to the stack's max height.
fn row_transitions(board: &Board, max_height: i32) -> i32 {
    let mut transitions = 0;
    for y in 0..max_height.max(1) {
        let mut last = true; // left wall counts as occupied
        for x in 0..BOARD_WIDTH as i32 {
            let occ = board.occupied(x, y);
            if occ != last {
                transitions += 1;
            }
            last = occ;
        }
        if !last {
            transitions += 1; // right wall
        }
    }
    transitions
}

/// For each column, the number of empty cells strictly below its topmost
/// occupied cell ("holes"). Returns `(total, sum_of_squares)`.
fn covered_cells(board: &Board, heights: &[i32; BOARD_WIDTH]) -> (i32, i32) {
    let mut total = 0;
    let mut sum_sq = 0;
    for x in 0..BOARD_WIDTH as i32 {
        let mut column_covered = 0;
        for y in 0..heights[x as usize] {
            if !board.occupied(x, y) {
                column_covered += 1;
            }
        }
        total += column_covered;
        sum_sq += column_covered * column_covered;
    }
    (total, sum_sq)
}

/// Splits holes into "overhangs" (a hole whose immediate left-left or
/// right-right neighbor pair is no taller, so a piece can tuck in
/// horizontally and cap it from the side) and "cavities" (everything else
/// -- only reachable by dropping a piece in from directly above). Mirrors
/// `original_source/tetris_eval.cpp`'s `cavities_and_overhangs`, not the
/// teacher's flood-fill version.
fn cavities_and_overhangs(
    board: &Board,
    heights: &[i32; BOARD_WIDTH],
) -> (i32, i32, i32, i32) {
    let h = |x: i32| -> i32 {
        if x < 0 || x >= BOARD_WIDTH as i32 {
            i32::MAX
        } else {
            heights[x as usize]
        }
    };

    let mut cavity_cells = 0;
    let mut overhang_cells = 0;
    for x in 0..BOARD_WIDTH as i32 {
        for y in 0..heights[x as usize] {
            if board.occupied(x, y) {
                continue;
            }
            let left_clear = h(x - 1) <= y - 1 && h(x - 2) <= y;
            let right_clear = h(x + 1) <= y - 1 && h(x + 2) <= y;
            if left_clear || right_clear {
                overhang_cells += 1;
            } else {
                cavity_cells += 1;
            }
        }
    }
    (
        cavity_cells,
        cavity_cells * cavity_cells,
        overhang_cells,
        overhang_cells * overhang_cells,
    )
}

/// The column whose height is the deepest relative to both neighbors
/// (candidate for a Tetris/I-piece well), and how deep it is. Returns
/// `(well_column, well_depth)`; `well_column` is `-1` if no column is
/// flanked by two taller (or wall) neighbors.
fn find_well(heights: &[i32; BOARD_WIDTH]) -> (i32, i32) {
    let h = |x: i32| -> i32 {
        if x < 0 || x >= BOARD_WIDTH as i32 {
            i32::MAX
        } else {
            heights[x as usize]
        }
    };

    let mut best_col = -1i32;
    let mut best_depth = 0i32;
    for x in 0..BOARD_WIDTH as i32 {
        let left = h(x - 1);
        let right = h(x + 1);
        let neighbor_min = left.min(right);
        if neighbor_min == i32::MAX {
            continue;
        }
        if neighbor_min > heights[x as usize] {
            let depth = neighbor_min - heights[x as usize];
            if depth > best_depth {
                best_depth = depth;
                best_col = x;
            }
        }
    }
    (best_col, best_depth)
}

/// Sum of absolute adjacent-column height differences, skipping the pair
/// that straddles the well column (a deep well is supposed to be deep,
/// not penalized as bumpiness). Starts the accumulator at `-1`: a
/// deliberately preserved quirk from `original_source/tetris_eval.cpp`
/// (see `spec.md` Open Question 1) rather than `0`, so a perfectly flat
/// board scores `-1` instead of `0`.
fn bumpiness_excluding_well(heights: &[i32; BOARD_WIDTH], well_column: i32) -> (i32, i32) {
    let mut bumpiness = -1;
    let mut bumpiness_sq = -1;
    for x in 0..BOARD_WIDTH as i32 - 1 {
        if x == well_column || x + 1 == well_column {
            continue;
        }
        let diff = (heights[x as usize] - heights[x as usize + 1]).abs();
        bumpiness += diff;
        bumpiness_sq += diff * diff;
    }
    (bumpiness, bumpiness_sq)
}

/// A column `x` whose height is at least two below both neighbors -- the
/// classic overhang shape a T rotated into from the side clears.
fn find_t_slot_center(heights: &[i32; BOARD_WIDTH]) -> Option<i32> {
    for x in 1..BOARD_WIDTH as i32 - 1 {
        let center = heights[x as usize];
        let left = heights[x as usize - 1];
        let right = heights[x as usize + 1];
        if left >= center + 2 && right >= center + 2 {
            return Some(x);
        }
    }
    None
}

/// Repeatedly finds a T-slot center, simulates dropping an upward-pointing
/// T into it, and -- if that actually clears at least one line -- commits
/// the clear and awards `weights.tslot[lines - 1]`, continuing until no
/// more T-slots produce a clear. Matches `original_source/tetris_eval.cpp`'s
/// `while(true)` T-slot chain (`t_slot_center`/`simulate_tspin_lines`/
/// `cutout_once`), not the teacher's richer five-shape detector.
fn t_slot_chain_score(board: &Board, weights: &Weights) -> i32 {
    let mut working = *board;
    let mut score = 0;
    let shape = get_shape(Piece::T, 0);

    loop {
        let heights = working.column_heights();
        let center = match find_t_slot_center(&heights) {
            Some(x) => x,
            None => break,
        };

        // One row below the top boundary, matching the headroom
        // `search::enumerate_drop_landings_from_board` starts from.
        let landing_y = working.drop_piece(&shape, center, BOARD_HEIGHT as i32 - 2);
        let placed = working.place_piece(&shape, center, landing_y);
        let (after_clear, lines) = placed.clear_lines();
        if lines == 0 {
            break;
        }

        score += weights.tslot[(lines - 1).min(3)];
        working = after_clear;
    }

    score
}

/// The static board-quality score: higher is better. Does not account
/// for any particular clear just made -- see [`evaluate_landing`] for
/// that.
pub fn evaluate_board(board: &Board, weights: &Weights) -> i32 {
    let heights = board.column_heights();
    let max_height = *heights.iter().max().unwrap_or(&0);

    let (well_column, well_depth) = find_well(&heights);
    let (bumpiness, bumpiness_sq) = bumpiness_excluding_well(&heights, well_column);
    let (cavity_cells, cavity_cells_sq, overhang_cells, overhang_cells_sq) =
        cavities_and_overhangs(board, &heights);
    let (covered, covered_sq) = covered_cells(board, &heights);
    let transitions = row_transitions(board, max_height);
    let tslot = t_slot_chain_score(board, weights);

    let mut score = 0;
    score += weights.height * max_height;
    score += weights.top_half * (max_height - 20).max(0);
    score += weights.top_quarter * (max_height - 30).max(0);
    score += weights.row_transitions * transitions;
    score += weights.bumpiness * bumpiness;
    score += weights.bumpiness_sq * bumpiness_sq;
    score += weights.cavity_cells * cavity_cells;
    score += weights.cavity_cells_sq * cavity_cells_sq;
    score += weights.overhang_cells * overhang_cells;
    score += weights.overhang_cells_sq * overhang_cells_sq;
    score += weights.covered_cells * covered;
    score += weights.covered_cells_sq * covered_sq;
    score += weights.well_depth * well_depth.min(weights.max_well_depth);
    if well_column >= 0 {
        score += weights.well_column[well_column as usize];
    }
    score += tslot;
    score
}

/// The landing-specific bonus for a just-made placement: the attack/B2B/
/// perfect-clear/combo terms the board-quality score above doesn't cover,
/// plus a penalty for spending a T piece without getting a T-spin out of
/// it. Matches `original_source/tetris_eval.cpp`'s `evaluate_landing`.
pub fn evaluate_landing(landing: &Landing, weights: &Weights) -> i32 {
    let mut score = match landing.kind {
        ClearKind::None => 0,
        ClearKind::Single => weights.clear1,
        ClearKind::Double => weights.clear2,
        ClearKind::Triple => weights.clear3,
        ClearKind::Tetris => weights.clear4,
        ClearKind::TSpinMini => weights.mini_tspin1,
        ClearKind::TSpinMiniSingle => weights.mini_tspin2,
        ClearKind::TSpin => weights.tspin1,
        ClearKind::TSpinSingle => weights.tspin2,
        ClearKind::TSpinDouble | ClearKind::TSpinTriple => weights.tspin3,
    };

    if landing.back_to_back && landing.kind.is_back_to_back_eligible() {
        score += weights.back_to_back;
    }

    if landing.perfect_clear {
        score += weights.perfect_clear;
    }

    score += weights.combo_bonus * combo_garbage(landing.combo) as i32;

    let is_tspin_clear = matches!(
        landing.kind,
        ClearKind::TSpin
            | ClearKind::TSpinSingle
            | ClearKind::TSpinDouble
            | ClearKind::TSpinTriple
            | ClearKind::TSpinMini
            | ClearKind::TSpinMiniSingle
    );
    if landing.used_t_piece && landing.lines_cleared == 0 && !is_tspin_clear {
        score += weights.wasted_t;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Rotation;

    fn landing(kind: ClearKind, back_to_back: bool) -> Landing {
        Landing {
            piece: Piece::T,
            x: 0,
            y: 0,
            rot: 0 as Rotation,
            board_after: Board::new(),
            lines_cleared: match kind {
                ClearKind::None | ClearKind::TSpin | ClearKind::TSpinMini => 0,
                ClearKind::Single
                | ClearKind::Double
                | ClearKind::Triple
                | ClearKind::Tetris
                | ClearKind::TSpinSingle
                | ClearKind::TSpinMiniSingle => 1,
                ClearKind::TSpinDouble => 2,
                ClearKind::TSpinTriple => 3,
            },
            kind,
            combo: 0,
            back_to_back,
            used_hold: false,
            piece_after_hold: None,
            used_t_piece: false,
            perfect_clear: false,
            attack: 0,
            path: Vec::new(),
        }
    }

    #[test]
    fn empty_board_scores_the_flat_board_baseline() {
        let board = Board::new();
        let weights = Weights::default();
        let score = evaluate_board(&board, &weights);
        // height, transitions, cavities, overhangs, covered, well depth,
        // and tslot are all zero on an empty board; only the bumpiness
        // quirk's -1 initial accumulator contributes.
        let expected = weights.bumpiness * -1 + weights.bumpiness_sq * -1;
        assert_eq!(score, expected);
    }

    #[test]
    fn taller_stacks_score_worse_with_default_weights() {
        let weights = Weights::default();
        let flat = Board::new();
        let shape = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let tall = flat.place_piece(&shape, 4, 0).place_piece(&shape, 4, 2);
        assert!(evaluate_board(&tall, &weights) < evaluate_board(&flat, &weights));
    }

    #[test]
    fn a_sideways_reachable_hole_is_an_overhang_not_a_cavity() {
        let board = Board::new();
        // Column 5 has a hole at y=0 capped at y=1; its left-left neighbor
        // (column 3) is shorter than the hole's row, so a piece can tuck
        // in from the side -- this is an overhang per tetris_eval.cpp, not
        // a cavity.
        let cap = [(0, 0)];
        let board = board.place_piece(&cap, 5, 1).place_piece(&cap, 6, 0);
        let heights = board.column_heights();
        let (cavity, _, overhang, _) = cavities_and_overhangs(&board, &heights);
        assert!(overhang >= 1);
        assert_eq!(cavity, 0);
    }

    #[test]
    fn a_fully_enclosed_hole_is_a_cavity() {
        let board = Board::new();
        // Column 5 has a hole at y=0 capped at y=1, with both neighboring
        // columns built up past the hole's row -- no sideways access.
        let cap = [(0, 0), (0, 1)];
        let hole_cap = [(0, 1)];
        let board = board
            .place_piece(&cap, 3, 0)
            .place_piece(&cap, 4, 0)
            .place_piece(&hole_cap, 5, 0)
            .place_piece(&cap, 6, 0)
            .place_piece(&cap, 7, 0);
        let heights = board.column_heights();
        let (cavity, _, _, _) = cavities_and_overhangs(&board, &heights);
        assert!(cavity >= 1);
    }

    #[test]
    fn well_column_weight_is_added_when_a_well_is_found() {
        let weights = Weights::default();
        let board = Board::new();
        let wall = [(0, 0)];
        // Columns 0-2 and 4-9 built up to height 3, leaving column 3 as a
        // clear well flanked by taller neighbors on both sides.
        let mut built = board;
        for x in [0, 1, 2, 4, 5, 6, 7, 8, 9] {
            built = built.place_piece(&wall, x, 0).place_piece(&wall, x, 1).place_piece(&wall, x, 2);
        }
        let heights = built.column_heights();
        let (well_column, well_depth) = find_well(&heights);
        assert_eq!(well_column, 3);
        assert!(well_depth > 0);
        assert!(evaluate_board(&built, &weights) != 0);
    }

    #[test]
    fn landing_score_adds_back_to_back_bonus_only_when_eligible() {
        let weights = Weights::default();
        let tetris_with_b2b = evaluate_landing(&landing(ClearKind::Tetris, true), &weights);
        let tetris_without_b2b = evaluate_landing(&landing(ClearKind::Tetris, false), &weights);
        assert_eq!(tetris_with_b2b - tetris_without_b2b, weights.back_to_back);

        let single_with_b2b = evaluate_landing(&landing(ClearKind::Single, true), &weights);
        let single_without_b2b = evaluate_landing(&landing(ClearKind::Single, false), &weights);
        assert_eq!(single_with_b2b, single_without_b2b);
    }

    #[test]
    fn perfect_clear_adds_its_own_bonus_on_top_of_the_clear_score() {
        let weights = Weights::default();
        let mut l = landing(ClearKind::Tetris, false);
        let without_pc = evaluate_landing(&l, &weights);
        l.perfect_clear = true;
        let with_pc = evaluate_landing(&l, &weights);
        assert_eq!(with_pc - without_pc, weights.perfect_clear);
    }

    #[test]
    fn combo_bonus_scales_with_combo_garbage() {
        let weights = Weights::default();
        let mut l = landing(ClearKind::Single, false);
        l.combo = 0;
        let no_combo = evaluate_landing(&l, &weights);
        l.combo = 5;
        let with_combo = evaluate_landing(&l, &weights);
        assert_eq!(with_combo - no_combo, weights.combo_bonus * combo_garbage(5) as i32);
    }

    #[test]
    fn wasted_t_penalty_applies_only_to_non_tspin_zero_clear_t_placements() {
        let weights = Weights::default();
        let mut l = landing(ClearKind::None, false);
        l.used_t_piece = true;
        let wasted = evaluate_landing(&l, &weights);
        let mut not_t = l.clone();
        not_t.used_t_piece = false;
        let not_wasted = evaluate_landing(&not_t, &weights);
        assert_eq!(wasted - not_wasted, weights.wasted_t);

        let mut tspin = landing(ClearKind::TSpin, false);
        tspin.used_t_piece = true;
        let tspin_score = evaluate_landing(&tspin, &weights);
        let mut tspin_not_t = tspin.clone();
        tspin_not_t.used_t_piece = false;
        let tspin_not_t_score = evaluate_landing(&tspin_not_t, &weights);
        assert_eq!(tspin_score, tspin_not_t_score);
    }

    #[test]
    fn t_slot_chain_awards_the_per_line_weight_for_a_two_deep_notch() {
        let weights = Weights::default();
        let board = Board::new();
        let fill: Vec<(i32, i32)> = (0..10).filter(|&x| x != 4).map(|x| (x, 0)).collect();
        let board = board.place_piece(&fill, 0, 0);
        // Column 4 is a 1-deep notch, too shallow for the 2-deep T-slot
        // rule, so the chain should find nothing and score 0.
        assert_eq!(t_slot_chain_score(&board, &weights), 0);
    }
}
