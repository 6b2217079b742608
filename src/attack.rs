//! The garbage-send table.
//!
//! Grounded on `original_source/tetris_attack.cpp` and cross-checked
//! against `libtetris::lock_data::COMBO_GARBAGE`
//! (`examples/MinusKelvin-cold-clear/libtetris/src/lock_data.rs`) for the
//! combo-scaling table shape.

use crate::search::ClearKind;

/// Combo count -> bonus garbage, indexed by `combo.min(10)`. Matches
/// `libtetris::lock_data::COMBO_GARBAGE`.
const COMBO_GARBAGE: [u32; 11] = [0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5];

/// Looks up the combo-scaling table, clamping `combo` to its largest
/// indexed value. Exposed so [`crate::evaluator::evaluate_landing`] can
/// reuse the same combo-to-garbage mapping for its own combo bonus term
/// without duplicating the table.
pub(crate) fn combo_garbage(combo: u32) -> u32 {
    COMBO_GARBAGE[(combo as usize).min(10)]
}

/// How much garbage a lock sends, given its clear kind, whether back-to-back
/// is active, the current combo count (0 means no combo yet), and whether
/// the clear emptied the board. The perfect-clear bonus is additive on top
/// of the base/B2B/combo terms, per `original_source/tetris_attack.cpp`
/// (`atk += 10` after every other term, not an override).
pub fn compute_attack(
    clear_kind: ClearKind,
    back_to_back_active: bool,
    combo: u32,
    perfect_clear: bool,
) -> u32 {
    let base = match clear_kind {
        ClearKind::None => 0,
        ClearKind::Single => 0,
        ClearKind::Double => 1,
        ClearKind::Triple => 2,
        ClearKind::Tetris => 4,
        ClearKind::TSpinMini => 0,
        ClearKind::TSpinMiniSingle => 1,
        ClearKind::TSpin => 0,
        ClearKind::TSpinSingle => 2,
        ClearKind::TSpinDouble => 4,
        ClearKind::TSpinTriple => 6,
    };

    let b2b_bonus = if back_to_back_active && clear_kind.is_back_to_back_eligible() {
        1
    } else {
        0
    };

    let combo_bonus = combo_garbage(combo);

    let mut attack = base + b2b_bonus + combo_bonus;
    if perfect_clear {
        attack += 10;
    }
    attack
}
