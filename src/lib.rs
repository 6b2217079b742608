//! Deterministic SRS move-generation and Cold-Clear-style scoring kernel.
//!
//! This crate enumerates every legal placement of the active piece (and,
//! optionally, of the held piece) reachable under Super Rotation System
//! movement rules, scores each resulting position with a board heuristic
//! plus a landing-specific bonus, and reports how much garbage each
//! placement would send. It does not pick a move, render anything, or
//! schedule real-time ticks — see the crate-level modules for the pieces
//! an embedding bot/GUI/bindings layer composes on top of this.
//!
//! # Layout
//!
//! - [`board`]: the 10x40 cell grid, collision checks, drop/place/clear.
//! - [`piece`]: piece kinds, rotation states, SRS shape and kick tables.
//! - [`bag`]: the 7-bag randomizer.
//! - [`reach`]: BFS reachability and path reconstruction over SRS moves.
//! - [`step`]: hard-drop + lock + T-spin/mini/perfect-clear classification.
//! - [`search`]: per-rotation/column landing enumeration, with and without
//!   a reachability check.
//! - [`evaluator`]: the board heuristic and landing score.
//! - [`attack`]: the garbage-send table.
//! - [`garbage`]: incoming garbage insertion.
//! - [`state`]: [`GameState`](state::GameState), hold, bag advance, B2B/combo.
//! - [`duel`]: two-player game-over/winner oracle.

pub mod attack;
pub mod bag;
pub mod board;
pub mod duel;
pub mod evaluator;
pub mod garbage;
pub mod piece;
pub mod reach;
pub mod search;
pub mod state;
pub mod step;

pub use attack::compute_attack;
pub use bag::Bag;
pub use board::{Board, BOARD_HEIGHT, BOARD_WIDTH};
pub use duel::{is_dead, judge_winner, Winner};
pub use evaluator::{evaluate_board, evaluate_landing, Weights};
pub use garbage::apply_garbage;
pub use piece::{get_shape_cells, Piece, Rotation};
pub use reach::{can_reach, find_path, Action};
pub use search::{enumerate_drop_landings_from_board, enumerate_landings, ClearKind, DropCandidate, Landing};
pub use state::{apply_move, is_dead_state, legal_moves, GameState};
pub use step::{step_lock_piece, LockResult};
