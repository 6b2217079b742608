//! The 7-bag randomizer.
//!
//! Grounded on `original_source/tetris_bag.cpp` (a `std::deque<Piece>` that
//! appends a shuffled bag of all seven pieces whenever fewer than seven
//! remain) and on the teacher's choice of PRNG for deterministic replays
//! (`battle::Battle::new` seeds `rand_pcg::Pcg64Mcg` from a `u64`;
//! `examples/MinusKelvin-cold-clear/battle/src/battle.rs`).

use crate::piece::Piece;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::collections::VecDeque;

/// A FIFO queue of upcoming pieces, topped up with a freshly shuffled
/// 7-piece bag whenever it runs low. Owns its own RNG so a `GameState` can
/// be replayed deterministically from a seed (`spec.md` §5, §9).
#[derive(Clone, Debug)]
pub struct Bag {
    queue: VecDeque<Piece>,
    rng: Pcg64Mcg,
}

impl Bag {
    /// A new bag seeded from `seed`, with two shuffled bags already queued
    /// (14 pieces), matching `original_source/tetris_bag.cpp`'s
    /// constructor.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut queue = VecDeque::with_capacity(14);
        push_shuffled_bag(&mut queue, &mut rng);
        push_shuffled_bag(&mut queue, &mut rng);
        Bag { queue, rng }
    }

    /// Pops and returns the next piece, refilling with a new shuffled bag
    /// first if fewer than 7 remain.
    pub fn pop(&mut self) -> Piece {
        if self.queue.len() < 7 {
            push_shuffled_bag(&mut self.queue, &mut self.rng);
        }
        self.queue.pop_front().expect("bag is refilled before running dry")
    }

    /// A read-only view of the next `n` pieces, without consuming them.
    /// Does not trigger a refill even if `n` exceeds the current queue
    /// length below the refill threshold — refilling only happens on
    /// `pop`, matching `original_source/tetris_bag.cpp`'s `peek`.
    pub fn peek(&self, n: usize) -> Vec<Piece> {
        self.queue.iter().take(n).copied().collect()
    }

    /// Number of pieces currently queued.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

fn push_shuffled_bag(queue: &mut VecDeque<Piece>, rng: &mut Pcg64Mcg) {
    let mut pieces = Piece::ALL;
    pieces.shuffle(rng);
    queue.extend(pieces);
}
