//! Queue module - 7-bag random piece generation
//!
//! Each bag holds one of each piece (I, O, T, S, Z, J, L) in a uniformly shuffled
//! order. Pieces are consumed from the end of the bag; an exhausted bag is
//! replaced by a freshly shuffled full set.
//!
//! Seeding the queue makes a whole session reproducible.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// One full bag
pub type Bag = ArrayVec<PieceKind, 7>;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Remaining pieces of the current bag; the next piece is at the end
    bag: Bag,
    rng: StdRng,
    seed: u64,
}

impl PieceQueue {
    /// Create a queue holding a freshly shuffled bag
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            bag: Bag::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        queue.refill();
        queue
    }

    /// Replace the contents with a full, independently shuffled bag.
    ///
    /// `SliceRandom::shuffle` is a Fisher-Yates shuffle driven by unbiased range
    /// sampling, so every permutation is equally likely.
    pub fn refill(&mut self) {
        self.bag = PieceKind::ALL.into_iter().collect();
        self.bag.shuffle(&mut self.rng);
    }

    /// Pop the next piece, or `None` when the bag is exhausted
    pub fn next(&mut self) -> Option<PieceKind> {
        self.bag.pop()
    }

    /// Pop the next piece, refilling first if the bag is exhausted
    pub fn draw(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.bag.pop() {
                return kind;
            }
            self.refill();
        }
    }

    /// Piece the next `draw` returns, if the current bag still has one
    pub fn peek(&self) -> Option<PieceKind> {
        self.bag.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// Number of unconsumed pieces in the current bag
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Unconsumed pieces of the current bag, in storage order
    pub fn current_bag(&self) -> &[PieceKind] {
        &self.bag
    }

    /// Seed the queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
