//! RNG module - 7-bag piece randomization
//!
//! Each bag holds one of every shape in random order. Pieces are dealt from
//! the front until the bag is empty, and only then is a fresh bag shuffled.
//! Every 7 consecutive draws starting at a bag boundary contain each shape
//! exactly once, and the gap between two draws of the same shape is at most 12.
//!
//! Randomness comes from [`SimpleRng`], a seeded LCG, so a given seed always
//! produces the same piece sequence.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // state = a * state + c (mod 2^32)
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Pending shapes of the current bag
pub type Bag = ArrayVec<Shape, 7>;

/// 7-bag piece randomizer
///
/// Holds the undealt remainder of the current bag (front = next to deal) and
/// the RNG that shuffles the following one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceRandomizer {
    queue: Bag,
    rng: SimpleRng,
}

impl PieceRandomizer {
    /// Create a randomizer with a freshly shuffled bag
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a randomizer around an existing RNG, shuffling its first bag
    pub fn with_rng(rng: SimpleRng) -> Self {
        let mut randomizer = Self {
            queue: Bag::new(),
            rng,
        };
        randomizer.refill();
        randomizer
    }

    /// Discard pending shapes and shuffle a new bag from the same random stream
    pub fn refilled(&self) -> Self {
        Self::with_rng(self.rng.clone())
    }

    fn refill(&mut self) {
        let mut bag = Shape::ALL;
        self.rng.shuffle(&mut bag);
        self.queue = bag.into_iter().collect();
    }

    /// Deal the next piece without touching `self`
    ///
    /// Returns the piece at the spawn offset for `board_width` and the
    /// randomizer that remains.
    pub fn next(&self, board_width: u8) -> (Piece, PieceRandomizer) {
        let mut rest = self.clone();
        let piece = rest.draw(board_width);
        (piece, rest)
    }

    /// Deal the next piece, refilling first when the bag is empty
    pub fn draw(&mut self, board_width: u8) -> Piece {
        Piece::spawn(self.draw_shape(), board_width)
    }

    /// Deal the next shape, refilling first when the bag is empty
    pub fn draw_shape(&mut self) -> Shape {
        if self.queue.is_empty() {
            self.refill();
        }
        // Never empty here: refill always leaves seven shapes behind.
        self.queue.remove(0)
    }

    /// Shapes left in the current bag, next first
    pub fn pending(&self) -> &[Shape] {
        &self.queue
    }

    pub fn rng(&self) -> &SimpleRng {
        &self.rng
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
