//! Shuffler - 7-bag shape randomizer
//!
//! Each bag holds one of every shape (I, O, T, S, Z, J, L) in a uniformly
//! random order. Shapes are dealt until the bag is empty; the next draw
//! refills and reshuffles it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::Shape;

const BAG_SIZE: usize = Shape::ALL.len();

/// 7-bag shape generator
#[derive(Debug, Clone)]
pub struct Shuffler {
    /// Current bag; `bag[dealt..]` is still undealt
    bag: [Shape; BAG_SIZE],
    /// Number of shapes already dealt from the current bag
    dealt: usize,
    rng: StdRng,
}

impl Shuffler {
    /// Create a deterministic shuffler from a seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a shuffler seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        // Starts empty: the first draw shuffles the first bag.
        Self {
            bag: Shape::ALL,
            dealt: BAG_SIZE,
            rng,
        }
    }

    fn refill(&mut self) {
        self.bag = Shape::ALL;
        self.bag.shuffle(&mut self.rng);
        self.dealt = 0;
    }

    /// Deal the next shape, refilling the bag first if it is empty
    pub fn next(&mut self) -> Shape {
        if self.dealt >= BAG_SIZE {
            self.refill();
        }

        let shape = self.bag[self.dealt];
        self.dealt += 1;
        shape
    }

    /// Shapes left in the current bag, in dealing order
    pub fn remaining(&self) -> &[Shape] {
        &self.bag[self.dealt..]
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut shapes: Vec<Shape>) -> Vec<Shape> {
        shapes.sort();
        shapes
    }

    #[test]
    fn starts_with_an_empty_bag() {
        let shuffler = Shuffler::new(1);
        assert!(shuffler.remaining().is_empty());
    }

    #[test]
    fn first_draw_fills_the_bag() {
        let mut shuffler = Shuffler::new(1);
        let first = shuffler.next();
        assert_eq!(shuffler.remaining().len(), 6);
        assert!(!shuffler.remaining().contains(&first));
    }

    #[test]
    fn same_seed_deals_same_sequence() {
        let mut a = Shuffler::new(12345);
        let mut b = Shuffler::new(12345);
        for _ in 0..50 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn each_bag_is_a_permutation() {
        let mut shuffler = Shuffler::new(7);
        for _ in 0..10 {
            let bag: Vec<Shape> = (0..BAG_SIZE).map(|_| shuffler.next()).collect();
            assert_eq!(sorted(bag), Shape::ALL.to_vec());
            assert!(shuffler.remaining().is_empty());
        }
    }
}
