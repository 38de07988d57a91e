//! Random graph generation
//!
//! Produces adjacency matrices with an exact number of edges, no self-loops
//! and no duplicates. Generation goes through a seeded generator so that a
//! graph can be reproduced from the seed alone.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use rand::prelude::{RngCore, SeedableRng, StdRng};
use rand::seq::SliceRandom;
use rand::Error as RandError;
use tracing::debug;

use crate::matrix::AdjacencyMatrix;

/// Seeded PRNG that remembers its seed.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
    seed: u64,
}

impl SeededRng {
    /// Creates a new RNG instance seeded with the given 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG from entropy.
    ///
    /// The seed is drawn first and stored, so the output can still be
    /// replayed with [`SeededRng::new`].
    pub fn from_entropy() -> Self {
        let mut entropy_rng = StdRng::from_entropy();
        Self::new(entropy_rng.next_u64())
    }

    /// Returns the seed used to initialize this RNG.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Lets `SeededRng` drive any `rand` API (`Rng`, `SliceRandom`) directly.
impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.rng.try_fill_bytes(dest)
    }
}

//-----------------------------------------------------------------------------
// Generation
//-----------------------------------------------------------------------------

/// Largest number of edges a loop-free graph on `size` vertices can have.
pub fn max_edges(size: usize) -> usize {
    size.saturating_mul(size.saturating_sub(1))
}

/// Random loop-free matrix with `min(edges, max_edges(size))` edges.
pub fn random_adjacency_matrix(size: usize, edges: usize, rng: &mut SeededRng) -> AdjacencyMatrix {
    let mut matrix = AdjacencyMatrix::zeros(size);
    let edges = edges.min(max_edges(size));

    let mut pairs: Vec<(usize, usize)> = (0..size)
        .flat_map(|i| (0..size).map(move |j| (i, j)))
        .filter(|(i, j)| i != j)
        .collect();
    pairs.shuffle(rng);

    for &(i, j) in pairs.iter().take(edges) {
        matrix.set(i, j, true);
    }

    debug!(size, edges, seed = rng.seed(), "Generated random adjacency matrix");
    matrix
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_deterministic() {
        let mut rng1 = SeededRng::new(12345);
        let mut rng2 = SeededRng::new(12345);
        assert_eq!(rng1.next_u64(), rng2.next_u64());
        assert_eq!(rng1.seed(), 12345);
    }

    #[test]
    fn test_rng_extension_methods_are_seeded() {
        let mut rng1 = SeededRng::new(42);
        let mut rng2 = SeededRng::new(42);
        let a: Vec<usize> = (0..16).map(|_| rng1.gen_range(0..15)).collect();
        let b: Vec<usize> = (0..16).map(|_| rng2.gen_range(0..15)).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| v < 15));

        let mut order: Vec<u8> = (0..10).collect();
        order.shuffle(&mut rng1);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_exact_edge_count_without_loops() {
        let mut rng = SeededRng::new(7);
        let matrix = random_adjacency_matrix(6, 11, &mut rng);
        assert_eq!(matrix.edge_count(), 11);
        for d in 0..6 {
            assert!(!matrix.get(d, d));
        }
    }

    #[test]
    fn test_edges_are_clamped() {
        let mut rng = SeededRng::new(1);
        let matrix = random_adjacency_matrix(4, 100, &mut rng);
        assert_eq!(matrix.edge_count(), max_edges(4));
        assert_eq!(max_edges(4), 12);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = random_adjacency_matrix(8, 20, &mut SeededRng::new(99));
        let b = random_adjacency_matrix(8, 20, &mut SeededRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_sizes() {
        let mut rng = SeededRng::from_entropy();
        assert!(random_adjacency_matrix(0, 5, &mut rng).is_empty());
        assert_eq!(random_adjacency_matrix(1, 5, &mut rng).edge_count(), 0);
        assert_eq!(max_edges(0), 0);
    }
}
