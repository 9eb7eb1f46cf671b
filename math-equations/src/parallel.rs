//! Batch solving with feature-gated parallelism
//!
//! Every system is solved on its own augmented matrix, so independent
//! systems can run concurrently. Without the `rayon` feature the batch is
//! processed sequentially.

use crate::direct::GaussSolution;
use crate::error::Result;
use crate::system::EquationSystem;

/// Solve independent systems, results in input order
#[cfg(feature = "rayon")]
pub fn solve_batch(systems: &[EquationSystem]) -> Vec<Result<GaussSolution<f64>>> {
    use rayon::prelude::*;
    systems.par_iter().map(EquationSystem::solve).collect()
}

/// Solve independent systems sequentially (fallback)
#[cfg(not(feature = "rayon"))]
pub fn solve_batch(systems: &[EquationSystem]) -> Vec<Result<GaussSolution<f64>>> {
    systems.iter().map(EquationSystem::solve).collect()
}
