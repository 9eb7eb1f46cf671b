//! Direct solvers for equation systems
//!
//! This module provides:
//! - [`gauss_solve`] / [`solve`]: Gaussian elimination with partial pivoting
//! - [`AugmentedSystem`]: the step-by-step form (eliminate, substitute, extract)
//! - [`residuals`]: substitution check of a computed solution

mod gauss;

pub use gauss::{AugmentedSystem, GaussSolution, gauss_solve, residuals, solve};
