//! Dense linear equation systems
//!
//! This crate solves square systems `A·x = c` by Gaussian elimination with
//! partial pivoting, and reports systems without a unique solution as a
//! regular [`SolverError::SingularMatrix`] result.
//!
//! # Features
//!
//! - **Direct Solver**: forward elimination with partial pivoting + back substitution
//! - **Dense Storage**: fixed-shape row-major [`Matrix`] with bounds-checked access
//! - **Generic Scalar Types**: works with f64 and f32
//! - **JSON Input**: [`EquationSystem`] loading/saving
//! - **Batch Solving**: independent systems in parallel (`rayon` feature)
//!
//! # Example
//!
//! ```
//! use math_audio_equations::{SolverError, solve};
//!
//! // x2 = 3, x1 = 5
//! let solution = solve(&[vec![0.0_f64, 1.0], vec![1.0, 0.0]], &[3.0, 5.0])?;
//! assert!((solution[0] - 5.0).abs() < 1e-12);
//! assert!((solution[1] - 3.0).abs() < 1e-12);
//!
//! let singular = solve(&[vec![1.0, 1.0], vec![1.0, 1.0]], &[2.0, 2.0]);
//! assert!(singular.unwrap_err().is_singular());
//! # Ok::<(), SolverError>(())
//! ```

pub mod dense;
pub mod direct;
pub mod error;
pub mod parallel;
pub mod system;
pub mod traits;

// Re-export main types
pub use dense::Matrix;
pub use error::{Result, SolverError};
pub use system::{EquationLimits, EquationSystem, parse_coefficient};
pub use traits::RealField;

// Re-export the solver
pub use direct::{AugmentedSystem, GaussSolution, gauss_solve, residuals, solve};
pub use parallel::solve_batch;
