//! Dense matrix storage
//!
//! - [`Matrix`]: fixed-shape row-major buffer with bounds-checked access and row swaps

mod matrix;

pub use matrix::Matrix;
