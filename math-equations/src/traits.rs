//! Scalar trait for the equation solver
//!
//! [`RealField`] abstracts over the real floating-point types the solver can
//! run on, so the same elimination code serves `f64` and `f32` systems.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display, LowerExp};

/// Trait for real scalar types that can be used in an equation system.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, and what the CLI and JSON configuration use)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + Send
    + Sync
    + Debug
    + Display
    + LowerExp
    + 'static
{
    /// Machine epsilon of the type; pivots below it are treated as zero
    fn machine_epsilon() -> Self {
        Self::epsilon()
    }

    /// Whether the magnitude of this value is below machine epsilon
    #[inline]
    fn is_negligible(&self) -> bool {
        self.abs() < Self::machine_epsilon()
    }
}

impl RealField for f64 {}

impl RealField for f32 {}
