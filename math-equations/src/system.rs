//! Equation-system input
//!
//! JSON layout:
//!
//! ```json
//! {
//!   "coefficients": [[2.0, 1.0], [1.0, -1.0]],
//!   "constants": [5.0, 1.0]
//! }
//! ```
//!
//! Row `i` of `coefficients` and `constants[i]` form the equation
//! `a1*x1 + ... + an*xn = c`.

use crate::direct::{self, GaussSolution};
use crate::error::{Result, SolverError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// A square system of linear equations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationSystem {
    /// Coefficient rows, one per equation
    pub coefficients: Vec<Vec<f64>>,
    /// Right-hand side of each equation
    pub constants: Vec<f64>,
}

impl EquationSystem {
    pub fn new(coefficients: Vec<Vec<f64>>, constants: Vec<f64>) -> Self {
        Self {
            coefficients,
            constants,
        }
    }

    /// Split rows holding `n` coefficients followed by the constant
    ///
    /// Every row must have exactly `n + 1` entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if n < 1 {
            return Err(SolverError::invalid_dimension(
                "system needs at least one equation",
            ));
        }

        let mut coefficients = Vec::with_capacity(n);
        let mut constants = Vec::with_capacity(n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n + 1 {
                return Err(SolverError::invalid_dimension(format!(
                    "equation {i} has {} entries, expected {} coefficients and a constant",
                    row.len(),
                    n
                )));
            }
            coefficients.push(row[..n].to_vec());
            constants.push(row[n]);
        }
        Ok(Self::new(coefficients, constants))
    }

    /// Number of equations
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Solve by Gaussian elimination with partial pivoting
    pub fn solve(&self) -> Result<GaussSolution<f64>> {
        direct::solve(&self.coefficients, &self.constants)
    }

    /// Residuals `A·x - c` of a candidate solution
    pub fn residuals(&self, solution: &[f64]) -> Result<Vec<f64>> {
        direct::residuals(&self.coefficients, &self.constants, solution)
    }

    /// Load a system from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read system file: {}", e))?;

        let system: EquationSystem = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?;

        Ok(system)
    }

    /// Save the system to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize system: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write system file: {}", e))?;

        Ok(())
    }
}

/// Allowed number of equations for interactive input
///
/// This is a front-end policy; the solver itself accepts any order >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for EquationLimits {
    fn default() -> Self {
        Self { min: 2, max: 5 }
    }
}

impl EquationLimits {
    /// Check that the bounds describe a non-empty range starting at one or above
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.min < 1 {
            return Err(format!(
                "Minimum number of equations must be at least 1 (got {})",
                self.min
            ));
        }
        if self.min > self.max {
            return Err(format!(
                "Minimum number of equations ({}) exceeds the maximum ({})",
                self.min, self.max
            ));
        }
        Ok(())
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    /// Parse and validate a user-supplied equation count
    pub fn parse_count(&self, input: &str) -> std::result::Result<usize, String> {
        let n: usize = input
            .trim()
            .parse()
            .map_err(|_| "Please enter a valid number of equations".to_string())?;
        if !self.range().contains(&n) {
            return Err(format!(
                "Number of equations must be between {} and {}",
                self.min, self.max
            ));
        }
        Ok(n)
    }
}

/// Parse one user-supplied real number
pub fn parse_coefficient(input: &str) -> std::result::Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("Please enter a valid number (got {:?})", input.trim()))?;
    if !value.is_finite() {
        return Err(format!("Please enter a finite number (got {})", value));
    }
    Ok(value)
}
