//! Gaussian elimination solver
//!
//! Solves a dense square system through an augmented `n × (n+1)` matrix:
//! forward elimination with partial pivoting brings the coefficient block to
//! upper-triangular form, then back substitution resolves the unknowns from
//! the last one upwards.
//!
//! Constants are stored negated, so every row of the augmented matrix reads
//! `a1*x1 + ... + an*xn + (-c) = 0`.

use crate::dense::Matrix;
use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use std::fmt;
use std::ops::Index;

/// Augmented matrix of a square equation system
///
/// Columns `0..n` hold the coefficients, column `n` the negated constants.
/// Elimination and back substitution work in place.
#[derive(Debug, Clone)]
pub struct AugmentedSystem<T: RealField> {
    matrix: Matrix<T>,
    n: usize,
    row_swaps: usize,
}

impl<T: RealField> AugmentedSystem<T> {
    /// Build from a row-wise coefficient matrix and its constants
    pub fn new(coefficients: &[Vec<T>], constants: &[T]) -> Result<Self> {
        let n = coefficients.len();
        check_order(n)?;
        if constants.len() != n {
            return Err(SolverError::invalid_dimension(format!(
                "expected {n} constants, got {}",
                constants.len()
            )));
        }
        for (i, row) in coefficients.iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::invalid_dimension(format!(
                    "coefficient row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
        }

        let mut matrix = Matrix::new(n, n + 1)?;
        for (i, (row, &constant)) in coefficients.iter().zip(constants).enumerate() {
            for (j, &a) in row.iter().enumerate() {
                matrix[(i, j)] = a;
            }
            matrix[(i, n)] = -constant;
        }

        Self::checked(matrix, n)
    }

    /// Build from rows of `n` coefficients followed by the equation's constant
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let n = rows.len();
        check_order(n)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n + 1 {
                return Err(SolverError::invalid_dimension(format!(
                    "equation {i} has {} entries, expected {} coefficients and a constant",
                    row.len(),
                    n
                )));
            }
        }

        let mut matrix = Matrix::new(n, n + 1)?;
        for (i, row) in rows.iter().enumerate() {
            for (j, &a) in row[..n].iter().enumerate() {
                matrix[(i, j)] = a;
            }
            matrix[(i, n)] = -row[n];
        }

        Self::checked(matrix, n)
    }

    /// Build from an ndarray coefficient matrix and constant vector
    pub fn from_array(coefficients: &Array2<T>, constants: &Array1<T>) -> Result<Self> {
        let n = coefficients.nrows();
        check_order(n)?;
        if coefficients.ncols() != n {
            return Err(SolverError::invalid_dimension(format!(
                "coefficient matrix must be square, got {}x{}",
                n,
                coefficients.ncols()
            )));
        }
        if constants.len() != n {
            return Err(SolverError::invalid_dimension(format!(
                "expected {n} constants, got {}",
                constants.len()
            )));
        }

        let mut matrix = Matrix::new(n, n + 1)?;
        for ((i, j), &a) in coefficients.indexed_iter() {
            matrix[(i, j)] = a;
        }
        for (i, &c) in constants.iter().enumerate() {
            matrix[(i, n)] = -c;
        }

        Self::checked(matrix, n)
    }

    /// Reject NaN or infinite entries, which would slip past pivot selection
    fn checked(matrix: Matrix<T>, n: usize) -> Result<Self> {
        for i in 0..n {
            for j in 0..=n {
                let value = matrix[(i, j)];
                if !value.is_finite() {
                    let what = if j == n {
                        format!("constant of equation {i}")
                    } else {
                        format!("coefficient ({i}, {j})")
                    };
                    return Err(SolverError::invalid_dimension(format!(
                        "{what} is not finite ({value})"
                    )));
                }
            }
        }

        Ok(Self {
            matrix,
            n,
            row_swaps: 0,
        })
    }

    /// Number of equations (and unknowns)
    pub fn order(&self) -> usize {
        self.n
    }

    /// The augmented matrix in its current state
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// Row swaps performed so far
    pub fn row_swaps(&self) -> usize {
        self.row_swaps
    }

    /// Reduce the coefficient block to upper-triangular form.
    ///
    /// For each pivot column, the row with the largest magnitude entry is
    /// chosen (the first one on ties) and swapped into place. A pivot whose
    /// magnitude is below machine epsilon means the system has no unique
    /// solution. The last row takes part in the pivot check too, which is
    /// what catches a zero `1 × 1` system.
    pub fn forward_eliminate(&mut self) -> Result<()> {
        let n = self.n;

        for row in 0..n {
            let mut max_row = row;
            let mut max_val = self.matrix[(row, row)].abs();
            for i in (row + 1)..n {
                let val = self.matrix[(i, row)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < T::machine_epsilon() {
                log::warn!("Singular system: pivot {row} magnitude {max_val:e} below machine epsilon");
                return Err(SolverError::SingularMatrix { pivot: row });
            }

            if max_row != row {
                log::debug!("Swapping rows {row} and {max_row} for pivot {max_val:e}");
                self.matrix.swap_rows(row, max_row)?;
                self.row_swaps += 1;
            }

            let pivot = self.matrix[(row, row)];
            for i in (row + 1)..n {
                let factor = self.matrix[(i, row)] / pivot;
                for j in (row + 1)..=n {
                    let update = factor * self.matrix[(row, j)];
                    self.matrix[(i, j)] -= update;
                }
                // exact zero below the diagonal, not round-off residue
                self.matrix[(i, row)] = T::zero();
            }
        }

        Ok(())
    }

    /// Resolve the unknowns of an upper-triangular system, last row first.
    ///
    /// Each row reads the values already stored in the constant column of
    /// the rows below it. Afterwards the constant column holds the
    /// homogeneous-form value `-x_i` for every row.
    pub fn back_substitute(&mut self) -> Result<()> {
        let n = self.n;

        for row in (0..n).rev() {
            let pivot = self.matrix[(row, row)];
            if pivot.is_negligible() {
                return Err(SolverError::SingularMatrix { pivot: row });
            }

            let mut sum = T::zero();
            for j in (row + 1)..n {
                sum += self.matrix[(row, j)] * self.matrix[(j, n)];
            }
            self.matrix[(row, n)] = (self.matrix[(row, n)] - sum) / pivot;
        }

        Ok(())
    }

    /// Read the solution out of the constant column, in variable order
    pub fn into_solution(self) -> GaussSolution<T> {
        let n = self.n;
        let values = (0..n).map(|i| -self.matrix[(i, n)]).collect();
        GaussSolution {
            values,
            row_swaps: self.row_swaps,
        }
    }

    /// Eliminate, substitute and extract in one go
    pub fn solve(mut self) -> Result<GaussSolution<T>> {
        self.forward_eliminate()?;
        self.back_substitute()?;
        log::debug!(
            "Solved {n}x{n} system with {swaps} row swaps",
            n = self.n,
            swaps = self.row_swaps
        );
        Ok(self.into_solution())
    }
}

fn check_order(n: usize) -> Result<()> {
    if n < 1 {
        return Err(SolverError::invalid_dimension(
            "system needs at least one equation",
        ));
    }
    Ok(())
}

/// Solution of an equation system
///
/// `values[i]` is the value of variable `i`, whatever row swaps happened
/// during elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussSolution<T: RealField> {
    values: Vec<T>,
    row_swaps: usize,
}

impl<T: RealField> GaussSolution<T> {
    /// Solution values in variable order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of unknowns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a successful solve
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of row swaps partial pivoting performed
    pub fn row_swaps(&self) -> usize {
        self.row_swaps
    }

    pub fn into_array(self) -> Array1<T> {
        Array1::from_vec(self.values)
    }
}

impl<T: RealField> Index<usize> for GaussSolution<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

/// Formats as `x1 = 5 x2 = 3`, variables numbered from one
impl<T: RealField> fmt::Display for GaussSolution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "x{} = {}", i + 1, value)?;
        }
        Ok(())
    }
}

/// Solve a system given as row-wise coefficients and constants
pub fn solve<T: RealField>(coefficients: &[Vec<T>], constants: &[T]) -> Result<GaussSolution<T>> {
    AugmentedSystem::new(coefficients, constants)?.solve()
}

/// Solve Ax = b by Gaussian elimination with partial pivoting
pub fn gauss_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    Ok(AugmentedSystem::from_array(a, b)?.solve()?.into_array())
}

/// Compute `A·x - c` for every equation
///
/// A correct solution gives residuals near zero.
pub fn residuals<T: RealField>(
    coefficients: &[Vec<T>],
    constants: &[T],
    solution: &[T],
) -> Result<Vec<T>> {
    let n = coefficients.len();
    if constants.len() != n || solution.len() != n {
        return Err(SolverError::invalid_dimension(format!(
            "expected {n} constants and {n} solution values, got {} and {}",
            constants.len(),
            solution.len()
        )));
    }

    coefficients
        .iter()
        .zip(constants)
        .enumerate()
        .map(|(i, (row, &c))| {
            if row.len() != n {
                return Err(SolverError::invalid_dimension(format!(
                    "coefficient row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            let lhs = row
                .iter()
                .zip(solution)
                .fold(T::zero(), |acc, (&a, &x)| acc + a * x);
            Ok(lhs - c)
        })
        .collect()
}
