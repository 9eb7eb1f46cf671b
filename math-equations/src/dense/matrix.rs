//! Fixed-size dense matrix
//!
//! Storage is a single row-major buffer:
//! - `data[row * columns + col]` holds element `(row, col)`
//! - rows are contiguous, so a row swap exchanges two stride-length slices

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::Array2;
use std::ops::{Index, IndexMut};

/// Dense real-valued matrix with fixed shape
///
/// Holds at least as many columns as rows, so it can always carry a square
/// coefficient block plus extra columns such as the constants of an
/// augmented system.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: RealField> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T: RealField> Matrix<T> {
    /// Create a zero-filled matrix
    ///
    /// Fails with [`SolverError::InvalidDimension`] when `rows < 1` or
    /// `columns < rows`.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows < 1 {
            return Err(SolverError::invalid_dimension(format!(
                "matrix needs at least one row, got {rows}"
            )));
        }
        if columns < rows {
            return Err(SolverError::invalid_dimension(format!(
                "matrix needs at least as many columns as rows, got {rows}x{columns}"
            )));
        }

        Ok(Self {
            rows,
            columns,
            data: vec![T::zero(); rows * columns],
        })
    }

    /// Copy a matrix out of an ndarray
    pub fn from_array(array: &Array2<T>) -> Result<Self> {
        let mut matrix = Self::new(array.nrows(), array.ncols())?;
        for ((i, j), &value) in array.indexed_iter() {
            matrix[(i, j)] = value;
        }
        Ok(matrix)
    }

    /// Copy the matrix into an ndarray
    pub fn to_array(&self) -> Array2<T> {
        Array2::from_shape_fn((self.rows, self.columns), |(i, j)| self[(i, j)])
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.columns {
            return Err(SolverError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + col)
    }

    /// Bounds-checked read
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Bounds-checked write
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Borrow one full row
    pub fn row(&self, row: usize) -> Result<&[T]> {
        let start = self.offset(row, 0)?;
        Ok(&self.data[start..start + self.columns])
    }

    /// Exchange two full rows. Swapping a row with itself is a no-op.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<()> {
        let first = self.offset(r1, 0)?;
        let second = self.offset(r2, 0)?;
        if r1 == r2 {
            return Ok(());
        }

        let (low, high) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        let (head, tail) = self.data.split_at_mut(high);
        head[low..low + self.columns].swap_with_slice(&mut tail[..self.columns]);
        Ok(())
    }
}

/// Unchecked element access for code that has already validated its indices.
///
/// Panics when the index is out of range.
impl<T: RealField> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.columns,
            "index ({row}, {col}) out of range for a {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + col]
    }
}

impl<T: RealField> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.columns,
            "index ({row}, {col}) out of range for a {}x{} matrix",
            self.rows,
            self.columns
        );
        &mut self.data[row * self.columns + col]
    }
}
