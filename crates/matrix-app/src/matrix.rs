//! Dense real matrix
//!
//! A [`Matrix`] built through [`Matrix::from_rows`] is always rectangular,
//! non-empty and immutable. Every pipeline stage returns a new matrix
//! instead of touching its input.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::services::validator::{validate, ValidationError};

/// Row and column count of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Dimensions with rows and columns exchanged
    pub fn swapped(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Dense `f64` matrix backed by `nalgebra::DMatrix`
///
/// Serializes as a JSON array of rows (`[[1.0, 2.0], [3.0, 4.0]]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix(DMatrix<f64>);

impl Default for Matrix {
    fn default() -> Self {
        Self::zeros(0, 0)
    }
}

impl Matrix {
    /// Build a validated matrix from nested rows
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        validate(&rows)?;
        let (nrows, ncols) = (rows.len(), rows[0].len());
        Ok(Self(DMatrix::from_row_iterator(
            nrows,
            ncols,
            rows.into_iter().flatten(),
        )))
    }

    /// Zero-filled matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Build a matrix by evaluating `f(i, j)` for every position
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> f64) -> Self {
        Self(DMatrix::from_fn(rows, cols, f))
    }

    pub fn nrows(&self) -> usize {
        self.0.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.0.ncols()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.nrows(), self.ncols())
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions().is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.0[(i, j)]
    }

    /// Borrow the underlying nalgebra matrix
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.0
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.0
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

impl From<DMatrix<f64>> for Matrix {
    fn from(m: DMatrix<f64>) -> Self {
        Self(m)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
