//! QR factorization
//!
//! For an `m × n` input with `k = min(m, n)` the economy-size factorization is
//! returned: `Q` is `m × k` with orthonormal columns and `R` is `k × n` upper
//! triangular (upper trapezoidal when the input is wide). Entries of `R`
//! below the diagonal are exact zeros.
//!
//! The Householder decomposition itself is nalgebra's. Its reflectors take
//! unscaled column norms, so each column is divided by its largest absolute
//! entry first and the matching column of `R` is multiplied back afterwards
//! (`A = A_s·D` gives `R = R_s·D`, still upper triangular). Values near the
//! ends of the `f64` range then factorize instead of overflowing to infinity
//! or underflowing to zero.

use nalgebra::{DMatrix, QR};
use thiserror::Error;

use crate::matrix::Matrix;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorizationError {
    #[error("cannot factorize an empty matrix ({rows}x{cols})")]
    EmptyInput { rows: usize, cols: usize },

    #[error("matrix contains a non-finite value at row {row}, column {col}")]
    NonFiniteInput { row: usize, col: usize },

    #[error("factorization overflowed the f64 range")]
    NonFiniteResult,
}

/// Result of a QR factorization: `original = q · r`
#[derive(Debug, Clone, PartialEq)]
pub struct QrFactorization {
    pub q: Matrix,
    pub r: Matrix,
}

/// Factorize `matrix` into an orthogonal `Q` and upper-triangular `R`
pub fn factorize_qr(matrix: &Matrix) -> Result<QrFactorization, FactorizationError> {
    let a = matrix.as_dmatrix();
    if matrix.is_empty() {
        return Err(FactorizationError::EmptyInput {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if let Some((row, col)) = first_non_finite(a) {
        return Err(FactorizationError::NonFiniteInput { row, col });
    }

    let scales: Vec<f64> = a
        .column_iter()
        .map(|column| match column.amax() {
            s if s > 0.0 => s,
            _ => 1.0,
        })
        .collect();

    let mut scaled = a.clone();
    for (mut column, s) in scaled.column_iter_mut().zip(&scales) {
        column /= *s;
    }

    let qr = QR::new(scaled);
    let q = qr.q();
    let mut r = qr.r();
    for (mut column, s) in r.column_iter_mut().zip(&scales) {
        column *= *s;
    }

    if first_non_finite(&q).is_some() || first_non_finite(&r).is_some() {
        return Err(FactorizationError::NonFiniteResult);
    }

    Ok(QrFactorization {
        q: q.into(),
        r: r.into(),
    })
}

fn first_non_finite(m: &DMatrix<f64>) -> Option<(usize, usize)> {
    let (rows, cols) = m.shape();
    (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .find(|&(i, j)| !m[(i, j)].is_finite())
}
