use crate::matrix::Matrix;

/// Rotate a matrix 90° clockwise
///
/// An R×C input becomes C×R: the element at `(i, j)` moves to `(j, R-1-i)`,
/// so output row `j` is input column `j` read bottom to top. A matrix with no
/// rows or no columns is returned unchanged.
pub fn rotate_clockwise_90(matrix: &Matrix) -> Matrix {
    if matrix.is_empty() {
        return matrix.clone();
    }

    let rows = matrix.nrows();
    Matrix::from_fn(matrix.ncols(), rows, |i, j| matrix.get(rows - 1 - j, i))
}
