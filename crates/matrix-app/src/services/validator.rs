use thiserror::Error;

/// Shape problems in a submitted matrix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("matrix must not be empty")]
    EmptyMatrix,

    #[error("matrix rows must not be empty")]
    EmptyRow,

    #[error(
        "matrix is not rectangular: row {row_index} has {actual_cols} columns, expected {expected_cols}"
    )]
    NotRectangular {
        row_index: usize,
        actual_cols: usize,
        expected_cols: usize,
    },
}

/// Check that `matrix` is non-empty and rectangular
///
/// Every row is compared against the length of row 0; the first row that
/// differs is reported. Values themselves are not inspected.
pub fn validate(matrix: &[Vec<f64>]) -> Result<(), ValidationError> {
    let first = matrix.first().ok_or(ValidationError::EmptyMatrix)?;
    if first.is_empty() {
        return Err(ValidationError::EmptyRow);
    }

    let expected_cols = first.len();
    match matrix
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected_cols)
    {
        Some((row_index, row)) => Err(ValidationError::NotRectangular {
            row_index,
            actual_cols: row.len(),
            expected_cols,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_matrices() {
        assert!(validate(&[vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
        assert!(validate(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]).is_ok());
        assert!(validate(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).is_ok());
        assert!(validate(&[vec![42.0]]).is_ok());
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(validate(&[]), Err(ValidationError::EmptyMatrix));
    }

    #[test]
    fn test_empty_first_row() {
        assert_eq!(validate(&[vec![]]), Err(ValidationError::EmptyRow));
        assert_eq!(validate(&[vec![], vec![1.0]]), Err(ValidationError::EmptyRow));
    }

    #[test]
    fn test_shorter_row_reports_index() {
        let err = validate(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotRectangular {
                row_index: 1,
                actual_cols: 2,
                expected_cols: 3,
            }
        );
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_longer_row_is_rejected() {
        let err = validate(&[vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotRectangular { row_index: 1, actual_cols: 3, expected_cols: 2 }
        ));
    }

    #[test]
    fn test_rows_compared_against_first_row() {
        // rows 1 and 2 agree with each other but not with row 0
        let err = validate(&[vec![1.0], vec![2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
        assert!(matches!(err, ValidationError::NotRectangular { row_index: 1, .. }));

        // only the first offender is reported
        let err = validate(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0], vec![]]).unwrap_err();
        assert!(matches!(err, ValidationError::NotRectangular { row_index: 2, actual_cols: 1, .. }));
    }

    #[test]
    fn test_non_finite_values_are_accepted() {
        assert!(validate(&[vec![f64::NAN, f64::INFINITY], vec![0.0, f64::NEG_INFINITY]]).is_ok());
    }
}
