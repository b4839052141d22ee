use crate::config::Config;
use crate::matrix::Matrix;
use crate::types::api::ProcessingOutcome;
use crate::Result;

use super::qr::{factorize_qr, QrFactorization};
use super::rotation::rotate_clockwise_90;
use super::stats_client::StatsClient;

/// Rotated copy and QR factorization of one validated matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    pub rotated: Matrix,
    pub q: Matrix,
    pub r: Matrix,
}

/// Validate, rotate and factorize without contacting the stats service
///
/// Fails with [`Error::Validation`](crate::Error::Validation) on a malformed
/// matrix and [`Error::Factorization`](crate::Error::Factorization) if the
/// factorization cannot be computed.
pub fn transform(matrix: Vec<Vec<f64>>) -> Result<Transformed> {
    let matrix = Matrix::from_rows(matrix)?;
    tracing::debug!(
        rows = matrix.nrows(),
        cols = matrix.ncols(),
        "matrix validated"
    );

    let rotated = rotate_clockwise_90(&matrix);

    // QR of the original matrix, not the rotated one
    let QrFactorization { q, r } = factorize_qr(&matrix).map_err(|e| {
        tracing::error!(
            rows = matrix.nrows(),
            cols = matrix.ncols(),
            "QR factorization failed on validated input: {}",
            e
        );
        e
    })?;

    Ok(Transformed { rotated, q, r })
}

/// Runs the full processing pipeline for one request
#[derive(Debug, Clone)]
pub struct Pipeline {
    stats: StatsClient,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_client(StatsClient::new(config)?))
    }

    pub fn with_client(stats: StatsClient) -> Self {
        Self { stats }
    }

    pub fn stats_client(&self) -> &StatsClient {
        &self.stats
    }

    /// Process a submitted matrix on behalf of the caller holding `credential`
    ///
    /// Validation and factorization failures abort the request. A failed
    /// enrichment call does not: the outcome then carries the computed
    /// matrices and a note describing the failure instead of statistics.
    pub async fn process(
        &self,
        matrix: Vec<Vec<f64>>,
        credential: &str,
    ) -> Result<ProcessingOutcome> {
        let Transformed { rotated, q, r } = transform(matrix)?;

        match self.stats.fetch_stats(&q, &r, &rotated, credential).await {
            Ok(stats) => Ok(ProcessingOutcome::enriched(rotated, q, r, stats)),
            Err(e) => {
                tracing::warn!(url = self.stats.url(), "could not fetch statistics: {}", e);
                Ok(ProcessingOutcome::degraded(
                    rotated,
                    q,
                    r,
                    format!("could not fetch statistics from the stats service: {}", e),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::ValidationError;
    use crate::Error;

    #[test]
    fn test_transform_square() {
        let out = transform(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(out.rotated.to_rows(), vec![vec![3.0, 1.0], vec![4.0, 2.0]]);
        assert_eq!(out.q.dimensions(), out.r.dimensions());

        let original = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let product = out.q.as_dmatrix() * out.r.as_dmatrix();
        assert!((product - original.as_dmatrix()).amax() < 1e-6);
    }

    #[test]
    fn test_transform_rejects_ragged() {
        let err = transform(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NotRectangular { row_index: 1, .. })
        ));
    }

    #[test]
    fn test_transform_rejects_empty() {
        assert!(matches!(
            transform(vec![]),
            Err(Error::Validation(ValidationError::EmptyMatrix))
        ));
        assert!(matches!(
            transform(vec![vec![]]),
            Err(Error::Validation(ValidationError::EmptyRow))
        ));
    }

    #[tokio::test]
    async fn test_process_degrades_when_stats_unreachable() {
        // port 9 (discard) is not expected to be listening on localhost
        let mut config = Config::with_stats_url("http://127.0.0.1:9");
        config.stats.timeout_secs = 2;
        let pipeline = Pipeline::new(&config).unwrap();

        let outcome = pipeline
            .process(vec![vec![1.0, 2.0], vec![3.0, 4.0]], "token")
            .await
            .unwrap();

        assert!(!outcome.is_enriched());
        assert_eq!(outcome.rotated.to_rows(), vec![vec![3.0, 1.0], vec![4.0, 2.0]]);
        let note = outcome.error.unwrap();
        assert!(note.starts_with("could not fetch statistics"));
    }

    #[tokio::test]
    async fn test_process_validation_error_is_fatal() {
        let pipeline = Pipeline::new(&Config::default()).unwrap();
        let result = pipeline.process(vec![vec![1.0], vec![]], "token").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
