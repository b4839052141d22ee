//! Types exchanged with the external statistics service

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;

/// Body of `POST /matrix/stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsRequest<'a> {
    pub q: &'a Matrix,
    pub r: &'a Matrix,
    pub rotated: &'a Matrix,
}

/// Statistics computed by the stats service over Q, R and the rotated matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
    pub sum: f64,
    /// Whether any of the submitted matrices is diagonal
    #[serde(rename = "anyDiagonal")]
    pub any_diagonal: bool,
}
