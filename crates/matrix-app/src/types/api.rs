//! Request and response bodies of the matrix processing API

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::types::stats::NodeStats;

/// Body of `POST /matrix/process`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessMatrixRequest {
    /// Missing field is read as an empty matrix and rejected by validation
    #[serde(default)]
    pub matrix: Vec<Vec<f64>>,
}

/// Result of one pipeline run
///
/// `rotated`, `q` and `r` are always present. Exactly one of `node_stats`
/// and `error` is set, depending on whether enrichment succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingOutcome {
    pub rotated: Matrix,
    pub q: Matrix,
    pub r: Matrix,
    #[serde(rename = "nodeStats", skip_serializing_if = "Option::is_none", default)]
    pub node_stats: Option<NodeStats>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ProcessingOutcome {
    /// Outcome with statistics attached
    pub fn enriched(rotated: Matrix, q: Matrix, r: Matrix, stats: NodeStats) -> Self {
        Self {
            rotated,
            q,
            r,
            node_stats: Some(stats),
            error: None,
        }
    }

    /// Outcome without statistics, carrying a note on why enrichment failed
    pub fn degraded(rotated: Matrix, q: Matrix, r: Matrix, note: impl Into<String>) -> Self {
        Self {
            rotated,
            q,
            r,
            node_stats: None,
            error: Some(note.into()),
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.node_stats.is_some()
    }
}

/// Error body returned for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// `GET /` service description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub start_time: String,
    pub uptime_seconds: i64,
    pub os: String,
    pub arch: String,
    pub stats_api_url: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}
