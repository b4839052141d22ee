use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::matrix::Matrix;
use crate::types::stats::{NodeStats, StatsRequest};
use crate::Result;

/// Failure to obtain statistics from the stats service
///
/// Never fatal to a request; the pipeline reports it inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    #[error("request to stats service timed out: {0}")]
    Timeout(String),

    #[error("could not connect to stats service: {0}")]
    Connect(String),

    #[error("request to stats service failed: {0}")]
    Request(String),

    #[error("stats service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not parse stats service response: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for EnrichmentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EnrichmentError::Timeout(err.to_string())
        } else if err.is_connect() {
            EnrichmentError::Connect(err.to_string())
        } else {
            EnrichmentError::Request(err.to_string())
        }
    }
}

/// Client for the external statistics service
///
/// Holds one pooled `reqwest::Client` with the configured timeout applied to
/// every call.
#[derive(Debug, Clone)]
pub struct StatsClient {
    url: String,
    client: Client,
}

impl StatsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.stats_timeout()).build()?;
        Ok(Self {
            url: config.stats_url(),
            client,
        })
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send Q, R and the rotated matrix to the stats service
    ///
    /// `credential` is forwarded untouched as a bearer token so the stats
    /// service can authenticate the same caller. An empty credential sends
    /// no `Authorization` header.
    pub async fn fetch_stats(
        &self,
        q: &Matrix,
        r: &Matrix,
        rotated: &Matrix,
        credential: &str,
    ) -> std::result::Result<NodeStats, EnrichmentError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&StatsRequest { q, r, rotated });
        if !credential.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", credential));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| EnrichmentError::InvalidBody(e.to_string()))
    }
}
