//! # matrix-app
//!
//! Matrix processing service: validates a submitted matrix, rotates it 90°
//! clockwise, computes its QR factorization and enriches the result with
//! statistics from an external stats service. A failing stats service never
//! fails the request; the computed matrices are returned with a note instead.
//!
//! ## Usage
//!
//! ### As a Library
//! ```rust,ignore
//! use matrix_app::{Config, MatrixApp};
//!
//! let app = MatrixApp::new(Config::default())?;
//! let outcome = app
//!     .pipeline()
//!     .process(vec![vec![1.0, 2.0], vec![3.0, 4.0]], token)
//!     .await?;
//! ```
//!
//! ### Starting the Server
//! ```rust,ignore
//! use matrix_app::server;
//!
//! server::run(config).await?;
//! ```

pub mod config;
pub mod error;
pub mod matrix;
pub mod services;
pub mod types;

#[cfg(feature = "server")]
pub mod server;

// Re-export key types
pub use config::Config;
pub use error::{Error, Result};
pub use matrix::{Dimensions, Matrix};
pub use services::{
    EnrichmentError, FactorizationError, Pipeline, QrFactorization, StatsClient, ValidationError,
};
pub use types::api::ProcessingOutcome;
pub use types::stats::NodeStats;

/// Main application facade
pub struct MatrixApp {
    config: Config,
    pipeline: Pipeline,
}

impl MatrixApp {
    /// Create a new MatrixApp instance
    pub fn new(config: Config) -> Result<Self> {
        config.check()?;
        let pipeline = Pipeline::new(&config)?;
        Ok(Self { config, pipeline })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the processing pipeline
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}
