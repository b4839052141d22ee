use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::services::Pipeline;
use crate::{Config, MatrixApp, Result};

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    app: MatrixApp,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let app = MatrixApp::new(config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                app,
                started_at: Utc::now(),
            }),
        })
    }

    pub fn config(&self) -> &Config {
        self.inner.app.config()
    }

    pub fn pipeline(&self) -> &Pipeline {
        self.inner.app.pipeline()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }
}
