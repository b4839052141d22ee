mod auth;
mod handlers;
mod router;
mod state;

pub use auth::BearerCredential;
pub use router::create_router;
pub use state::AppState;

use crate::{Config, Result};

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve(listener, config).await
}

/// Serve on an already bound listener
pub async fn serve(listener: tokio::net::TcpListener, config: Config) -> Result<()> {
    let stats_url = config.stats_url();
    let state = AppState::new(config)?;
    let router = create_router(state);

    tracing::info!("Matrix server listening on http://{}", listener.local_addr()?);
    tracing::info!("Forwarding statistics requests to {}", stats_url);

    axum::serve(listener, router)
        .await
        .map_err(|e| crate::Error::Config(e.to_string()))?;

    Ok(())
}
