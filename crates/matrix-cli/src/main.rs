use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => matrix_app::Config::from_file(path)?,
        None => matrix_app::Config::default(),
    };
    if let Some(url) = cli.stats_url {
        config.stats.base_url = url;
    }
    if let Some(secs) = cli.stats_timeout {
        config.stats.timeout_secs = secs;
    }
    config.check()?;

    match cli.command {
        Commands::Serve { host, port } => commands::serve::run(config, host, port).await,
        Commands::Process { input, token } => {
            commands::process::run(config, &input, token.as_deref()).await
        }
    }
}
