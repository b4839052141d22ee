use anyhow::Result;
use colored::Colorize;
use matrix_app::Config;

pub async fn run(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    // Update config with CLI arguments
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("{} Starting matrix server...", "▶".green());
    println!("  {} http://{}", "Listening on:".dimmed(), config.server_addr());
    println!("  {} {}", "Stats service:".dimmed(), config.stats_url());
    println!(
        "  {} {}s",
        "Stats timeout:".dimmed(),
        config.stats.timeout_secs
    );
    println!();

    // Start the server
    matrix_app::server::run(config).await?;

    Ok(())
}
