use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matrixd")]
#[command(author, version, about = "Rotate and QR-factorize matrices, with statistics from a stats service")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true, env = "MATRIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the stats service
    #[arg(long, global = true, env = "STATS_API_URL")]
    pub stats_url: Option<String>,

    /// Timeout for stats service requests, in seconds
    #[arg(long, global = true, env = "STATS_TIMEOUT_SECS")]
    pub stats_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the matrix processing API server
    Serve {
        /// Host address to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Process a matrix file and print the result as JSON
    Process {
        /// JSON file containing {"matrix": [[...], ...]}
        input: PathBuf,

        /// Bearer token; when given, statistics are requested from the stats service
        #[arg(long, env = "MATRIX_TOKEN")]
        token: Option<String>,
    },
}
