//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod analyze;
pub mod config;
pub mod serve;
pub mod streets;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Map nearby Tama 38 buildings for an address
#[derive(Parser)]
#[command(name = "tama-map")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the streets known to the backend
    Streets(streets::StreetsArgs),

    /// Analyze an address and render the result map
    Analyze(analyze::AnalyzeArgs),

    /// Run the mock analysis backend (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Initialize logging, honouring `RUST_LOG` when set
pub fn init_logging(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Streets(args) => {
            init_logging("warn");
            streets::run(args).await
        }
        Commands::Analyze(args) => {
            init_logging("warn");
            analyze::run(args).await
        }
        Commands::Serve(args) => {
            init_logging("info");
            serve::run(args).await
        }
        Commands::Config(args) => config::run(args),
    }
}
