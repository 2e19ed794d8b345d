//! Serve command handler
//!
//! Starts the mock analysis backend in foreground mode.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use crate::server::state::AppState;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Serve files from this directory at `/` (e.g. rendered html maps)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let mut state = AppState::mock();
    if let Some(dir) = args.static_dir {
        info!("Serving static files from {}", dir.display());
        state = state.with_static_dir(dir);
    }

    info!(
        "Starting tama-map mock backend v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    server::run_on(&config.server_addr(), state).await
}
