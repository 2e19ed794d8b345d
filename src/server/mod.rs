//! Mock analysis backend
//!
//! Serves `/api/streets/` and `/api/analyze/` from built-in data so the
//! client can be exercised without the production service.

pub mod mock;
pub mod routes;
pub mod state;

use crate::error::{Error, Result};
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server on `addr`
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run_on(addr: &str, state: AppState) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address: {}", e)))?;

    let app = create_router(Arc::new(state));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Mock backend listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
