//! tama-map CLI entry point
//!
//! Address analysis client - CLI + mock backend

use tama_map::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
