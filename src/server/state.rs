//! Server shared state
//!
//! Holds the data the mock backend answers from.

use crate::server::mock;
use serde_json::Value;
use std::path::PathBuf;

/// Shared state for the HTTP server
pub struct AppState {
    /// Street names served by `/api/streets/`
    pub streets: Vec<String>,

    /// Raw places the analysis filters
    pub places: Vec<Value>,

    /// Directory served at `/`, if any
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Create application state from explicit data
    pub fn new(streets: Vec<String>, places: Vec<Value>) -> Self {
        Self {
            streets,
            places,
            static_dir: None,
        }
    }

    /// State backed by the built-in mock data
    pub fn mock() -> Self {
        Self::new(mock::streets(), mock::places())
    }

    /// Also serve files from `dir`
    pub fn with_static_dir(mut self, dir: PathBuf) -> Self {
        self.static_dir = Some(dir);
        self
    }
}
