//! tama-map: Tama 38 address analysis client
//!
//! A library and CLI tool that asks an analysis backend which buildings near
//! an address are affected by Tama 38 and draws them on a map.
//!
//! ## Features
//!
//! - Street directory loading and address submission over HTTP
//! - Map rendering: radius indicator, colored polygons and markers, fitted view
//! - Diagnostic panel mirroring raw payloads and errors
//! - Output as a Leaflet page, GeoJSON, JSON, text or a map URL
//! - Mock backend for local use
//!
//! ## Quick Start
//!
//! ```rust
//! use tama_map::map::{render_analysis, Map, RenderOutcome};
//! use tama_map::model::Coordinates;
//!
//! let payload = serde_json::json!([
//!     {"attributes": {"addresses": "הרצל 7", "sw_tama_38": "כן"},
//!      "geometry": {"rings": [[[32.0620, 34.7700], [32.0625, 34.7706]]]}}
//! ]);
//!
//! let center = Coordinates::new(32.0699, 34.7735);
//! let mut map = Map::new(center, 16);
//! let outcome = render_analysis(&mut map, &payload, Some(100), center);
//!
//! assert!(matches!(outcome, RenderOutcome::Rendered { features: 1, .. }));
//! assert_eq!(map.features().len(), 2); // radius indicator + polygon
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod map;
pub mod model;
pub mod page;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use map::{Map, RenderOutcome};
pub use model::{Coordinates, SearchQuery};
pub use page::Page;
