//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/tama-map/config.toml

pub mod defaults;

use crate::constants::geo::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_ZOOM};
use crate::error::{Error, Result};
use crate::model::Coordinates;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analysis backend connection
    #[serde(default)]
    pub backend: BackendConfig,

    /// Default form values
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Map presentation
    #[serde(default)]
    pub map: MapConfig,

    /// Mock server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Submission handling
    #[serde(default)]
    pub session: SessionConfig,

    /// URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Analysis backend connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL the `/api/...` paths are joined onto
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Request timeout in seconds, 0 for none
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Default form values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Search radius in meters
    #[serde(default = "default_radius")]
    pub radius: u32,

    /// Output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Map presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Latitude used when a result has no usable coordinates
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Longitude used when a result has no usable coordinates
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    /// Initial zoom of a fresh map
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Tile layer URL template
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Tile attribution
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

/// Mock server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Submission handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Ignore responses to submissions that were superseded by a newer one
    #[serde(default = "default_discard_stale")]
    pub discard_stale: bool,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_radius() -> u32 {
    DEFAULT_RADIUS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_center_lat() -> f64 {
    DEFAULT_CENTER_LAT
}
fn default_center_lng() -> f64 {
    DEFAULT_CENTER_LNG
}
fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}
fn default_tile_url() -> String {
    DEFAULT_TILE_URL.to_string()
}
fn default_attribution() -> String {
    DEFAULT_ATTRIBUTION.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_discard_stale() -> bool {
    DEFAULT_DISCARD_STALE
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/@{lat},{lng},{zoom}z".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/#map={zoom}/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "govmap".to_string(),
        "https://www.govmap.gov.il/?lat={lat}&lon={lng}&z={zoom}".to_string(),
    );
    providers
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            format: default_format(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            discard_stale: default_discard_stale(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl MapConfig {
    /// Fallback center as coordinates
    pub fn default_center(&self) -> Coordinates {
        Coordinates::new(self.center_lat, self.center_lng)
    }
}

impl BackendConfig {
    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["backend", "base_url"] => Some(self.backend.base_url.clone()),
            ["backend", "timeout_secs"] => Some(self.backend.timeout_secs.to_string()),

            ["defaults", "radius"] => Some(self.defaults.radius.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["map", "center_lat"] => Some(self.map.center_lat.to_string()),
            ["map", "center_lng"] => Some(self.map.center_lng.to_string()),
            ["map", "zoom"] => Some(self.map.zoom.to_string()),
            ["map", "tile_url"] => Some(self.map.tile_url.clone()),
            ["map", "attribution"] => Some(self.map.attribution.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["session", "discard_stale"] => Some(self.session.discard_stale.to_string()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["backend", "base_url"] => {
                self.backend.base_url = value.trim_end_matches('/').to_string();
            }
            ["backend", "timeout_secs"] => {
                self.backend.timeout_secs = parse_value(value, "timeout")?;
            }

            ["defaults", "radius"] => {
                self.defaults.radius = parse_value(value, "radius")?;
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["map", "center_lat"] => {
                self.map.center_lat = parse_value(value, "latitude")?;
            }
            ["map", "center_lng"] => {
                self.map.center_lng = parse_value(value, "longitude")?;
            }
            ["map", "zoom"] => {
                self.map.zoom = parse_value(value, "zoom")?;
            }
            ["map", "tile_url"] => {
                self.map.tile_url = value.to_string();
            }
            ["map", "attribution"] => {
                self.map.attribution = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = parse_value(value, "port")?;
            }

            ["session", "discard_stale"] => {
                self.session.discard_stale = parse_value(value, "boolean")?;
            }

            ["url", "default"] => {
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "backend.base_url",
            "backend.timeout_secs",
            "defaults.radius",
            "defaults.format",
            "map.center_lat",
            "map.center_lng",
            "map.zoom",
            "map.tile_url",
            "map.attribution",
            "server.host",
            "server.port",
            "session.discard_stale",
            "url.default",
        ]
    }

    /// Format a URL using the specified provider
    ///
    /// Replaces {lat}, {lng} and {zoom} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self.url.providers.get(provider_name).ok_or_else(|| {
            Error::Config(format!("Unknown URL provider: {}", provider_name))
        })?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string())
            .replace("{zoom}", &self.map.zoom.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_value<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {} value: {}", what, value)))
}
