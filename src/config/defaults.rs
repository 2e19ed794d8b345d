//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default analysis backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds (0 disables the timeout)
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;

/// Default search radius in meters
pub const DEFAULT_RADIUS: u32 = 100;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default tile layer template
pub const DEFAULT_TILE_URL: &str =
    "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";

/// Default tile attribution
pub const DEFAULT_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors & CartoDB";

/// Default mock server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default mock server port
pub const DEFAULT_PORT: u16 = 8000;

/// Drop responses that belong to superseded submissions
pub const DEFAULT_DISCARD_STALE: bool = true;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "openstreetmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "tama-map";
