//! Centralized constants for the tama-map crate
//!
//! Values shared between the renderer, the page components and the
//! output formatters.

/// Geographic constants
pub mod geo {
    /// Meters per degree of latitude (approximate, varies slightly with latitude)
    pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

    /// Fallback map center (central Tel Aviv) when no coordinate is usable
    pub const DEFAULT_CENTER_LAT: f64 = 32.0699;
    pub const DEFAULT_CENTER_LNG: f64 = 34.7735;

    /// Initial zoom level of a fresh map
    pub const DEFAULT_ZOOM: u8 = 16;
}

/// Map rendering constants
pub mod render {
    /// Inflation applied to the search radius before drawing the indicator.
    ///
    /// The indicator is centered on the mean of the result coordinates, not
    /// on the queried address, so the raw radius can clip results at the
    /// edge. This is a visual allowance only; the analysis itself used the
    /// radius the user entered.
    pub const RADIUS_DISPLAY_FACTOR: f64 = 1.5;

    /// Fraction of the bounding box added on every side when fitting the view
    pub const FIT_PADDING: f64 = 0.5;

    /// Literal value of the Tama 38 flag that marks a building as affected
    pub const AFFIRMATIVE_FLAG: &str = "כן";

    /// Attribute holding the Tama 38 flag
    pub const FLAG_ATTRIBUTE: &str = "sw_tama_38";

    /// Attribute holding the human-readable address list
    pub const ADDRESS_ATTRIBUTE: &str = "addresses";

    pub const AFFIRMATIVE_COLOR: &str = "red";
    pub const DEFAULT_COLOR: &str = "yellow";

    pub const FEATURE_FILL_OPACITY: f64 = 0.5;
    pub const FEATURE_WEIGHT: u32 = 2;

    pub const RADIUS_COLOR: &str = "#333333";
    pub const RADIUS_FILL_COLOR: &str = "#888888";
    pub const RADIUS_FILL_OPACITY: f64 = 0.3;
    pub const RADIUS_WEIGHT: u32 = 1;
}

/// User-facing text shown by the page
pub mod text {
    pub const STREET_PLACEHOLDER: &str = "Select a street";
    pub const EXPAND_LABEL: &str = "Expand Dev View";
    pub const COLLAPSE_LABEL: &str = "Collapse Dev View";
    pub const NO_RESULTS: &str = "No problematic addresses found nearby.";
    pub const NO_VALID_FEATURES: &str = "No valid polygons found in the response to display.";
    pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
}

/// Backend API paths
pub mod api {
    pub const STREETS_PATH: &str = "/api/streets/";
    pub const ANALYZE_PATH: &str = "/api/analyze/";
}
