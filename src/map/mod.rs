//! In-memory map scene
//!
//! This module handles:
//! - The features a query draws (radius circle, polygons, markers)
//! - The viewport, either the initial center/zoom or fitted bounds
//! - Rendering an analysis response onto a fresh map ([`render`])
//!
//! A [`Map`] is never reused between queries; the page replaces it.

pub mod bounds;
pub mod render;

pub use bounds::Bounds;
pub use render::{render_analysis, RenderOutcome};

use crate::constants::render::*;
use crate::model::Coordinates;
use serde::{Deserialize, Serialize};

/// Stroke and fill of a vector feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: u32,
}

impl Style {
    /// Style of a result item, red when the Tama 38 flag is affirmative
    pub fn for_flag(affirmative: bool) -> Self {
        let color = if affirmative {
            AFFIRMATIVE_COLOR
        } else {
            DEFAULT_COLOR
        };
        Self {
            color: color.to_string(),
            fill_color: color.to_string(),
            fill_opacity: FEATURE_FILL_OPACITY,
            weight: FEATURE_WEIGHT,
        }
    }

    /// Style of the search radius indicator
    pub fn radius_indicator() -> Self {
        Self {
            color: RADIUS_COLOR.to_string(),
            fill_color: RADIUS_FILL_COLOR.to_string(),
            fill_opacity: RADIUS_FILL_OPACITY,
            weight: RADIUS_WEIGHT,
        }
    }
}

/// Geometry of a rendered feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: Coordinates,
        radius_meters: f64,
    },
    Polygon {
        rings: Vec<Vec<Coordinates>>,
    },
    Marker {
        position: Coordinates,
    },
}

/// A feature drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub shape: Shape,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
}

impl Feature {
    pub fn new(shape: Shape, style: Style) -> Self {
        Self {
            shape,
            style,
            popup: None,
        }
    }

    pub fn with_popup(mut self, popup: impl Into<String>) -> Self {
        self.popup = Some(popup.into());
        self
    }

    pub fn is_radius_indicator(&self) -> bool {
        matches!(self.shape, Shape::Circle { .. })
    }

    /// Geographic extent of the feature
    pub fn bounds(&self) -> Option<Bounds> {
        match &self.shape {
            Shape::Circle {
                center,
                radius_meters,
            } => Some(Bounds::around_circle(*center, *radius_meters)),
            Shape::Polygon { rings } => Bounds::from_points(rings.iter().flatten().copied()),
            Shape::Marker { position } => Some(Bounds::from_point(*position)),
        }
    }
}

/// What the map is currently showing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Viewport {
    /// Initial view set when the map is created
    Centered { center: Coordinates, zoom: u8 },
    /// View fitted to a bounding box
    Fitted { bounds: Bounds },
}

impl Viewport {
    pub fn center(&self) -> Coordinates {
        match self {
            Self::Centered { center, .. } => *center,
            Self::Fitted { bounds } => bounds.center(),
        }
    }
}

/// One map instance, owned by a single query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    features: Vec<Feature>,
    viewport: Viewport,
}

impl Map {
    /// Fresh map with no features
    pub fn new(center: Coordinates, zoom: u8) -> Self {
        Self {
            features: Vec::new(),
            viewport: Viewport::Centered { center, zoom },
        }
    }

    /// Add a feature on top of the existing ones
    pub fn add(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The radius indicator, if one was drawn
    pub fn radius_indicator(&self) -> Option<&Feature> {
        self.features.iter().find(|f| f.is_radius_indicator())
    }

    /// Result features (everything except the radius indicator)
    pub fn item_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| !f.is_radius_indicator())
    }

    /// Bounds of every feature on the map
    pub fn bounds(&self) -> Option<Bounds> {
        self.features
            .iter()
            .filter_map(Feature::bounds)
            .reduce(|mut acc, b| {
                acc.extend(&b);
                acc
            })
    }

    /// Fit the view to `bounds` grown by `padding` on every side
    pub fn fit_bounds(&mut self, bounds: Bounds, padding: f64) {
        self.viewport = Viewport::Fitted {
            bounds: bounds.pad(padding),
        };
    }
}
