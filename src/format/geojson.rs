//! GeoJSON output formatter
//!
//! GeoJSON positions are `[lng, lat]`, the reverse of the map's `[lat, lng]`
//! rings. The radius indicator has no GeoJSON geometry of its own and is
//! written as a Point carrying a `radius` property.

use crate::config::Config;
use crate::error::Result;
use crate::format::{OutputFormatter, Report};
use crate::map::{Feature, Shape};
use crate::model::Coordinates;
use serde::Serialize;
use serde_json::{json, Map as JsonMap, Value};

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

#[derive(Debug, Serialize)]
struct GeoJsonFeature {
    #[serde(rename = "type")]
    type_field: &'static str,
    geometry: Geometry,
    properties: JsonMap<String, Value>,
}

#[derive(Debug, Serialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    type_field: &'static str,
    features: Vec<GeoJsonFeature>,
}

fn position(c: &Coordinates) -> [f64; 2] {
    [c.lng, c.lat]
}

/// Close a ring by repeating its first position when needed
fn closed_ring(ring: &[Coordinates]) -> Vec<[f64; 2]> {
    let mut positions: Vec<[f64; 2]> = ring.iter().map(position).collect();
    if let (Some(first), Some(last)) = (positions.first().copied(), positions.last().copied()) {
        if first != last {
            positions.push(first);
        }
    }
    positions
}

fn convert(feature: &Feature) -> GeoJsonFeature {
    let mut properties = JsonMap::new();
    properties.insert("color".to_string(), json!(feature.style.color));
    properties.insert("fill_color".to_string(), json!(feature.style.fill_color));
    properties.insert("fill_opacity".to_string(), json!(feature.style.fill_opacity));
    if let Some(popup) = &feature.popup {
        properties.insert("popup".to_string(), json!(popup));
    }

    let geometry = match &feature.shape {
        Shape::Circle {
            center,
            radius_meters,
        } => {
            properties.insert("role".to_string(), json!("search_radius"));
            properties.insert("radius".to_string(), json!(radius_meters));
            Geometry::Point {
                coordinates: position(center),
            }
        }
        Shape::Polygon { rings } => Geometry::Polygon {
            coordinates: rings.iter().map(|r| closed_ring(r)).collect(),
        },
        Shape::Marker { position: p } => Geometry::Point {
            coordinates: position(p),
        },
    };

    GeoJsonFeature {
        type_field: "Feature",
        geometry,
        properties,
    }
}

/// GeoJSON formatter - outputs the drawn features as a FeatureCollection
pub struct GeoJsonFormatter;

impl OutputFormatter for GeoJsonFormatter {
    fn name(&self) -> &str {
        "geojson"
    }

    fn description(&self) -> &str {
        "GeoJSON FeatureCollection of drawn features"
    }

    fn format(&self, report: &Report, _config: &Config) -> Result<String> {
        let features: Vec<GeoJsonFeature> = report
            .page
            .map()
            .map(|m| m.features().iter().map(convert).collect())
            .unwrap_or_default();

        let collection = FeatureCollection {
            type_field: "FeatureCollection",
            features,
        };
        Ok(serde_json::to_string_pretty(&collection)?)
    }
}
