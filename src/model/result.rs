//! Analysis result items
//!
//! The analysis endpoint returns a JSON array whose items come in two shapes:
//!
//! ```json
//! {"attributes": {"addresses": "...", "sw_tama_38": "כן"},
//!  "geometry": {"rings": [[[32.06, 34.77], ...]]}}
//! {"attributes": {"addresses": "...", "lat": 32.06, "lng": 34.77}}
//! ```
//!
//! Items are classified leniently: a malformed item becomes
//! [`ResultItem::Invalid`] instead of failing the whole payload.

use crate::constants::render::{ADDRESS_ATTRIBUTE, AFFIRMATIVE_FLAG, FLAG_ATTRIBUTE};
use crate::model::Coordinates;
use serde_json::{Map, Value};

/// Free-form key/value attributes of a result item
pub type Attributes = Map<String, Value>;

/// One classified item of an analysis response
#[derive(Debug, Clone, PartialEq)]
pub enum ResultItem {
    /// Building footprint with one or more rings
    Polygon {
        attributes: Attributes,
        rings: Vec<Vec<Coordinates>>,
    },
    /// Attribute-only item, optionally carrying explicit `lat`/`lng`
    Marker {
        attributes: Attributes,
        coords: Option<Coordinates>,
    },
    /// Neither rings nor attributes; never rendered
    Invalid { raw: Value },
}

impl ResultItem {
    /// Classify a raw JSON item
    pub fn from_value(value: &Value) -> Self {
        let attributes = value
            .get("attributes")
            .and_then(Value::as_object)
            .cloned();

        let rings = value
            .get("geometry")
            .and_then(|g| g.get("rings"))
            .and_then(Value::as_array)
            .map(|rings| parse_rings(rings))
            .filter(|rings| rings.iter().any(|ring| !ring.is_empty()));

        match (rings, attributes) {
            (Some(rings), attributes) => Self::Polygon {
                attributes: attributes.unwrap_or_default(),
                rings,
            },
            (None, Some(attributes)) => {
                let coords = attribute_coords(&attributes);
                Self::Marker { attributes, coords }
            }
            (None, None) => Self::Invalid { raw: value.clone() },
        }
    }

    /// Attributes of a renderable item
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Polygon { attributes, .. } | Self::Marker { attributes, .. } => Some(attributes),
            Self::Invalid { .. } => None,
        }
    }

    /// Every explicit coordinate this item contributes to the map center
    pub fn coordinates(&self) -> Vec<Coordinates> {
        match self {
            Self::Polygon { rings, .. } => rings.iter().flatten().copied().collect(),
            Self::Marker { coords, .. } => coords.iter().copied().collect(),
            Self::Invalid { .. } => Vec::new(),
        }
    }

    /// Raw text of the Tama 38 flag, empty when absent
    pub fn flag_text(&self) -> String {
        self.attribute_text(FLAG_ATTRIBUTE)
    }

    /// Whether the Tama 38 flag carries the affirmative token
    pub fn is_affirmative(&self) -> bool {
        self.attributes()
            .and_then(|a| a.get(FLAG_ATTRIBUTE))
            .and_then(Value::as_str)
            .is_some_and(|flag| flag == AFFIRMATIVE_FLAG)
    }

    /// Address list of the item, empty when absent
    pub fn address_text(&self) -> String {
        self.attribute_text(ADDRESS_ATTRIBUTE)
    }

    fn attribute_text(&self, key: &str) -> String {
        match self.attributes().and_then(|a| a.get(key)) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// A non-empty, classified analysis response
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub items: Vec<ResultItem>,
}

impl AnalysisResult {
    /// Classify a decoded response body
    ///
    /// Returns `None` for the "no results" outcome: the payload is not an
    /// array, or the array is empty.
    pub fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.is_empty() {
            return None;
        }

        Some(Self {
            items: items.iter().map(ResultItem::from_value).collect(),
        })
    }

    /// All explicit coordinates across polygon rings and markers
    pub fn coordinates(&self) -> Vec<Coordinates> {
        self.items.iter().flat_map(ResultItem::coordinates).collect()
    }

    /// Mean of all explicit coordinates
    pub fn center(&self) -> Option<Coordinates> {
        Coordinates::mean(self.coordinates())
    }
}

/// Parse rings of `[lat, lng]` points, dropping points that are not numeric pairs
fn parse_rings(rings: &[Value]) -> Vec<Vec<Coordinates>> {
    rings
        .iter()
        .filter_map(Value::as_array)
        .map(|ring| ring.iter().filter_map(parse_point).collect())
        .collect()
}

fn parse_point(point: &Value) -> Option<Coordinates> {
    let pair = point.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    let lat = pair[0].as_f64()?;
    let lng = pair[1].as_f64()?;
    Some(Coordinates::new(lat, lng))
}

/// Explicit `lat`/`lng` attributes, numbers or numeric strings
fn attribute_coords(attributes: &Attributes) -> Option<Coordinates> {
    let number = |key: &str| match attributes.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let lat = number("lat")?;
    let lng = number("lng")?;
    (lat.is_finite() && lng.is_finite()).then(|| Coordinates::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_polygon_item() {
        let item = ResultItem::from_value(&json!({
            "attributes": {"addresses": "הרצל 5", "sw_tama_38": "כן"},
            "geometry": {"rings": [[[32.0, 34.0], [32.1, 34.1], [32.0, 34.1]]]}
        }));

        match &item {
            ResultItem::Polygon { rings, .. } => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0][1], Coordinates::new(32.1, 34.1));
            }
            other => panic!("expected polygon, got {:?}", other),
        }
        assert!(item.is_affirmative());
        assert_eq!(item.address_text(), "הרצל 5");
        assert_eq!(item.flag_text(), "כן");
    }

    #[test]
    fn test_ring_points_keep_lat_lng_order() {
        let item = ResultItem::from_value(&json!({
            "attributes": {},
            "geometry": {"rings": [[[32.5, 34.9]]]}
        }));

        let coords = item.coordinates();
        assert_eq!(coords, vec![Coordinates::new(32.5, 34.9)]);
    }

    #[test]
    fn test_invalid_ring_points_dropped() {
        let item = ResultItem::from_value(&json!({
            "attributes": {},
            "geometry": {"rings": [[[32.0], "x", [32.0, 34.0], [null, 1.0]]]}
        }));

        assert_eq!(item.coordinates(), vec![Coordinates::new(32.0, 34.0)]);
    }

    #[test]
    fn test_marker_item_numeric_and_string_coords() {
        let numeric = json!({"attributes": {"lat": 32.0, "lng": 34.0}});
        let textual = json!({"attributes": {"lat": "32.0", "lng": "34.0"}});
        let numeric = ResultItem::from_value(&numeric);
        let textual = ResultItem::from_value(&textual);

        assert_eq!(numeric.coordinates(), vec![Coordinates::new(32.0, 34.0)]);
        assert_eq!(textual.coordinates(), vec![Coordinates::new(32.0, 34.0)]);
    }

    #[test]
    fn test_marker_with_null_geometry() {
        let item = ResultItem::from_value(&json!({
            "attributes": {"addresses": "הרצל 5", "building_stage": "בבניה", "sw_tama_38": "לא"},
            "geometry": null
        }));

        assert!(matches!(item, ResultItem::Marker { coords: None, .. }));
        assert!(!item.is_affirmative());
    }

    #[test]
    fn test_empty_rings_fall_back_to_marker() {
        let item = ResultItem::from_value(&json!({
            "attributes": {"lat": 32.0, "lng": 34.0},
            "geometry": {"rings": [[]]}
        }));

        assert!(matches!(item, ResultItem::Marker { coords: Some(_), .. }));
    }

    #[test]
    fn test_invalid_item() {
        assert!(matches!(
            ResultItem::from_value(&json!({"foo": 1})),
            ResultItem::Invalid { .. }
        ));
        assert!(matches!(
            ResultItem::from_value(&json!("text")),
            ResultItem::Invalid { .. }
        ));
        assert!(matches!(
            ResultItem::from_value(&json!({"attributes": "not an object"})),
            ResultItem::Invalid { .. }
        ));
    }

    #[test]
    fn test_flag_text_non_string() {
        let item = ResultItem::from_value(&json!({"attributes": {"sw_tama_38": true}}));
        assert_eq!(item.flag_text(), "true");
        assert!(!item.is_affirmative());

        let absent = ResultItem::from_value(&json!({"attributes": {}}));
        assert_eq!(absent.flag_text(), "");
    }

    #[test]
    fn test_no_results() {
        assert!(AnalysisResult::from_value(&json!([])).is_none());
        assert!(AnalysisResult::from_value(&json!({"error": "x"})).is_none());
        assert!(AnalysisResult::from_value(&json!(null)).is_none());
    }

    #[test]
    fn test_center_mixes_polygons_and_markers() {
        let result = AnalysisResult::from_value(&json!([
            {"attributes": {}, "geometry": {"rings": [[[32.0, 34.0], [32.2, 34.2]]]}},
            {"attributes": {"lat": 32.4, "lng": 34.4}},
            {"nothing": true}
        ]))
        .unwrap();

        assert_eq!(result.items.len(), 3);
        let center = result.center().unwrap();
        assert_relative_eq!(center.lat, 32.2, epsilon = 1e-9);
        assert_relative_eq!(center.lng, 34.2, epsilon = 1e-9);
    }
}
