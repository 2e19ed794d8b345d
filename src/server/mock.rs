//! Built-in mock data for the analysis backend
//!
//! Street names and nearby places around Rothschild Boulevard, shaped the
//! way the municipal GIS layer returns them: attributes plus optional
//! geometry rings in `[lng, lat]` order.

use serde_json::{json, Value};

/// Building stage that makes a place relevant to the analysis
pub const DANGEROUS_STAGES: &[&str] = &["בבניה"];

/// Street list served by `/api/streets/`
pub fn streets() -> Vec<String> {
    [
        "אלנבי",
        "דיזנגוף",
        "הרצל",
        "לילינבלום",
        "נחלת בנימין",
        "שדרות רוטשילד",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Places within the search radius, as the GIS layer returns them
pub fn places() -> Vec<Value> {
    vec![
        json!({"attributes": {
            "addresses": "שדרות רוטשילד 16",
            "building_stage": "קיים היתר",
            "sw_tama_38": "לא"
        }}),
        json!({"attributes": {
            "addresses": "הרצל 5, שדרות רוטשילד 9",
            "building_stage": "בבניה",
            "sw_tama_38": "לא"
        }}),
        json!({"attributes": {
            "addresses": "הרצל 7, שדרות רוטשילד 10, שדרות רוטשילד 10א",
            "building_stage": "בתהליך היתר",
            "sw_tama_38": "לא"
        }}),
        json!({
            "attributes": {
                "addresses": "שדרות רוטשילד 12",
                "building_stage": "בבניה",
                "sw_tama_38": "כן"
            },
            "geometry": {"rings": [[
                [34.77030, 32.06262],
                [34.77058, 32.06262],
                [34.77058, 32.06286],
                [34.77030, 32.06286],
                [34.77030, 32.06262]
            ]]}
        }),
        json!({
            "attributes": {
                "addresses": "לילינבלום 3",
                "building_stage": "בבניה",
                "sw_tama_38": "לא"
            },
            "geometry": {"rings": [[
                [34.77102, 32.06190],
                [34.77131, 32.06190],
                [34.77131, 32.06211],
                [34.77102, 32.06190]
            ]]}
        }),
    ]
}

/// Swap each `[lng, lat]` ring point to `[lat, lng]`
fn to_lat_lng_rings(rings: &Value) -> Value {
    let Some(rings) = rings.as_array() else {
        return Value::Array(Vec::new());
    };

    Value::Array(
        rings
            .iter()
            .map(|ring| {
                let points = ring.as_array().map(Vec::as_slice).unwrap_or_default();
                Value::Array(
                    points
                        .iter()
                        .filter_map(|p| match p.as_array().map(Vec::as_slice) {
                            Some([lng, lat, ..]) => Some(json!([lat, lng])),
                            _ => None,
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Keep places at a dangerous building stage, normalising their geometry
///
/// Places with rings keep them (converted to `[lat, lng]`); places without
/// geometry are returned with `"geometry": null`.
pub fn risk_assessment(places: &[Value]) -> Vec<Value> {
    places
        .iter()
        .filter_map(|place| {
            // Some sources send bare attribute objects
            let attributes = place.get("attributes").unwrap_or(place);
            let stage = attributes.get("building_stage").and_then(Value::as_str)?;
            if !DANGEROUS_STAGES.contains(&stage) {
                return None;
            }

            let geometry = match place.get("geometry").and_then(|g| g.get("rings")) {
                Some(rings) => json!({"rings": to_lat_lng_rings(rings)}),
                None => Value::Null,
            };

            Some(json!({"attributes": attributes, "geometry": geometry}))
        })
        .collect()
}
