//! Analysis response rendering
//!
//! Turns a decoded `/api/analyze/` body into features on a fresh [`Map`]:
//! 1. Empty or non-array payload: nothing is drawn
//! 2. Center = mean of all explicit coordinates (rings and markers)
//! 3. Radius indicator first, so result features sit on top
//! 4. One polygon or marker per renderable item
//! 5. Viewport fitted to everything drawn

use crate::constants::render::{FIT_PADDING, RADIUS_DISPLAY_FACTOR};
use crate::map::{Feature, Map, Shape, Style};
use crate::model::{AnalysisResult, Coordinates, ResultItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// What happened when a response was rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenderOutcome {
    /// Payload was empty or not an array; the map was left untouched
    NoResults,
    /// Items were present but none could be drawn
    NoValidFeatures { skipped: usize },
    /// Features were drawn and the view fitted
    Rendered {
        features: usize,
        skipped: usize,
        center: Coordinates,
        radius_indicator: Option<f64>,
    },
}

/// Radius actually drawn for a requested search radius
pub fn display_radius(radius_meters: u64) -> f64 {
    (radius_meters as f64 * RADIUS_DISPLAY_FACTOR).round()
}

/// Escape text for an HTML text node or attribute
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Popup markup of a result item
///
/// Attribute values are escaped; only the `<br>` separator is markup.
pub fn popup_text(item: &ResultItem) -> String {
    format!(
        "{}<br>Tama 38: {}",
        escape_html(&item.address_text()),
        escape_html(&item.flag_text())
    )
}

/// Render an analysis payload onto `map`
///
/// # Arguments
/// * `map` - Freshly created map for this query
/// * `payload` - Decoded response body
/// * `radius_meters` - Parsed search radius, `None` when invalid
/// * `default_center` - Used when no item carries usable coordinates
pub fn render_analysis(
    map: &mut Map,
    payload: &Value,
    radius_meters: Option<u64>,
    default_center: Coordinates,
) -> RenderOutcome {
    let Some(result) = AnalysisResult::from_value(payload) else {
        debug!("Analysis payload is empty or not an array");
        return RenderOutcome::NoResults;
    };

    let center = result.center().unwrap_or(default_center);

    let radius_indicator = match radius_meters {
        Some(radius) => {
            let display = display_radius(radius);
            map.add(Feature::new(
                Shape::Circle {
                    center,
                    radius_meters: display,
                },
                Style::radius_indicator(),
            ));
            Some(display)
        }
        None => {
            debug!("No positive radius, skipping radius indicator");
            None
        }
    };

    let mut features = 0;
    let mut skipped = 0;

    for (index, item) in result.items.iter().enumerate() {
        let shape = match item {
            ResultItem::Polygon { rings, .. } => Shape::Polygon {
                rings: rings.iter().filter(|r| !r.is_empty()).cloned().collect(),
            },
            ResultItem::Marker { coords, .. } => Shape::Marker {
                position: coords.unwrap_or(default_center),
            },
            ResultItem::Invalid { raw } => {
                warn!(index, item = %raw, "Skipping item without geometry or attributes");
                skipped += 1;
                continue;
            }
        };

        let feature = Feature::new(shape, Style::for_flag(item.is_affirmative()))
            .with_popup(popup_text(item));
        map.add(feature);
        features += 1;
    }

    if features == 0 {
        return RenderOutcome::NoValidFeatures { skipped };
    }

    if let Some(bounds) = map.bounds() {
        map.fit_bounds(bounds, FIT_PADDING);
    }

    RenderOutcome::Rendered {
        features,
        skipped,
        center,
        radius_indicator,
    }
}
