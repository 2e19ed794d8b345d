//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{OutputFormatter, Report};
use crate::map::{RenderOutcome, Shape, Viewport};
use crate::page::{MapRegion, SubmitOutcome};

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, report: &Report, _config: &Config) -> Result<String> {
        let mut output = String::new();
        let query = &report.query;

        output.push_str(&format!(
            "Address: {} {} (radius {})\n",
            query.street, query.house_number, query.radius
        ));

        match &report.outcome {
            SubmitOutcome::Applied(RenderOutcome::Rendered {
                features,
                skipped,
                center,
                radius_indicator,
            }) => {
                output.push_str(&format!("Center: ({:.6}, {:.6})\n", center.lat, center.lng));
                match radius_indicator {
                    Some(r) => output.push_str(&format!("Radius indicator: {}m\n", r)),
                    None => output.push_str("Radius indicator: none\n"),
                }
                output.push_str(&format!("Features: {} ({} skipped)\n", features, skipped));
            }
            SubmitOutcome::Applied(_) => {}
            SubmitOutcome::Failed(message) => {
                output.push_str(&format!("Failed: {}\n", message));
            }
            SubmitOutcome::Stale => {
                output.push_str("Superseded by a newer submission\n");
            }
        }

        if let MapRegion::Map { map } = &report.page.map_region {
            let items: Vec<_> = map.item_features().collect();
            if !items.is_empty() {
                output.push_str("\nResults:\n");
            }
            for feature in items {
                let kind = match feature.shape {
                    Shape::Polygon { .. } => "polygon",
                    Shape::Marker { .. } => "marker",
                    Shape::Circle { .. } => "circle",
                };
                let popup = feature.popup.as_deref().unwrap_or("").replace("<br>", " | ");
                output.push_str(&format!("  [{}] {:7} {}\n", feature.style.color, kind, popup));
            }

            if let Viewport::Fitted { bounds } = map.viewport() {
                output.push_str(&format!(
                    "\nView: ({:.6}, {:.6}) - ({:.6}, {:.6})\n",
                    bounds.south, bounds.west, bounds.north, bounds.east
                ));
            }
        }

        for notice in &report.page.notices {
            output.push_str(&format!("Notice: {}\n", notice));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::{failed_report, rendered_report};

    #[test]
    fn test_text_format() {
        let output = TextFormatter
            .format(&rendered_report(), &Config::default())
            .unwrap();

        assert!(output.contains("Address: הרצל 7 (radius 100)"));
        assert!(output.contains("Radius indicator: 150m"));
        assert!(output.contains("Features: 2 (0 skipped)"));
        assert!(output.contains("[red] polygon"));
        assert!(output.contains("[yellow] marker"));
        assert!(output.contains("הרצל 7 | Tama 38: כן"));
        assert!(output.contains("View:"));
    }

    #[test]
    fn test_text_format_failure() {
        let output = TextFormatter
            .format(&failed_report(), &Config::default())
            .unwrap();

        assert!(output.contains("Failed: HTTP 400: bad radius"));
        assert!(!output.contains("Results:"));
    }

    #[test]
    fn test_text_formatter_info() {
        assert_eq!(TextFormatter.name(), "text");
        assert!(!TextFormatter.description().is_empty());
    }
}
