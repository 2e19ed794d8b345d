//! Output formatters
//!
//! Provides trait-based output formatting for a rendered analysis.

pub mod geojson;
pub mod html;
pub mod json;
pub mod text;
pub mod url;

use crate::config::Config;
use crate::error::Result;
use crate::model::SearchQuery;
use crate::page::{Page, SubmitOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Everything a formatter may show about one submission
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub query: SearchQuery,
    pub outcome: SubmitOutcome,
    pub page: Page,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(query: SearchQuery, outcome: SubmitOutcome, page: Page) -> Self {
        Self {
            query,
            outcome,
            page,
            generated_at: Utc::now(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the report
    ///
    /// # Arguments
    /// * `report` - The submission and the page state it produced
    /// * `config` - Application config (tile layer, url providers, etc.)
    fn format(&self, report: &Report, config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "geojson" => Some(Box::new(geojson::GeoJsonFormatter)),
        "html" => Some(Box::new(html::HtmlFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    ["json", "geojson", "html", "text", "url"]
        .into_iter()
        .filter_map(get_formatter)
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Report;
    use crate::model::SearchQuery;
    use crate::page::Page;
    use serde_json::json;

    /// A report with one affirmative polygon and one marker
    pub fn rendered_report() -> Report {
        let mut page = Page::default();
        let query = SearchQuery::new("הרצל", "7", "100");
        let ticket = page.begin_submit(&query);
        let outcome = page.complete_submit(
            ticket,
            Ok(json!([
                {
                    "attributes": {"addresses": "הרצל 7", "sw_tama_38": "כן"},
                    "geometry": {"rings": [[
                        [32.0620, 34.7700],
                        [32.0625, 34.7700],
                        [32.0625, 34.7706]
                    ]]}
                },
                {"attributes": {
                    "addresses": "הרצל 9",
                    "sw_tama_38": "לא",
                    "lat": 32.0630,
                    "lng": 34.7710
                }}
            ])),
        );
        Report::new(query, outcome, page)
    }

    /// A report for a submission that failed
    pub fn failed_report() -> Report {
        let mut page = Page::default();
        let query = SearchQuery::new("הרצל", "7", "100");
        let ticket = page.begin_submit(&query);
        let outcome = page.complete_submit(
            ticket,
            Err(crate::api::status_error(400, r#"{"error": "bad radius"}"#)),
        );
        Report::new(query, outcome, page)
    }
}
