//! URL output formatter

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{OutputFormatter, Report};

/// URL formatter - outputs a map URL centered on the rendered view
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URL with optional provider override
    pub fn format_with_provider(
        &self,
        report: &Report,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        let map = report
            .page
            .map()
            .ok_or_else(|| Error::Render("No map was rendered".to_string()))?;

        let center = map.viewport().center();
        config.format_url(provider, center.lat, center.lng)
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the rendered view"
    }

    fn format(&self, report: &Report, config: &Config) -> Result<String> {
        self.format_with_provider(report, config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::{failed_report, rendered_report};

    #[test]
    fn test_url_format_default_provider() {
        let output = UrlFormatter
            .format(&rendered_report(), &Config::default())
            .unwrap();

        assert!(output.starts_with("https://www.openstreetmap.org/#map=16/32.06"));
    }

    #[test]
    fn test_url_format_with_provider() {
        let output = UrlFormatter
            .format_with_provider(&rendered_report(), &Config::default(), Some("google"))
            .unwrap();

        assert!(output.contains("google.com/maps"));
    }

    #[test]
    fn test_url_format_without_map() {
        let result = UrlFormatter.format(&failed_report(), &Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_url_formatter_info() {
        assert_eq!(UrlFormatter.name(), "url");
        assert!(!UrlFormatter.description().is_empty());
    }
}
