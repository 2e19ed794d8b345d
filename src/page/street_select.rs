//! Street selection control

use crate::constants::text::STREET_PLACEHOLDER;
use crate::model::StreetName;
use serde::{Deserialize, Serialize};

/// One `<option>` of the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: STREET_PLACEHOLDER.to_string(),
        }
    }

    fn street(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetSelect {
    options: Vec<SelectOption>,
}

impl Default for StreetSelect {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::placeholder()],
        }
    }
}

impl StreetSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Replace every option with the placeholder plus `streets`, in order
    pub fn replace(&mut self, streets: &[StreetName]) {
        self.options = std::iter::once(SelectOption::placeholder())
            .chain(streets.iter().map(|s| SelectOption::street(s)))
            .collect();
    }

    /// Street names, without the placeholder
    pub fn streets(&self) -> impl Iterator<Item = &str> {
        self.options.iter().skip(1).map(|o| o.value.as_str())
    }

    /// Whether `street` is one of the loaded options
    pub fn contains(&self, street: &str) -> bool {
        !street.is_empty() && self.streets().any(|s| s == street)
    }

    /// Streets containing `needle`, case-insensitively
    pub fn filter(&self, needle: &str) -> Vec<&str> {
        let needle = needle.to_lowercase();
        self.streets()
            .filter(|s| s.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn streets() -> Vec<StreetName> {
        vec!["הרצל".to_string(), "Allenby".to_string(), "שדרות רוטשילד".to_string()]
    }

    #[test]
    fn test_starts_with_placeholder() {
        let select = StreetSelect::new();
        assert_eq!(select.options().len(), 1);
        assert_eq!(select.options()[0].label, "Select a street");
        assert_eq!(select.options()[0].value, "");
    }

    #[test]
    fn test_replace_keeps_order() {
        let mut select = StreetSelect::new();
        select.replace(&streets());

        assert_eq!(select.options().len(), 4);
        let names: Vec<&str> = select.streets().collect();
        assert_eq!(names, vec!["הרצל", "Allenby", "שדרות רוטשילד"]);
    }

    #[test]
    fn test_replace_is_idempotent() {
        let mut select = StreetSelect::new();
        select.replace(&streets());
        select.replace(&streets());
        assert_eq!(select.options().len(), 4);

        select.replace(&[]);
        assert_eq!(select.options().len(), 1);
    }

    #[test]
    fn test_contains() {
        let mut select = StreetSelect::new();
        select.replace(&streets());

        assert!(select.contains("הרצל"));
        assert!(!select.contains("Dizengoff"));
        assert!(!select.contains(""));
    }

    #[test]
    fn test_filter_case_insensitive() {
        let mut select = StreetSelect::new();
        select.replace(&streets());

        assert_eq!(select.filter("allen"), vec!["Allenby"]);
        assert_eq!(select.filter("רוט"), vec!["שדרות רוטשילד"]);
        assert_eq!(select.filter("").len(), 3);
    }
}
