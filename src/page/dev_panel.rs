//! Diagnostic panel
//!
//! Developer-facing view of raw backend payloads and error text. Visibility
//! and content are independent: writing content never reveals the panel,
//! except through [`DevPanel::show_error`].

use crate::constants::text::{COLLAPSE_LABEL, EXPAND_LABEL};
use serde::{Deserialize, Serialize};

/// Panel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevPanel {
    visibility: Visibility,
    content: String,
}

impl DevPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Label of the toggle control: the action it performs next
    pub fn toggle_label(&self) -> &'static str {
        match self.visibility {
            Visibility::Hidden => EXPAND_LABEL,
            Visibility::Visible => COLLAPSE_LABEL,
        }
    }

    pub fn show(&mut self) {
        self.visibility = Visibility::Visible;
    }

    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    pub fn toggle(&mut self) {
        self.visibility = match self.visibility {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        };
    }

    /// Replace the panel text without touching visibility
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Record a failure and force the panel open
    pub fn show_error(&mut self, message: impl std::fmt::Display) {
        self.content = format!("Error: {}", message);
        self.show();
    }

    /// Collapse at the start of a new submission
    pub fn reset(&mut self) {
        self.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let panel = DevPanel::new();
        assert!(!panel.is_visible());
        assert_eq!(panel.toggle_label(), "Expand Dev View");
        assert_eq!(panel.content(), "");
    }

    #[test]
    fn test_toggle() {
        let mut panel = DevPanel::new();

        panel.toggle();
        assert_eq!(panel.visibility(), Visibility::Visible);
        assert_eq!(panel.toggle_label(), "Collapse Dev View");

        panel.toggle();
        assert_eq!(panel.visibility(), Visibility::Hidden);
        assert_eq!(panel.toggle_label(), "Expand Dev View");
    }

    #[test]
    fn test_set_content_keeps_visibility() {
        let mut panel = DevPanel::new();
        panel.set_content("[]");
        assert!(!panel.is_visible());
        assert_eq!(panel.content(), "[]");

        panel.show();
        panel.set_content("{}");
        assert!(panel.is_visible());
    }

    #[test]
    fn test_show_error_forces_visible() {
        let mut panel = DevPanel::new();
        panel.show_error("HTTP 400: bad radius");

        assert!(panel.is_visible());
        assert_eq!(panel.content(), "Error: HTTP 400: bad radius");
    }

    #[test]
    fn test_reset_hides() {
        let mut panel = DevPanel::new();
        panel.show_error("boom");
        panel.reset();

        assert!(!panel.is_visible());
        assert_eq!(panel.toggle_label(), "Expand Dev View");
    }
}
