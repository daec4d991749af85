//! Carousel configuration

use serde::{Deserialize, Serialize};

/// Carousel configuration options
///
/// Immutable once a carousel is bound. Unspecified fields fall back to the
/// defaults below, both with struct-update syntax
/// (`CarouselConfig { random_start: true, ..Default::default() }`) and when
/// deserializing a partial option set (`#[serde(default)]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Class marking the current page
    pub active_class: String,
    /// Class marking hidden pages
    pub not_active_class: String,
    /// Selector identifying page elements among the container's descendants
    pub page_selector: String,
    /// Selector identifying the forward control
    pub right_button_selector: String,
    /// Selector identifying the backward control
    pub left_button_selector: String,
    /// Choose the initial active page uniformly at random
    pub random_start: bool,
    /// Selector for the current-page-number display target
    pub current_page_selector: String,
    /// Selector for the total-page-count display target
    pub total_pages_selector: String,
    /// Selector for the debug trace target
    pub progress_selector: String,
    /// Gate debug tracing
    pub debug: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            not_active_class: "hidden".to_string(),
            page_selector: ".item-page".to_string(),
            right_button_selector: ".next-button".to_string(),
            left_button_selector: ".prev-button".to_string(),
            random_start: false,
            current_page_selector: ".currentPage".to_string(),
            total_pages_selector: ".totalPages".to_string(),
            progress_selector: "#progress".to_string(),
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.active_class, "active");
        assert_eq!(config.page_selector, ".item-page");
        assert!(!config.random_start);
        assert!(!config.debug);
    }

    #[test]
    fn test_partial_options_merge_over_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"activeClass": "current", "randomStart": true}"#).unwrap();

        assert_eq!(config.active_class, "current");
        assert!(config.random_start);
        // Everything unspecified keeps its default
        assert_eq!(config.not_active_class, "hidden");
        assert_eq!(config.right_button_selector, ".next-button");
    }
}
