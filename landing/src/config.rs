//! Runtime configuration for the landing page.
//!
//! Reads an optional `<script id="landing-config" type="application/json">`
//! block from the page. Every field has a default, so a page without the
//! block (or with a partial one) behaves exactly like the stock landing.

use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Id of the inline JSON element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Scroll offset past which the scroll-to-top button shows.
    pub scroll_top_threshold_px: f64,
    /// Visible fraction of a section that reveals it.
    pub reveal_threshold: f64,
    /// Root margin of the lazy-image watcher; negative shrinks the viewport.
    pub lazy_root_margin_px: f64,
    /// Opacity applied to the other nav links while one is hovered.
    pub hover_dim_opacity: f64,
    pub theme: ThemeConfig,
}

/// Theme toggle assets and persistence
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// localStorage key holding `"enabled"` / `"disabled"`.
    pub storage_key: String,
    pub dark_logo: String,
    pub light_logo: String,
    /// Icon classes rendered inside the toggle button.
    pub dark_icon: String,
    pub light_icon: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold_px: 300.0,
            reveal_threshold: 0.1,
            lazy_root_margin_px: -200.0,
            hover_dim_opacity: 0.5,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_string(),
            dark_logo: "img/sohoBela.webp".to_string(),
            light_logo: "img/physics.png".to_string(),
            dark_icon: "fa-solid fa-sun".to_string(),
            light_icon: "fa-solid fa-umbrella-beach".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    /// Load the config embedded in the page.
    /// Returns the default config if the element is absent or invalid.
    pub fn load(document: &Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            log::debug!("[soho][config] no #{CONFIG_ELEMENT_ID} element, using defaults");
            return Self::default();
        };

        let raw = element.text_content().unwrap_or_default();
        if raw.trim().is_empty() {
            return Self::default();
        }

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[soho][config] {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Clamp values the browser would reject.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            self.reveal_threshold = defaults.reveal_threshold;
        }
        if !(0.0..=1.0).contains(&self.hover_dim_opacity) {
            self.hover_dim_opacity = defaults.hover_dim_opacity;
        }
        if !self.scroll_top_threshold_px.is_finite() || self.scroll_top_threshold_px < 0.0 {
            self.scroll_top_threshold_px = defaults.scroll_top_threshold_px;
        }
        if !self.lazy_root_margin_px.is_finite() {
            self.lazy_root_margin_px = defaults.lazy_root_margin_px;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = LandingConfig::default();
        assert_eq!(config.scroll_top_threshold_px, 300.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.lazy_root_margin_px, -200.0);
        assert_eq!(config.theme.storage_key, "darkMode");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = LandingConfig::from_json("{}").expect("parse");
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = LandingConfig::from_json(
            r#"{ "scroll_top_threshold_px": 120, "theme": { "storage_key": "soho-theme" } }"#,
        )
        .expect("parse");
        assert_eq!(config.scroll_top_threshold_px, 120.0);
        assert_eq!(config.theme.storage_key, "soho-theme");
        // untouched nested fields keep their defaults
        assert_eq!(config.theme.dark_logo, "img/sohoBela.webp");
        assert_eq!(config.reveal_threshold, 0.1);
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let config = LandingConfig::from_json(
            r#"{ "reveal_threshold": 4.0, "hover_dim_opacity": -1, "scroll_top_threshold_px": -5 }"#,
        )
        .expect("parse");
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.hover_dim_opacity, 0.5);
        assert_eq!(config.scroll_top_threshold_px, 300.0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(LandingConfig::from_json("{ nope").is_err());
        assert!(LandingConfig::from_json(r#"{ "reveal_threshold": "high" }"#).is_err());
    }
}
