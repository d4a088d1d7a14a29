//! Page configuration.
//!
//! Every field has a default from [`crate::consts`], so an empty JSON object
//! (or no config at all) reproduces the stock portfolio markup contract. The
//! page may override any subset with a JSON object in
//! `<script type="application/json" id="portfolio-config">`.

use serde::Deserialize;
use web_sys::Document;

use crate::consts;
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub header_selector: String,
    pub nav_toggle_selector: String,
    pub nav_container_id: String,
    pub year_id: String,
    pub theme_toggle_id: String,
    pub stats_container_selectors: Vec<String>,
    pub stat_number_selector: String,
    pub theme_storage_key: String,
    /// Offset above which the header shadow engages.
    pub header_shadow_px: f64,
    /// Offset at or below which an engaged shadow clears. `None` means the
    /// same as `header_shadow_px` (no hysteresis).
    pub header_release_px: Option<f64>,
    pub count_up_duration_ms: f64,
    pub stats_visibility_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_selector: consts::HEADER_SELECTOR.to_owned(),
            nav_toggle_selector: consts::NAV_TOGGLE_SELECTOR.to_owned(),
            nav_container_id: consts::NAV_CONTAINER_ID.to_owned(),
            year_id: consts::YEAR_ID.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            stats_container_selectors: consts::STATS_CONTAINER_SELECTORS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            stat_number_selector: consts::STAT_NUMBER_SELECTOR.to_owned(),
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            header_shadow_px: consts::HEADER_SHADOW_PX,
            header_release_px: None,
            count_up_duration_ms: consts::COUNT_UP_DURATION_MS,
            stats_visibility_threshold: consts::STATS_VISIBILITY_THRESHOLD,
        }
    }
}

impl Config {
    /// Parse a JSON override object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON, unknown fields, or values
    /// rejected by [`Config::validate`].
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Config embedded in the page, or the defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the embedded JSON is invalid.
    pub fn from_document(document: &Document) -> Result<Self> {
        match document.get_element_by_id(consts::CONFIG_ELEMENT_ID) {
            Some(el) => Self::from_json(&el.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if !(self.count_up_duration_ms.is_finite() && self.count_up_duration_ms > 0.0) {
            return Err(Error::Config(format!(
                "count_up_duration_ms must be positive, got {}",
                self.count_up_duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.stats_visibility_threshold) {
            return Err(Error::Config(format!(
                "stats_visibility_threshold must be within [0, 1], got {}",
                self.stats_visibility_threshold
            )));
        }
        if !(self.header_shadow_px.is_finite() && self.header_shadow_px >= 0.0) {
            return Err(Error::Config(format!(
                "header_shadow_px must be a non-negative number, got {}",
                self.header_shadow_px
            )));
        }
        if let Some(release) = self.header_release_px {
            if !release.is_finite() || release < 0.0 || release > self.header_shadow_px {
                return Err(Error::Config(format!(
                    "header_release_px must be within [0, header_shadow_px ({})], got {release}",
                    self.header_shadow_px
                )));
            }
        }
        if self.theme_storage_key.is_empty() {
            return Err(Error::Config("theme_storage_key must not be empty".into()));
        }
        Ok(())
    }

    /// Release threshold for the header shadow, defaulting to the engage one.
    #[must_use]
    pub fn header_release_px(&self) -> f64 {
        self.header_release_px.unwrap_or(self.header_shadow_px)
    }
}
