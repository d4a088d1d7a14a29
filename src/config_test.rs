#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_stock_markup() {
    let config = Config::default();
    assert_eq!(config.header_selector, ".site-header");
    assert_eq!(config.nav_toggle_selector, ".nav-toggle");
    assert_eq!(config.nav_container_id, "site-nav");
    assert_eq!(config.year_id, "year");
    assert_eq!(config.theme_toggle_id, "theme-toggle");
    assert_eq!(config.stats_container_selectors, vec![".hero .stats".to_owned(), ".stats".to_owned()]);
    assert_eq!(config.stat_number_selector, ".stats .num");
    assert_eq!(config.theme_storage_key, "teacher-portfolio-theme");
    assert_eq!(config.header_shadow_px, 8.0);
    assert_eq!(config.count_up_duration_ms, 1400.0);
    assert_eq!(config.stats_visibility_threshold, 0.25);
}

#[test]
fn default_release_equals_engage() {
    let config = Config::default();
    assert_eq!(config.header_release_px, None);
    assert_eq!(config.header_release_px(), 8.0);
}

#[test]
fn default_is_valid() {
    assert!(Config::default().validate().is_ok());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{"theme_storage_key":"site-theme","header_release_px":4}"#).unwrap();
    assert_eq!(config.theme_storage_key, "site-theme");
    assert_eq!(config.header_release_px(), 4.0);
    assert_eq!(config.header_selector, ".site-header");
}

#[test]
fn unknown_field_is_rejected() {
    let err = Config::from_json(r#"{"colour":"red"}"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(Config::from_json("not json"), Err(Error::Config(_))));
}

// =============================================================
// validate
// =============================================================

#[test]
fn zero_duration_is_rejected() {
    let config = Config { count_up_duration_ms: 0.0, ..Config::default() };
    assert!(config.validate().is_err());
}

#[test]
fn observer_threshold_outside_unit_range_is_rejected() {
    let config = Config { stats_visibility_threshold: 1.5, ..Config::default() };
    assert!(config.validate().is_err());
}

#[test]
fn release_above_engage_is_rejected() {
    let config = Config { header_release_px: Some(12.0), ..Config::default() };
    assert!(config.validate().is_err());
}

#[test]
fn empty_storage_key_is_rejected() {
    let config = Config { theme_storage_key: String::new(), ..Config::default() };
    assert!(config.validate().is_err());
}

#[test]
fn negative_release_is_rejected() {
    let err = Config::from_json(r#"{"header_release_px":-1}"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn zero_release_is_accepted() {
    let config = Config::from_json(r#"{"header_release_px":0}"#).unwrap();
    assert_eq!(config.header_release_px(), 0.0);
}

#[test]
fn negative_engage_threshold_is_rejected() {
    let config = Config { header_shadow_px: -8.0, ..Config::default() };
    assert!(config.validate().is_err());
}
