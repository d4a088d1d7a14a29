//! Shared constants: markup contract, storage key, and timing defaults.

// ── Markup contract ─────────────────────────────────────────────

/// Page header that receives the scroll shadow.
pub const HEADER_SELECTOR: &str = ".site-header";

/// Button that opens and closes the mobile navigation.
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";

/// Id of the collapsible navigation container.
pub const NAV_CONTAINER_ID: &str = "site-nav";

/// Id of the footer placeholder that shows the current year.
pub const YEAR_ID: &str = "year";

/// Id of the light/dark theme button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Statistics block watched for visibility, tried in order.
pub const STATS_CONTAINER_SELECTORS: [&str; 2] = [".hero .stats", ".stats"];

/// Figures animated by the count-up.
pub const STAT_NUMBER_SELECTOR: &str = ".stats .num";

/// Id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

// ── Attributes and classes ──────────────────────────────────────

pub const NAV_OPEN_CLASS: &str = "open";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// `dataset` key (`data-animated`) marking a figure as already animated.
pub const ANIMATED_DATA_KEY: &str = "animated";

pub const SHADOW_PROPERTY: &str = "box-shadow";
pub const SHADOW_VALUE: &str = "var(--shadow)";
pub const SHADOW_NONE: &str = "none";

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding `light` or `dark`.
pub const THEME_STORAGE_KEY: &str = "teacher-portfolio-theme";

// ── Timing and thresholds ───────────────────────────────────────

/// Scroll offset in pixels above which the header shadow is shown.
pub const HEADER_SHADOW_PX: f64 = 8.0;

/// Count-up duration in milliseconds.
pub const COUNT_UP_DURATION_MS: f64 = 1400.0;

/// Visible fraction of the statistics block that triggers the count-up.
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.25;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
