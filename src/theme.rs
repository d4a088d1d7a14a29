//! Light/dark theme: restore on load, toggle on click, persist the choice.
//!
//! The document root carries `data-theme="light"` for the light theme and no
//! attribute at all for the dark default. Internally the state is [`Theme`];
//! strings only appear at the root attribute and in the preference store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failing store is logged and otherwise
//! ignored, so the toggle keeps working for the session.

use std::fmt;
use std::rc::Rc;

use web_sys::Element;

use crate::consts::THEME_ATTRIBUTE;
use crate::context::PageContext;
use crate::dom;
use crate::error::{Error, Result};
use crate::storage::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored or applied value. Only the exact string `light`
    /// selects [`Theme::Light`].
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element carrying the theme marker attribute.
pub trait ThemeRoot {
    fn theme_marker(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the attribute cannot be written.
    fn set_theme_marker(&self, value: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error when the attribute cannot be removed.
    fn clear_theme_marker(&self) -> Result<()>;
}

impl ThemeRoot for Element {
    fn theme_marker(&self) -> Option<String> {
        self.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_theme_marker(&self, value: &str) -> Result<()> {
        self.set_attribute(THEME_ATTRIBUTE, value)
            .map_err(|err| Error::dom("setAttribute", &err))
    }

    fn clear_theme_marker(&self) -> Result<()> {
        self.remove_attribute(THEME_ATTRIBUTE)
            .map_err(|err| Error::dom("removeAttribute", &err))
    }
}

/// Theme currently shown on `root`.
pub fn current(root: &impl ThemeRoot) -> Theme {
    Theme::from_value(root.theme_marker().as_deref())
}

/// Show `theme` on `root`.
///
/// # Errors
///
/// Propagates attribute write failures.
pub fn apply(root: &impl ThemeRoot, theme: Theme) -> Result<()> {
    match theme {
        Theme::Light => root.set_theme_marker(Theme::Light.as_str()),
        Theme::Dark => root.clear_theme_marker(),
    }
}

/// Persisted theme, or the dark default when absent, unrecognized or
/// unreadable.
pub fn load(store: &dyn PreferenceStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(value) => Theme::from_value(value.as_deref()),
        Err(err) => {
            log::warn!("reading theme preference failed: {err}");
            Theme::Dark
        }
    }
}

/// Apply the persisted theme to `root`.
///
/// # Errors
///
/// Propagates attribute write failures; store failures fall back to dark.
pub fn restore(root: &impl ThemeRoot, store: &dyn PreferenceStore, key: &str) -> Result<Theme> {
    let theme = load(store, key);
    apply(root, theme)?;
    Ok(theme)
}

/// [`restore`] for page start: a failure is logged instead of returned so the
/// toggle can still be wired.
pub fn restore_or_warn(root: &impl ThemeRoot, store: &dyn PreferenceStore, key: &str) -> Option<Theme> {
    match restore(root, store, key) {
        Ok(theme) => {
            log::debug!("theme restored: {theme}");
            Some(theme)
        }
        Err(err) => {
            log::warn!("restoring theme failed: {err}");
            None
        }
    }
}

/// Flip the theme shown on `root` and persist the new value.
///
/// # Errors
///
/// Propagates attribute write failures. A failed store write is logged and
/// the new theme stays applied for the session.
pub fn toggle(root: &impl ThemeRoot, store: &dyn PreferenceStore, key: &str) -> Result<Theme> {
    let next = current(root).toggled();
    apply(root, next)?;
    if let Err(err) = store.set(key, next.as_str()) {
        log::warn!("persisting theme preference failed: {err}");
    }
    Ok(next)
}

/// Restore the saved theme and wire the toggle button.
///
/// # Errors
///
/// Returns DOM failures from registering the click listener. A failed
/// restore is logged and the toggle is still wired.
pub fn wire(ctx: &PageContext) -> Result<()> {
    let key = ctx.config.theme_storage_key.clone();
    restore_or_warn(&ctx.root, ctx.store.as_ref(), &key);

    let Some(button) = ctx.document.get_element_by_id(&ctx.config.theme_toggle_id) else {
        log::debug!("no #{} element, theme toggle disabled", ctx.config.theme_toggle_id);
        return Ok(());
    };

    let root = ctx.root.clone();
    let store = Rc::clone(&ctx.store);
    dom::listen(&button, "click", move |_| match toggle(&root, store.as_ref(), &key) {
        Ok(next) => log::debug!("theme toggled to {next}"),
        Err(err) => log::warn!("theme toggle failed: {err}"),
    })
}
