//! Client-side interactivity for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. On start it
//! wires five independent behaviors onto the existing markup. Each behavior
//! degrades on its own: a missing element or a failing browser API disables
//! that one feature and leaves the rest running.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`year`] | Footer copyright year |
//! | [`nav`] | Collapsible mobile navigation |
//! | [`header`] | Header shadow on scroll |
//! | [`theme`] | Persisted light/dark theme toggle |
//! | [`stats`] | Count-up animation for hero statistics |
//! | [`frame`] | Cancelable `requestAnimationFrame` loop |
//! | [`storage`] | Preference store abstraction over `localStorage` |
//! | [`context`] | Page handles passed into [`init`] |
//! | [`config`] | Selectors, keys and timings, overridable from JSON |
//! | [`dom`] | Lookup and listener helpers |
//! | [`consts`] | Default markup contract and timings |
//! | [`error`] | Crate error type |

pub mod config;
pub mod consts;
pub mod context;
pub mod dom;
pub mod error;
pub mod frame;
pub mod header;
pub mod nav;
pub mod stats;
pub mod storage;
pub mod theme;
pub mod year;

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::context::PageContext;
use crate::error::{Error, Result};


/// A named feature hook run against a context.
pub type Feature<C> = (&'static str, fn(&C) -> Result<()>);

/// Run every feature in order. A failing feature is logged and the rest
/// still run. Returns the names of the features that failed.
pub fn run_features<C>(ctx: &C, features: &[Feature<C>]) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for (name, wire) in features {
        if let Err(err) = wire(ctx) {
            log::warn!("{name} disabled: {err}");
            failed.push(*name);
        }
    }
    failed
}

/// Wire every feature. Failures are logged per feature and never abort the
/// remaining ones.
pub fn init(ctx: &PageContext) {
    let features: [Feature<PageContext>; 5] = [
        ("footer year", year::wire),
        ("navigation", nav::wire),
        ("header shadow", header::wire),
        ("theme", theme::wire),
        ("statistics", stats::wire),
    ];
    let failed = run_features(ctx, &features);
    if !failed.is_empty() {
        log::info!("running without: {}", failed.join(", "));
    }
}

fn boot() -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;
    let config = Config::from_document(&document).unwrap_or_else(|err| {
        log::warn!("ignoring page config: {err}");
        Config::default()
    });
    let ctx = PageContext::from_global(config)?;
    init(&ctx);
    log::debug!("portfolio interactivity ready");
    Ok(())
}

fn install_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
}

/// Module start hook: read the page config, if any, and wire the page.
#[wasm_bindgen(start)]
pub fn start() {
    install_logging();
    if let Err(err) = boot() {
        log::warn!("portfolio interactivity not started: {err}");
    }
}
