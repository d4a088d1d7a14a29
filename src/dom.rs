//! Thin `web-sys` helpers shared by the feature modules.
//!
//! Lookups return `Option` so a missing element turns into a skipped feature
//! instead of an error. Only thrown exceptions (e.g. an invalid selector from
//! a custom config) become [`Error`]s.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget};

use crate::error::{Error, Result};

/// First element matching `selector`, if any.
///
/// # Errors
///
/// Returns [`Error::Dom`] when the selector is rejected by the browser.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|err| Error::dom("querySelector", &err))
}

/// First element matching any of `selectors`, tried in order.
///
/// # Errors
///
/// Returns [`Error::Dom`] for the first rejected selector.
pub fn query_first(document: &Document, selectors: &[String]) -> Result<Option<Element>> {
    for selector in selectors {
        if let Some(el) = query(document, selector)? {
            return Ok(Some(el));
        }
    }
    Ok(None)
}

/// All elements under `scope` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`Error::Dom`] when the selector is rejected by the browser.
pub fn query_all_in(scope: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = scope
        .query_selector_all(selector)
        .map_err(|err| Error::dom("querySelectorAll", &err))?;
    Ok(collect_elements(&list))
}

/// All elements in `document` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`Error::Dom`] when the selector is rejected by the browser.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|err| Error::dom("querySelectorAll", &err))?;
    Ok(collect_elements(&list))
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach `handler` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`Error::Dom`] when the listener cannot be registered.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    listen_with(target, event, &options, handler)
}

/// Attach `handler` with explicit listener options (`passive`, `once`).
///
/// # Errors
///
/// Returns [`Error::Dom`] when the listener cannot be registered.
pub fn listen_with<F>(target: &EventTarget, event: &'static str, options: &AddEventListenerOptions, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(event, cb.as_ref().unchecked_ref(), options)
        .map_err(|err| Error::dom("addEventListener", &err))?;
    // Page-lifetime listener; the closure must outlive this frame.
    cb.forget();
    Ok(())
}

/// Passive listener options, for scroll handlers.
#[must_use]
pub fn passive() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    options
}

/// One-shot listener options.
#[must_use]
pub fn once() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    options
}
