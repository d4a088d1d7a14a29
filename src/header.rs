//! Header shadow that appears once the page is scrolled.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::consts::{SHADOW_NONE, SHADOW_PROPERTY, SHADOW_VALUE};
use crate::context::PageContext;
use crate::dom;
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Decides whether the shadow is shown for a scroll offset.
///
/// With `release_px == engage_px` this is a hard boundary at `engage_px`.
/// A lower `release_px` keeps an engaged shadow until the offset falls to it.
/// The release point is clamped into `[0, engage_px]` so the top of the page
/// always clears the shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollShadow {
    engage_px: f64,
    release_px: f64,
    shown: bool,
}

impl ScrollShadow {
    #[must_use]
    pub fn new(engage_px: f64, release_px: f64) -> Self {
        let floor = engage_px.min(0.0);
        Self { engage_px, release_px: release_px.min(engage_px).max(floor), shown: false }
    }

    #[must_use]
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Feed the current vertical offset, returning whether the shadow shows.
    pub fn update(&mut self, offset_px: f64) -> bool {
        let limit = if self.shown { self.release_px } else { self.engage_px };
        self.shown = offset_px > limit;
        self.shown
    }
}

/// Write the shadow style on the header.
///
/// # Errors
///
/// Returns [`Error::Dom`] when the style property cannot be set.
pub fn paint(header: &HtmlElement, shown: bool) -> Result<()> {
    let value = if shown { SHADOW_VALUE } else { SHADOW_NONE };
    header
        .style()
        .set_property(SHADOW_PROPERTY, value)
        .map_err(|err| Error::dom("style.setProperty", &err))
}

/// Run the first paint, and only subscribe to scroll updates once it worked.
///
/// # Errors
///
/// Returns the first failure of `paint` or `subscribe`.
pub fn paint_then_subscribe<P, S>(paint: P, subscribe: S) -> Result<()>
where
    P: FnOnce() -> Result<()>,
    S: FnOnce() -> Result<()>,
{
    paint()?;
    subscribe()
}

fn refresh(window: &Window, header: &HtmlElement, shadow: &RefCell<ScrollShadow>) -> Result<()> {
    let offset = window.scroll_y().map_err(|err| Error::dom("scrollY", &err))?;
    let shown = shadow.borrow_mut().update(offset);
    paint(header, shown)
}

/// Paint the shadow for the current offset, then on every scroll.
///
/// # Errors
///
/// Returns DOM failures from the lookup, the first paint, or listener
/// registration. A failed first paint leaves no listener behind.
pub fn wire(ctx: &PageContext) -> Result<()> {
    let Some(header) = dom::query(&ctx.document, &ctx.config.header_selector)? else {
        log::debug!("no {} element, header shadow disabled", ctx.config.header_selector);
        return Ok(());
    };
    let Ok(header) = header.dyn_into::<HtmlElement>() else {
        log::debug!("{} is not an HTML element, header shadow disabled", ctx.config.header_selector);
        return Ok(());
    };

    let shadow = Rc::new(RefCell::new(ScrollShadow::new(
        ctx.config.header_shadow_px,
        ctx.config.header_release_px(),
    )));

    let window = ctx.window.clone();
    paint_then_subscribe(
        || refresh(&ctx.window, &header, &shadow),
        || {
            let on_scroll_header = header.clone();
            let on_scroll_shadow = Rc::clone(&shadow);
            dom::listen_with(&ctx.window, "scroll", &dom::passive(), move |_| {
                if let Err(err) = refresh(&window, &on_scroll_header, &on_scroll_shadow) {
                    log::warn!("header shadow update failed: {err}");
                }
            })
        },
    )
}
