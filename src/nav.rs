//! Collapsible mobile navigation.
//!
//! The open state lives in the container's `open` class and is mirrored into
//! `aria-expanded` on the toggle control. Any link click inside the container
//! closes the menu so picking a destination also dismisses it.

use std::rc::Rc;

use web_sys::Element;

use crate::consts::{ARIA_EXPANDED, NAV_OPEN_CLASS};
use crate::context::PageContext;
use crate::dom;
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    #[must_use]
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Value for the `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Presentation of the menu: where the state is read from and written to.
pub trait NavView {
    fn state(&self) -> NavState;

    /// # Errors
    ///
    /// Returns an error when the class or attribute cannot be written.
    fn render(&self, state: NavState) -> Result<()>;
}

/// Toggle control plus the container it opens.
pub struct DomNav {
    control: Element,
    container: Element,
}

impl DomNav {
    #[must_use]
    pub fn new(control: Element, container: Element) -> Self {
        Self { control, container }
    }
}

impl NavView for DomNav {
    fn state(&self) -> NavState {
        NavState { open: self.container.class_list().contains(NAV_OPEN_CLASS) }
    }

    fn render(&self, state: NavState) -> Result<()> {
        let classes = self.container.class_list();
        let written = if state.open { classes.add_1(NAV_OPEN_CLASS) } else { classes.remove_1(NAV_OPEN_CLASS) };
        written.map_err(|err| Error::dom("classList", &err))?;
        self.control
            .set_attribute(ARIA_EXPANDED, state.aria_expanded())
            .map_err(|err| Error::dom("setAttribute", &err))
    }
}

/// Flip the menu once.
///
/// # Errors
///
/// Propagates [`NavView::render`] failures.
pub fn toggle(view: &impl NavView) -> Result<NavState> {
    let next = view.state().toggled();
    view.render(next)?;
    Ok(next)
}

/// Force the menu closed.
///
/// # Errors
///
/// Propagates [`NavView::render`] failures.
pub fn close(view: &impl NavView) -> Result<NavState> {
    let next = NavState::closed();
    view.render(next)?;
    Ok(next)
}

/// Wire the toggle control and every link inside the container.
///
/// # Errors
///
/// Returns DOM failures from lookups or listener registration.
pub fn wire(ctx: &PageContext) -> Result<()> {
    let control = dom::query(&ctx.document, &ctx.config.nav_toggle_selector)?;
    let container = ctx.document.get_element_by_id(&ctx.config.nav_container_id);
    let (Some(control), Some(container)) = (control, container) else {
        log::debug!("navigation toggle or container missing, mobile nav disabled");
        return Ok(());
    };

    let links = dom::query_all_in(&container, "a")?;
    let nav = Rc::new(DomNav::new(control.clone(), container));

    let on_toggle = Rc::clone(&nav);
    dom::listen(&control, "click", move |_| {
        if let Err(err) = toggle(on_toggle.as_ref()) {
            log::warn!("navigation toggle failed: {err}");
        }
    })?;

    for link in links {
        let on_link = Rc::clone(&nav);
        dom::listen(&link, "click", move |_| {
            if let Err(err) = close(on_link.as_ref()) {
                log::warn!("closing navigation failed: {err}");
            }
        })?;
    }
    Ok(())
}
