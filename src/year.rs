//! Footer copyright year, stamped once at load.

use crate::context::PageContext;
use crate::error::Result;

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// Text shown in the footer placeholder.
#[must_use]
pub fn year_text(year: u32) -> String {
    format!("{year:04}")
}

/// Calendar year from the browser clock.
#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Stamp the current year into the footer placeholder, if present.
///
/// # Errors
///
/// Never fails today; returns `Result` to match the other feature hooks.
pub fn wire(ctx: &PageContext) -> Result<()> {
    match ctx.document.get_element_by_id(&ctx.config.year_id) {
        Some(el) => el.set_text_content(Some(&year_text(current_year()))),
        None => log::debug!("no #{} element, footer year skipped", ctx.config.year_id),
    }
    Ok(())
}
