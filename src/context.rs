//! Handles passed into [`crate::init`].
//!
//! Everything a feature needs from the page is reached through
//! [`PageContext`] rather than through globals, so the entry point decides
//! which window, root element and preference store are in play.

use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::{LocalStore, MemoryStore, PreferenceStore};

#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    /// `<html>`, carrier of the theme marker.
    pub root: Element,
    pub store: Rc<dyn PreferenceStore>,
    pub config: Rc<Config>,
}

impl PageContext {
    /// Build a context from the global window, falling back to a
    /// session-only store when `localStorage` cannot be opened.
    ///
    /// # Errors
    ///
    /// [`Error::NoWindow`] / [`Error::NoDocument`] outside a browser page.
    pub fn from_global(config: Config) -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let store: Rc<dyn PreferenceStore> = match LocalStore::open(&window) {
            Ok(store) => Rc::new(store),
            Err(err) => {
                log::warn!("theme preference will not persist: {err}");
                Rc::new(MemoryStore::new())
            }
        };
        Self::new(window, store, config)
    }

    /// Build a context around an explicit store.
    ///
    /// # Errors
    ///
    /// [`Error::NoDocument`] when the window has no document or root element.
    pub fn new(window: Window, store: Rc<dyn PreferenceStore>, config: Config) -> Result<Self> {
        let document = window.document().ok_or(Error::NoDocument)?;
        let root = document.document_element().ok_or(Error::NoDocument)?;
        Ok(Self { window, document, root, store, config: Rc::new(config) })
    }
}
