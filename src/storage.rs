//! Preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme is the only value that outlives a page load. It is read and
//! written through [`PreferenceStore`] so the theme logic never touches
//! `web_sys::Storage` directly and can be exercised natively.
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` may be disabled by browser policy or throw on quota. When it
//! cannot be opened at all, the page falls back to [`MemoryStore`], which keeps
//! the preference for the session only.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// String key-value store scoped to the page origin.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// [`Error::StorageUnavailable`] when the browser reports no storage, or
    /// [`Error::Storage`] when accessing it throws (e.g. blocked cookies).
    pub fn open(window: &web_sys::Window) -> Result<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(Error::StorageUnavailable),
            Err(err) => Err(Error::storage("localStorage", &err)),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(|err| Error::storage("getItem", &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| Error::storage("setItem", &err))
    }
}

/// In-process store used when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
