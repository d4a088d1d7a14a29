//! Crate error type.
//!
//! Browser calls surface failures as thrown `JsValue`s. They are converted
//! here into typed variants carrying the failing operation so feature wiring
//! can propagate with `?` and `init` can log and move on.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom operation `{op}` failed: {detail}")]
    Dom { op: &'static str, detail: String },
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("storage operation `{op}` failed: {detail}")]
    Storage { op: &'static str, detail: String },
    #[error("invalid config: {0}")]
    Config(String),
}

impl Error {
    /// Wrap a thrown DOM exception.
    pub fn dom(op: &'static str, value: &JsValue) -> Self {
        Self::Dom { op, detail: describe(value) }
    }

    /// Wrap a thrown `Storage` exception.
    pub fn storage(op: &'static str, value: &JsValue) -> Self {
        Self::Storage { op, detail: describe(value) }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
