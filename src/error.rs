//! Error Types
//!
//! Failures of the enhancement passes themselves. Validation failures are
//! not errors; the validator reports them as plain values.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("HTTP status {0}")]
    Http(u16),

    #[error("decode error: {0}")]
    Decode(#[from] serde_wasm_bindgen::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{:?}", value));
        EnhanceError::Dom(message)
    }
}

pub type Result<T, E = EnhanceError> = std::result::Result<T, E>;
