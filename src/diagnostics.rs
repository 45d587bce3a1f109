//! Diagnostics
//!
//! Exports callable from the page, e.g. from devtools:
//! `window.wasmBindings.recentLogs()`.

use wasm_bindgen::prelude::*;

/// Recent log lines, oldest first, one per line
#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> String {
    rolling_logger::recent_lines().join("\n")
}
