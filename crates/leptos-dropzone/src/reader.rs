//! File Reading
//!
//! `FileReader` wrapped in a promise so a read can be awaited once.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Read `file` as a base64 data URL.
///
/// Single-shot: no progress, no timeout, no cancellation.
pub async fn read_as_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let loaded = reader.clone();
        let on_load = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let failed = reader.clone();
        let on_error = Closure::once_into_js(move || {
            let error = failed.error().map(JsValue::from).unwrap_or(JsValue::NULL);
            let _ = reject.call1(&JsValue::NULL, &error);
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader.read_as_data_url(file)?;
    let result = JsFuture::from(promise).await?;
    result
        .as_string()
        .ok_or_else(|| JsValue::from_str("FileReader result is not a string"))
}
