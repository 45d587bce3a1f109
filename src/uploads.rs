//! Upload Enhancement
//!
//! Finds file inputs and turns them into drop zones, now and whenever new
//! content is inserted into the page.

use std::fmt::Debug;

use leptos_dropzone::{DropZoneOptions, Enhanced};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, MutationObserver, MutationObserverInit, MutationRecord};

use crate::dom;
use crate::error::{EnhanceError, Result};

const FILE_INPUT_SELECTOR: &str = "input[type=\"file\"]";

/// Run `enhance` on each item; failures are logged and skipped.
/// Returns how many items were newly wrapped.
fn enhance_each<T, E, F>(items: impl IntoIterator<Item = T>, mut enhance: F) -> usize
where
    E: Debug,
    F: FnMut(&T) -> std::result::Result<Enhanced, E>,
{
    let mut wrapped = 0;
    for item in items {
        match enhance(&item) {
            Ok(Enhanced::Wrapped) => wrapped += 1,
            Ok(Enhanced::AlreadyEnhanced) => {}
            Err(err) => log::warn!("[Uploads] Skipping file input: {:?}", err),
        }
    }
    wrapped
}

/// Enhance every file input not yet inside a zone; returns how many were new
pub fn enhance_file_inputs(document: &Document, options: &DropZoneOptions) -> Result<usize> {
    let inputs = dom::query_typed::<HtmlInputElement>(document, FILE_INPUT_SELECTOR)?;
    Ok(enhance_each(inputs, |input| leptos_dropzone::enhance(input, options)))
}

/// Rescan for file inputs whenever nodes are added under `<body>`.
/// Relies on enhancement being idempotent.
pub fn watch_for_new_inputs(document: &Document, options: DropZoneOptions) -> Result<()> {
    let body = document.body().ok_or(EnhanceError::NoBody)?;
    let scan_document = document.clone();

    let on_mutation = Closure::<dyn FnMut(js_sys::Array)>::new(move |records: js_sys::Array| {
        let added_nodes = records.iter().any(|record| {
            record
                .dyn_into::<MutationRecord>()
                .map(|record| record.added_nodes().length() > 0)
                .unwrap_or(false)
        });
        if !added_nodes {
            return;
        }
        match enhance_file_inputs(&scan_document, &options) {
            Ok(0) => {}
            Ok(wrapped) => log::debug!("[Uploads] Enhanced {} new file input(s)", wrapped),
            Err(err) => log::warn!("[Uploads] Rescan failed: {}", err),
        }
    });

    let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    observer.observe_with_options(&body, &init)?;
    on_mutation.forget();
    Ok(())
}
