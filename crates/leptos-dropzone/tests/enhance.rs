//! Browser tests for drop zone enhancement.
//! Run with `wasm-pack test --headless --firefox crates/leptos-dropzone`.

#![cfg(target_arch = "wasm32")]

use leptos_dropzone::{enhance, DropZoneOptions, Enhanced, ENHANCED_CLASS};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, DragEvent, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn host() -> HtmlElement {
    let doc = document();
    let host: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    doc.body().unwrap().append_child(&host).unwrap();
    host
}

fn file_input() -> HtmlInputElement {
    let input: HtmlInputElement = document().create_element("input").unwrap().dyn_into().unwrap();
    input.set_type("file");
    input
}

fn mounted_file_input() -> (HtmlElement, HtmlInputElement) {
    let host = host();
    let input = file_input();
    host.append_child(&input).unwrap();
    (host, input)
}

#[wasm_bindgen_test]
fn enhancing_twice_wraps_once() {
    let (host, input) = mounted_file_input();
    let options = DropZoneOptions::default();

    assert_eq!(enhance(&input, &options).unwrap(), Enhanced::Wrapped);
    assert_eq!(enhance(&input, &options).unwrap(), Enhanced::AlreadyEnhanced);

    assert_eq!(host.query_selector_all(".upload-drop-zone").unwrap().length(), 1);
    assert!(input.class_list().contains(ENHANCED_CLASS));
    assert!(input.parent_element().unwrap().class_list().contains("upload-drop-zone"));
}

#[wasm_bindgen_test]
fn prompt_is_shown_until_a_file_is_selected() {
    let (host, input) = mounted_file_input();
    enhance(&input, &DropZoneOptions::default()).unwrap();

    assert_eq!(host.query_selector_all(".upload-placeholder").unwrap().length(), 1);
    assert_eq!(host.query_selector_all(".upload-preview").unwrap().length(), 0);
}

#[wasm_bindgen_test]
fn failed_enhancement_leaves_input_unmarked() {
    let input = file_input();
    let options = DropZoneOptions::default();

    // Not attached anywhere, so it cannot be wrapped
    assert!(enhance(&input, &options).is_err());
    assert!(!input.class_list().contains(ENHANCED_CLASS));

    let host = host();
    host.append_child(&input).unwrap();
    assert_eq!(enhance(&input, &options).unwrap(), Enhanced::Wrapped);
    assert_eq!(host.query_selector_all(".upload-drop-zone").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn drag_events_toggle_highlight() {
    let (_host, input) = mounted_file_input();
    enhance(&input, &DropZoneOptions::default()).unwrap();
    let zone = input.parent_element().unwrap();

    zone.dispatch_event(&DragEvent::new("dragenter").unwrap()).unwrap();
    assert!(zone.class_list().contains("dragover"));
    zone.dispatch_event(&DragEvent::new("dragover").unwrap()).unwrap();
    assert!(zone.class_list().contains("dragover"));
    zone.dispatch_event(&DragEvent::new("dragleave").unwrap()).unwrap();
    assert!(!zone.class_list().contains("dragover"));
}
