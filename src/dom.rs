//! DOM Helpers
//!
//! Thin wrappers for the lookups and listener plumbing every pass needs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, NodeList};

use crate::error::{EnhanceError, Result};

pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(EnhanceError::NoWindow)?
        .document()
        .ok_or(EnhanceError::NoDocument)
}

/// Elements of a node list, in document order
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(&root.query_selector_all(selector)?))
}

pub fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Elements matching `selector` that are also of type `T`
pub fn query_typed<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>> {
    Ok(query_document(document, selector)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<T>().ok())
        .collect())
}

/// Attach `handler` to `target` for the rest of the page's life
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}
