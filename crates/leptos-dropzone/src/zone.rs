//! Drop Zone Enhancement
//!
//! Turns a native file input into a drag-and-drop target with a live
//! thumbnail of the selected file.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DragEvent, Event, EventInit, HtmlElement, HtmlInputElement, Node};

use crate::panel::DropZonePanel;
use crate::reader::read_as_data_url;
use crate::state::{DragKind, PanelContent, ZoneState};

/// Marker class put on inputs that already sit inside a zone
pub const ENHANCED_CLASS: &str = "dropzone-enhanced";
const ZONE_CLASS: &str = "upload-drop-zone";
const PANEL_CLASS: &str = "upload-drop-zone-panel";
const DRAGOVER_CLASS: &str = "dragover";

/// Drop zone settings
#[derive(Clone, Debug)]
pub struct DropZoneOptions {
    /// Prompt shown until a file is selected
    pub prompt: String,
}

impl Default for DropZoneOptions {
    fn default() -> Self {
        Self {
            prompt: "Drop an image here, or click to select".to_string(),
        }
    }
}

/// Result of an [`enhance`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enhanced {
    Wrapped,
    AlreadyEnhanced,
}

/// Whether a class attribute carries the enhancement marker
pub fn is_enhanced(class_name: &str) -> bool {
    class_name.split_whitespace().any(|class| class == ENHANCED_CLASS)
}

/// One enhanced input. Owned by its own listeners and alive until unload.
struct DropZone {
    input: HtmlInputElement,
    zone: HtmlElement,
    state: RefCell<ZoneState>,
    content: ArcRwSignal<PanelContent>,
}

impl DropZone {
    fn on_drag(&self, ev: &DragEvent, kind: DragKind) {
        // Without this the browser navigates to the dropped file
        ev.prevent_default();
        ev.stop_propagation();

        let highlighted = self.state.borrow_mut().drag(kind);
        let classes = self.zone.class_list();
        let _ = if highlighted {
            classes.add_1(DRAGOVER_CLASS)
        } else {
            classes.remove_1(DRAGOVER_CLASS)
        };

        if kind == DragKind::Drop {
            self.on_drop(ev);
        }
    }

    /// Hand dropped files to the input and announce them with a `change`
    /// event, so drop and picker selections look the same to every listener.
    fn on_drop(&self, ev: &DragEvent) {
        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() == 0 {
            return;
        }
        self.input.set_files(Some(&files));

        let init = EventInit::new();
        init.set_bubbles(true);
        match Event::new_with_event_init_dict("change", &init) {
            Ok(change) => {
                let _ = self.input.dispatch_event(&change);
            }
            Err(err) => log::warn!("[DropZone] Could not dispatch change: {:?}", err),
        }
    }

    fn on_file_selected(zone: &Rc<Self>) {
        // Only the first file is previewed
        let Some(file) = zone.input.files().and_then(|files| files.get(0)) else {
            // Picker cancelled or input reset: nothing is selected any more
            zone.state.borrow_mut().clear();
            zone.publish();
            return;
        };
        let ticket = zone.state.borrow_mut().select(file.name());
        zone.publish();

        let zone = Rc::clone(zone);
        wasm_bindgen_futures::spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => {
                    let fresh = zone.state.borrow_mut().complete(ticket, data_url);
                    if fresh {
                        zone.publish();
                    } else {
                        log::debug!("[DropZone] Discarded stale preview of {}", file.name());
                    }
                }
                Err(err) => log::warn!("[DropZone] Could not read {}: {:?}", file.name(), err),
            }
        });
    }

    fn open_picker(&self, ev: &Event) {
        // Clicks on the input itself already open the picker
        let on_input = ev
            .target()
            .map(|target| JsValue::from(target) == JsValue::from(self.input.clone()))
            .unwrap_or(false);
        if !on_input {
            self.input.click();
        }
    }

    fn publish(&self) {
        let content = self.state.borrow().content().clone();
        self.content.set(content);
    }
}

/// Wrap `input` in a drop zone.
///
/// Idempotent: inputs carrying [`ENHANCED_CLASS`] are left alone, so the
/// page can be rescanned after dynamic changes.
pub fn enhance(input: &HtmlInputElement, options: &DropZoneOptions) -> Result<Enhanced, JsValue> {
    if is_enhanced(&input.class_name()) {
        return Ok(Enhanced::AlreadyEnhanced);
    }
    let document = input
        .owner_document()
        .ok_or_else(|| JsValue::from_str("file input has no owner document"))?;
    let parent = input
        .parent_node()
        .ok_or_else(|| JsValue::from_str("file input is not attached"))?;
    let zone: HtmlElement = document.create_element("div")?.dyn_into()?;
    zone.set_class_name(ZONE_CLASS);
    let input_node: &Node = input.as_ref();
    parent.insert_before(&zone, Some(input_node))?;
    zone.append_child(input)?;

    let panel: HtmlElement = document.create_element("div")?.dyn_into()?;
    panel.set_class_name(PANEL_CLASS);
    zone.append_child(&panel)?;

    let content = ArcRwSignal::new(PanelContent::default());
    let panel_content = content.clone();
    let prompt = options.prompt.clone();
    leptos::mount::mount_to(panel, move || {
        view! { <DropZonePanel content=panel_content prompt=prompt /> }
    })
    .forget();

    let drop_zone = Rc::new(DropZone {
        input: input.clone(),
        zone,
        state: RefCell::new(ZoneState::new()),
        content,
    });

    for kind in DragKind::ALL {
        let dz = Rc::clone(&drop_zone);
        let on_drag = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
            dz.on_drag(&ev, kind);
        });
        drop_zone
            .zone
            .add_event_listener_with_callback(kind.event_type(), on_drag.as_ref().unchecked_ref())?;
        on_drag.forget();
    }

    let dz = Rc::clone(&drop_zone);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| dz.open_picker(&ev));
    drop_zone
        .zone
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let dz = Rc::clone(&drop_zone);
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| DropZone::on_file_selected(&dz));
    drop_zone
        .input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    // Marked last, so a failure above leaves the input eligible for a rescan
    drop_zone.input.class_list().add_1(ENHANCED_CLASS)?;
    log::debug!("[DropZone] Enhanced file input {:?}", drop_zone.input.name());
    Ok(Enhanced::Wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_detection() {
        assert!(!is_enhanced(""));
        assert!(!is_enhanced("form-control"));
        assert!(!is_enhanced("dropzone-enhanced-x"));
        assert!(is_enhanced("dropzone-enhanced"));
        assert!(is_enhanced("form-control  dropzone-enhanced"));
    }

    #[test]
    fn test_default_prompt() {
        assert_eq!(DropZoneOptions::default().prompt, "Drop an image here, or click to select");
    }
}
