//! Field Focus Decoration

use web_sys::Document;

use crate::dom::{self, listen, set_class};
use crate::error::Result;
use crate::validator::FormField;

const FOCUS_SELECTOR: &str =
    "input[type=\"text\"], input[type=\"url\"], input[type=\"password\"], textarea, select";

pub fn has_value(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Focus and has-value classes on text-like fields
pub fn enhance_focus_states(document: &Document) -> Result<usize> {
    let mut count = 0;
    for element in dom::query_document(document, FOCUS_SELECTOR)? {
        let Some(field) = FormField::from_element(element) else {
            continue;
        };
        sync_has_value(&field);

        let focused = field.clone();
        listen(field.element(), "focus", move |_| set_focused(&focused, true))?;
        let blurred = field.clone();
        listen(field.element(), "blur", move |_| set_focused(&blurred, false))?;
        let typed = field.clone();
        listen(field.element(), "input", move |_| sync_has_value(&typed))?;
        count += 1;
    }
    Ok(count)
}

fn set_focused(field: &FormField, focused: bool) {
    let element = field.element();
    set_class(element, "input-focused", focused);
    let Some(parent) = element.parent_element() else {
        return;
    };
    set_class(&parent, "field-focused", focused);
    if let Ok(Some(label)) = parent.query_selector("label") {
        set_class(&label, "label-focused", focused);
    }
}

fn sync_has_value(field: &FormField) {
    set_class(field.element(), "has-value", has_value(&field.value()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_value() {
        assert!(!has_value(""));
        assert!(!has_value("  \n"));
        assert!(has_value(" x "));
    }
}
