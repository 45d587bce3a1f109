//! Form Wiring
//!
//! Hooks required fields and the submit guard onto server-rendered forms.

use std::rc::Rc;

use web_sys::{
    Document, Element, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::field::{FormField, RequiredField};
use super::lifecycle::{FieldEvent, SubmitDecision};
use crate::config::EnhancerConfig;
use crate::dom::{self, listen};
use crate::error::{EnhanceError, Result};

pub const BANNER_CLASS: &str = "form-global-error";

/// Wire every eligible form in the document; returns how many were wired
pub fn enhance_forms(document: &Document, config: &Rc<EnhancerConfig>) -> Result<usize> {
    let mut wired = 0;
    for form in dom::query_typed::<HtmlFormElement>(document, "form")? {
        let fields = attach_required_field_behaviors(&form, config)?;
        if fields.is_empty() {
            continue;
        }
        attach_submit_guard(&form, fields, config)?;
        wired += 1;
    }
    log::info!("[Validator] Wired {} form(s)", wired);
    Ok(wired)
}

/// Hook focus/blur/input handling onto each required field of `form`.
///
/// Excluded forms (search and inline forms by default) get nothing and an
/// empty list comes back.
pub fn attach_required_field_behaviors(
    form: &HtmlFormElement,
    config: &Rc<EnhancerConfig>,
) -> Result<Vec<Rc<RequiredField>>> {
    if config.is_excluded_form(&form.class_name()) {
        return Ok(Vec::new());
    }

    let mut fields = Vec::new();
    for element in dom::query_all(form, "[required]")? {
        let Some(field) = FormField::from_element(element) else {
            continue;
        };
        let field = Rc::new(RequiredField::new(field, Rc::clone(config)));
        if let Err(err) = field.mark_labels() {
            log::warn!("[Validator] Could not mark label: {}", err);
        }

        for event in FieldEvent::LISTENED {
            let handler_field = Rc::clone(&field);
            listen(field.element(), event.event_type(), move |_| {
                handler_field.handle(event);
            })?;
        }
        fields.push(field);
    }
    Ok(fields)
}

/// Block submission while any required field is invalid
pub fn attach_submit_guard(
    form: &HtmlFormElement,
    fields: Vec<Rc<RequiredField>>,
    config: &Rc<EnhancerConfig>,
) -> Result<()> {
    let target = form.clone();
    let config = Rc::clone(config);
    listen(form, "submit", move |ev| {
        // Every field is refreshed, not just the first failing one
        let verdicts: Vec<_> = fields
            .iter()
            .map(|field| field.check_for_submit())
            .collect();

        match SubmitDecision::from_verdicts(&verdicts) {
            SubmitDecision::Allow => clear_form_error(&target),
            SubmitDecision::Block { focus } => {
                ev.prevent_default();
                fields[focus].focus();
                if let Err(err) = show_form_error(&target, &config.messages.form_error) {
                    log::warn!("[Validator] Could not show form error: {}", err);
                }
            }
        }
    })
}

/// Replace any existing banner of `form` with a new one and scroll to it
pub fn show_form_error(form: &HtmlFormElement, message: &str) -> Result<Element> {
    clear_form_error(form);

    let document = form.owner_document().ok_or(EnhanceError::NoDocument)?;
    let banner = document.create_element("div")?;
    banner.set_class_name(BANNER_CLASS);
    banner.set_text_content(Some(message));
    form.prepend_with_node_1(&banner)?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    banner.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(banner)
}

pub fn clear_form_error(form: &HtmlFormElement) {
    let selector = format!(".{}", BANNER_CLASS);
    if let Ok(banners) = dom::query_all(form, &selector) {
        for banner in banners {
            banner.remove();
        }
    }
}
