//! Required Field
//!
//! DOM side of one required field: the element, its lifecycle state, and
//! the inline error node it owns.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

use super::lifecycle::{FieldEvent, FieldState, Reaction};
use super::rules::{validate, FieldKind, FieldSnapshot, Violation};
use crate::config::EnhancerConfig;
use crate::dom::{self, set_class};
use crate::error::{EnhanceError, Result};

pub const VALID_CLASS: &str = "field-valid";
pub const INVALID_CLASS: &str = "field-invalid";
pub const ERROR_CLASS: &str = "field-error";
pub const MARKER_CLASS: &str = "required-indicator";

/// Any element that carries a form value
#[derive(Clone, Debug)]
pub enum FormField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl FormField {
    pub fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(Self::TextArea(area)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlSelectElement>().ok().map(Self::Select)
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(input) => input,
            Self::TextArea(area) => area,
            Self::Select(select) => select,
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
            Self::Select(select) => select.value(),
        }
    }

    pub fn required(&self) -> bool {
        match self {
            Self::Input(input) => input.required(),
            Self::TextArea(area) => area.required(),
            Self::Select(select) => select.required(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Input(input) => FieldKind::from_input_type(&input.type_()),
            Self::TextArea(_) | Self::Select(_) => FieldKind::Text,
        }
    }

    /// Labels pointing at the field; falls back to the first `<label>` in
    /// the field's parent for templates that do not use `for=`.
    pub fn labels(&self) -> Vec<Element> {
        let list: Option<NodeList> = match self {
            Self::Input(input) => input.labels(),
            Self::TextArea(area) => Some(area.labels()),
            Self::Select(select) => Some(select.labels()),
        };
        let labels = list.map(|list| dom::elements(&list)).unwrap_or_default();
        if !labels.is_empty() {
            return labels;
        }
        self.element()
            .parent_element()
            .and_then(|parent| parent.query_selector("label").ok().flatten())
            .into_iter()
            .collect()
    }

    pub fn validate(&self) -> Result<(), Violation> {
        let value = self.value();
        validate(&FieldSnapshot {
            value: &value,
            required: self.required(),
            kind: self.kind(),
        })
    }
}

/// Whether a label still needs the required marker appended
pub fn label_needs_marker(has_indicator: bool, label_text: &str, marker: &str) -> bool {
    !has_indicator && !label_text.trim_end().ends_with(marker)
}

/// A required field wired for validation
pub struct RequiredField {
    field: FormField,
    state: RefCell<FieldState>,
    error_node: RefCell<Option<Element>>,
    config: Rc<EnhancerConfig>,
}

impl RequiredField {
    pub fn new(field: FormField, config: Rc<EnhancerConfig>) -> Self {
        Self {
            field,
            state: RefCell::new(FieldState::default()),
            error_node: RefCell::new(None),
            config,
        }
    }

    pub fn element(&self) -> &HtmlElement {
        self.field.element()
    }

    /// Entry point for every field event; returns the validity when the
    /// event triggered a validation run
    pub fn handle(&self, event: FieldEvent) -> Option<bool> {
        let reaction = self.state.borrow_mut().react(event);
        match reaction {
            Reaction::Nothing => None,
            Reaction::Validate => Some(self.refresh().is_ok()),
        }
    }

    /// Submit-time check: counts as a visit and always validates
    pub fn check_for_submit(&self) -> Result<(), Violation> {
        self.state.borrow_mut().react(FieldEvent::Submit);
        self.refresh()
    }

    /// Validate and bring classes and the inline error in line
    pub fn refresh(&self) -> Result<(), Violation> {
        let verdict = self.field.validate();
        let changed = self.state.borrow_mut().record(verdict);
        if changed {
            log::debug!("[Validator] {:?} is now {:?}", self.element().id(), verdict);
        }
        self.present(verdict);
        verdict
    }

    pub fn focus(&self) {
        let _ = self.element().focus();
    }

    fn present(&self, verdict: Result<(), Violation>) {
        let element = self.element();
        set_class(element, VALID_CLASS, verdict.is_ok());
        set_class(element, INVALID_CLASS, verdict.is_err());

        if let Some(old) = self.error_node.borrow_mut().take() {
            old.remove();
        }
        if let Err(violation) = verdict {
            match self.insert_error(violation.message(&self.config.messages)) {
                Ok(node) => *self.error_node.borrow_mut() = Some(node),
                Err(err) => log::warn!("[Validator] Could not show inline error: {}", err),
            }
        }
    }

    fn insert_error(&self, message: &str) -> Result<Element> {
        let element = self.element();
        let document = element.owner_document().ok_or(EnhanceError::NoDocument)?;
        let node = document.create_element("div")?;
        node.set_class_name(ERROR_CLASS);
        node.set_text_content(Some(message));
        element.after_with_node_1(&node)?;
        Ok(node)
    }

    /// Append the required marker to each label, at most once
    pub fn mark_labels(&self) -> Result<()> {
        let marker = &self.config.required_marker;
        for label in self.field.labels() {
            let has_indicator = label.query_selector(&format!(".{}", MARKER_CLASS))?.is_some();
            let text = label.text_content().unwrap_or_default();
            if !label_needs_marker(has_indicator, &text, marker) {
                continue;
            }
            let document = label.owner_document().ok_or(EnhanceError::NoDocument)?;
            let span = document.create_element("span")?;
            span.set_class_name(MARKER_CLASS);
            span.set_text_content(Some(marker));
            label.append_with_str_1(" ")?;
            label.append_with_node_1(&span)?;
        }
        Ok(())
    }
}
