//! Button Decoration
//!
//! Icon hover effect on action buttons, and the loading indicator shown on
//! submit buttons while a form posts.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement};

use crate::config::EnhancerConfig;
use crate::dom::{self, listen, set_class};
use crate::error::{EnhanceError, Result};

const LOADING_CLASS: &str = "is-loading";

pub fn enhance_button_icons(document: &Document) -> Result<usize> {
    let buttons = dom::query_document(document, ".btn, .btn-small")?;
    for button in &buttons {
        let entered = button.clone();
        listen(button, "mouseenter", move |_| {
            if let Ok(Some(icon)) = entered.query_selector("i") {
                set_class(&icon, "icon-pop", true);
            }
        })?;
        let left = button.clone();
        listen(button, "mouseleave", move |_| {
            if let Ok(Some(icon)) = left.query_selector("i") {
                set_class(&icon, "icon-pop", false);
            }
        })?;
    }
    Ok(buttons.len())
}

/// Loading bookkeeping for one submit button
#[derive(Debug, Default)]
pub struct LoadingState {
    original_html: Option<String>,
}

impl LoadingState {
    /// Enter the loading state, remembering the button's markup.
    /// Returns false when already loading.
    pub fn begin(&mut self, current_html: String) -> bool {
        if self.original_html.is_some() {
            return false;
        }
        self.original_html = Some(current_html);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.original_html.is_some()
    }

    /// Leave the loading state, handing back the markup to restore
    pub fn finish(&mut self) -> Option<String> {
        self.original_html.take()
    }
}

/// Timer delay in milliseconds, saturating at `u32::MAX`
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Show a spinner on the submit button of each non-excluded form.
///
/// Must be attached after the submit guard so that blocked submits, which
/// are already default-prevented, are skipped.
pub fn attach_loading_indicators(document: &Document, config: &Rc<EnhancerConfig>) -> Result<usize> {
    let mut count = 0;
    for form in dom::query_typed::<HtmlFormElement>(document, "form")? {
        if config.is_excluded_form(&form.class_name()) {
            continue;
        }
        let Some(button) = form
            .query_selector("button[type=\"submit\"]")?
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
        else {
            continue;
        };

        let state = Rc::new(RefCell::new(LoadingState::default()));
        let config = Rc::clone(config);
        listen(&form, "submit", move |ev| {
            if ev.default_prevented() {
                return;
            }
            if let Err(err) = show_loading(&button, &state, &config) {
                log::warn!("[Buttons] Could not show loading state: {}", err);
            }
        })?;
        count += 1;
    }
    Ok(count)
}

fn show_loading(
    button: &HtmlButtonElement,
    state: &Rc<RefCell<LoadingState>>,
    config: &EnhancerConfig,
) -> Result<()> {
    if !state.borrow_mut().begin(button.inner_html()) {
        return Ok(());
    }
    let document = button.owner_document().ok_or(EnhanceError::NoDocument)?;
    let spinner = document.create_element("i")?;
    spinner.set_class_name("fas fa-spinner fa-spin");
    button.set_inner_html("");
    button.append_with_node_1(&spinner)?;
    button.append_with_str_1(&format!(" {}", config.loading_label))?;
    button.set_disabled(true);
    set_class(button, LOADING_CLASS, true);

    // Best effort only: the timer cannot tell whether the request finished,
    // it just gives the button back if the page is still here.
    let restore = button.clone();
    let restore_state = Rc::clone(state);
    Timeout::new(timeout_millis(config.loading_revert()), move || {
        if let Some(html) = restore_state.borrow_mut().finish() {
            restore.set_inner_html(&html);
            restore.set_disabled(false);
            set_class(&restore, LOADING_CLASS, false);
        }
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_round_trip() {
        let mut state = LoadingState::default();
        assert!(!state.is_loading());
        assert!(state.begin("<i class=\"fas fa-save\"></i> Save".to_string()));
        assert!(state.is_loading());
        assert!(!state.begin("spinner markup".to_string()));
        assert_eq!(state.finish().as_deref(), Some("<i class=\"fas fa-save\"></i> Save"));
        assert_eq!(state.finish(), None);
    }

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_secs(15)), 15_000);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
    }
}
