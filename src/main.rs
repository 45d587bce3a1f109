//! Form Enhancer Entry Point
//!
//! Loaded by server-rendered pages. Runs every enhancement pass once the
//! document has been parsed; after that everything is event driven.

mod config;
mod decorations;
mod diagnostics;
mod dom;
mod error;
mod uploads;
mod validator;

use std::rc::Rc;

use leptos_dropzone::DropZoneOptions;
use web_sys::Document;

use config::EnhancerConfig;
use error::Result;

fn main() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&format!("[FormEnhancer] {}", err).into());
            return;
        }
    };

    let (config, config_error) = match EnhancerConfig::read(&document) {
        Ok(config) => (config, None),
        Err(err) => (EnhancerConfig::default(), Some(err)),
    };
    if let Err(err) = rolling_logger::init(config.log_level(), config.log_capacity) {
        web_sys::console::warn_1(&format!("[FormEnhancer] Logger already set: {}", err).into());
    }
    if let Some(err) = config_error {
        log::warn!("[Config] Ignoring page config: {}", err);
    }
    let config = Rc::new(config);

    if still_parsing(&document.ready_state()) {
        let ready_document = document.clone();
        let result = dom::listen(&document, "DOMContentLoaded", move |_| {
            enhance_page(&ready_document, &config);
        });
        if let Err(err) = result {
            log::error!("[FormEnhancer] Could not wait for DOMContentLoaded: {}", err);
        }
    } else {
        enhance_page(&document, &config);
    }
}

/// `document.readyState` is "loading" until the parser is done
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Run every pass. Passes are independent, so one failing does not stop
/// the rest.
fn enhance_page(document: &Document, config: &Rc<EnhancerConfig>) {
    let upload_options = DropZoneOptions {
        prompt: config.upload_prompt.clone(),
    };

    report("focus states", decorations::enhance_focus_states(document));
    // The submit guard must be attached before the loading indicators
    report("forms", validator::enhance_forms(document, config));
    report("loading indicators", decorations::attach_loading_indicators(document, config));
    report("uploads", uploads::enhance_file_inputs(document, &upload_options));
    report("upload watcher", uploads::watch_for_new_inputs(document, upload_options).map(|_| 0));
    report("flash messages", decorations::enhance_flash_messages(document));
    report("admin tables", decorations::enhance_admin_tables(document));
    report("button icons", decorations::enhance_button_icons(document));
    report("category icons", decorations::load_category_icons(document, config).map(|_| 0));
}

fn report(pass: &str, result: Result<usize>) {
    match result {
        Ok(count) => log::debug!("[FormEnhancer] {}: {} element(s)", pass, count),
        Err(err) => log::error!("[FormEnhancer] {} failed: {}", pass, err),
    }
}
