//! Page Configuration
//!
//! Settings come from an optional JSON block rendered by the page template:
//!
//! ```html
//! <script type="application/json" id="form-enhancer-config">
//!   { "messages": { "required": "Ce champ est obligatoire" } }
//! </script>
//! ```
//!
//! Every field is optional; anything left out keeps its default.

use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Id of the `<script>` element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "form-enhancer-config";

/// User-facing validation texts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub required: String,
    pub invalid_url: String,
    /// Global banner shown when a submit is blocked
    pub form_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            invalid_url: "Enter a valid URL (e.g. https://example.com)".to_string(),
            form_error: "Please correct the errors in the form.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhancerConfig {
    pub messages: Messages,
    /// Forms with any of these classes never get validation or loading wiring
    pub excluded_form_classes: Vec<String>,
    /// Glyph appended to labels of required fields
    pub required_marker: String,
    pub upload_prompt: String,
    pub loading_label: String,
    /// Seconds before a loading submit button is restored
    pub loading_revert_secs: u64,
    /// Category icon map; `None` disables the fetch
    pub icons_url: Option<String>,
    pub icon_card_selector: String,
    pub icon_title_selector: String,
    pub icon_selector: String,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            excluded_form_classes: vec!["search-form".to_string(), "inline-form".to_string()],
            required_marker: "*".to_string(),
            upload_prompt: "Drop an image here, or click to select".to_string(),
            loading_label: "Processing...".to_string(),
            loading_revert_secs: 15,
            icons_url: Some("/static/categories.json".to_string()),
            icon_card_selector: ".categorie-card".to_string(),
            icon_title_selector: "h2".to_string(),
            icon_selector: ".categorie-icon i".to_string(),
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl EnhancerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config block from the page; defaults when there is none
    pub fn read(document: &Document) -> Result<Self> {
        let text = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&text)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn loading_revert(&self) -> Duration {
        Duration::from_secs(self.loading_revert_secs)
    }

    /// Whether a form with this class attribute must be left alone
    pub fn is_excluded_form(&self, class_name: &str) -> bool {
        class_name
            .split_whitespace()
            .any(|class| self.excluded_form_classes.iter().any(|excluded| excluded == class))
    }
}
