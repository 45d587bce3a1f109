//! Flash Message Decoration
//!
//! Kind icon in front, close button at the end.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::dom::{self, listen};
use crate::error::{EnhanceError, Result};

const ENHANCED_CLASS: &str = "flash-enhanced";
/// Matches the stylesheet's fade-out transition
const FADE_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
    Warning,
    Info,
}

impl FlashKind {
    pub fn from_class_name(class_name: &str) -> Self {
        let has = |wanted: &str| class_name.split_whitespace().any(|class| class == wanted);
        if has("flash-success") {
            FlashKind::Success
        } else if has("flash-error") {
            FlashKind::Error
        } else if has("flash-warning") {
            FlashKind::Warning
        } else {
            FlashKind::Info
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            FlashKind::Success => "fas fa-check-circle",
            FlashKind::Error => "fas fa-exclamation-triangle",
            FlashKind::Warning => "fas fa-exclamation-circle",
            FlashKind::Info => "fas fa-info-circle",
        }
    }

    fn name(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
            FlashKind::Warning => "warning",
            FlashKind::Info => "info",
        }
    }
}

pub fn enhance_flash_messages(document: &Document) -> Result<usize> {
    let mut count = 0;
    for message in dom::query_document(document, ".flash")? {
        if message.class_list().contains(ENHANCED_CLASS) {
            continue;
        }
        message.class_list().add_1(ENHANCED_CLASS)?;
        let kind = FlashKind::from_class_name(&message.class_name());
        let document = message.owner_document().ok_or(EnhanceError::NoDocument)?;

        let icon = document.create_element("i")?;
        icon.set_class_name(&format!("{} flash-icon flash-icon-{}", kind.icon_class(), kind.name()));
        message.prepend_with_node_1(&icon)?;

        let close = document.create_element("span")?;
        close.set_class_name("flash-close");
        close.set_text_content(Some("\u{00d7}"));
        message.append_with_node_1(&close)?;

        let target = message.clone();
        listen(&close, "click", move |_| {
            let _ = target.class_list().add_1("flash-closing");
            let hidden = target.clone();
            Timeout::new(FADE_MS, move || {
                let _ = hidden.set_attribute("hidden", "");
            })
            .forget();
        })?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_classes() {
        assert_eq!(FlashKind::from_class_name("flash flash-success"), FlashKind::Success);
        assert_eq!(FlashKind::from_class_name("flash flash-error"), FlashKind::Error);
        assert_eq!(FlashKind::from_class_name("flash-warning flash"), FlashKind::Warning);
        assert_eq!(FlashKind::from_class_name("flash"), FlashKind::Info);
        assert_eq!(FlashKind::from_class_name("flash flash-successful"), FlashKind::Info);
    }

    #[test]
    fn test_icons() {
        assert_eq!(FlashKind::Success.icon_class(), "fas fa-check-circle");
        assert_eq!(FlashKind::Error.icon_class(), "fas fa-exclamation-triangle");
        assert_eq!(FlashKind::Warning.icon_class(), "fas fa-exclamation-circle");
        assert_eq!(FlashKind::Info.icon_class(), "fas fa-info-circle");
    }
}
