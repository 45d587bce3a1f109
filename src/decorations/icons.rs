//! Category Icons
//!
//! Swaps default category card icons for the ones listed in a static JSON
//! map shaped like `{ "Books": { "icon": "fa-book" } }`.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response};

use crate::config::EnhancerConfig;
use crate::dom;
use crate::error::{EnhanceError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryIcon {
    pub icon: Option<String>,
}

pub type IconMap = HashMap<String, CategoryIcon>;

/// Icon class for a card title, if the map has one
pub fn icon_class_for(map: &IconMap, title: &str) -> Option<String> {
    map.get(title.trim())?
        .icon
        .as_deref()
        .map(str::trim)
        .filter(|icon| !icon.is_empty())
        .map(|icon| format!("fas {}", icon))
}

async fn fetch_icon_map(url: &str) -> Result<IconMap> {
    let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
    let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    if !response.ok() {
        return Err(EnhanceError::Http(response.status()));
    }
    let json = JsFuture::from(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

fn apply_icons(document: &Document, config: &EnhancerConfig, map: &IconMap) -> Result<usize> {
    let mut applied = 0;
    for card in dom::query_document(document, &config.icon_card_selector)? {
        let title = card
            .query_selector(&config.icon_title_selector)?
            .and_then(|heading| heading.text_content())
            .unwrap_or_default();
        let Some(class) = icon_class_for(map, &title) else {
            continue;
        };
        if let Some(icon) = card.query_selector(&config.icon_selector)? {
            icon.set_class_name(&class);
            applied += 1;
        }
    }
    Ok(applied)
}

/// Fetch the icon map in the background and apply it.
/// Skipped when disabled or when the page has no category cards.
pub fn load_category_icons(document: &Document, config: &Rc<EnhancerConfig>) -> Result<()> {
    let Some(url) = config.icons_url.clone() else {
        return Ok(());
    };
    if dom::query_document(document, &config.icon_card_selector)?.is_empty() {
        return Ok(());
    }

    let document = document.clone();
    let config = Rc::clone(config);
    wasm_bindgen_futures::spawn_local(async move {
        let result = match fetch_icon_map(&url).await {
            Ok(map) => apply_icons(&document, &config, &map),
            Err(err) => Err(err),
        };
        match result {
            Ok(applied) => log::debug!("[Icons] Applied {} category icon(s)", applied),
            Err(err) => log::error!("[Icons] Could not load {}: {}", url, err),
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> IconMap {
        serde_json::from_str(
            r#"{
                "Books": { "icon": "fa-book" },
                "Music": { "icon": "  " },
                "Films": {}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_icon_lookup() {
        let map = sample_map();
        assert_eq!(icon_class_for(&map, "Books"), Some("fas fa-book".to_string()));
        assert_eq!(icon_class_for(&map, "  Books\n"), Some("fas fa-book".to_string()));
    }

    #[test]
    fn test_missing_or_blank_icons_are_skipped() {
        let map = sample_map();
        assert_eq!(icon_class_for(&map, "Music"), None);
        assert_eq!(icon_class_for(&map, "Films"), None);
        assert_eq!(icon_class_for(&map, "Games"), None);
    }
}
