//! Page Decorations
//!
//! Cosmetic, independent passes. A failing pass is logged and the others
//! still run.

mod admin_table;
mod buttons;
mod flash;
mod focus;
mod icons;

pub use admin_table::enhance_admin_tables;
pub use buttons::{attach_loading_indicators, enhance_button_icons};
pub use flash::enhance_flash_messages;
pub use focus::enhance_focus_states;
pub use icons::load_category_icons;
