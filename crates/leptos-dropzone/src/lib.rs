//! Leptos Drop Zone
//!
//! Drag-and-drop upload target for plain file inputs on server-rendered
//! pages. Native drag events are intercepted on a wrapper element and the
//! preview panel is a small Leptos component mounted inside it.

mod panel;
mod reader;
mod zone;

pub mod state;

pub use panel::DropZonePanel;
pub use reader::read_as_data_url;
pub use state::{DragKind, PanelContent, Preview, ReadTicket, ZoneState};
pub use zone::{enhance, is_enhanced, DropZoneOptions, Enhanced, ENHANCED_CLASS};
