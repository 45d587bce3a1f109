//! Drop Zone Panel Component
//!
//! Prompt or thumbnail rendered inside the zone, next to the wrapped input.

use leptos::prelude::*;

use crate::state::{PanelContent, Preview};

/// Panel content of one drop zone. Exactly one child is rendered at a time,
/// so a new preview always replaces the previous one.
#[component]
pub fn DropZonePanel(
    /// Written by the zone's event handlers
    content: ArcRwSignal<PanelContent>,
    /// Shown until a file is selected
    prompt: String,
) -> impl IntoView {
    view! {
        {move || match content.get() {
            PanelContent::Prompt => view! {
                <div class="upload-placeholder">
                    <i class="fas fa-cloud-upload-alt"></i>
                    <p>{prompt.clone()}</p>
                </div>
            }.into_any(),
            PanelContent::Reading { .. } => ().into_any(),
            PanelContent::Ready(Preview { file_name, data_url }) => {
                let alt = file_name.clone();
                view! {
                    <div class="upload-preview">
                        <img src=data_url alt=alt />
                        <div class="upload-file-name">
                            <i class="fas fa-check-circle"></i>
                            " "
                            {file_name}
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
