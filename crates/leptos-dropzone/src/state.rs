//! Drop Zone State
//!
//! Drag highlight and preview bookkeeping for a single drop zone.
//! Holds no DOM handles, so handlers can be exercised with synthetic events.

/// Native drag lifecycle events intercepted by the zone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragKind {
    pub const ALL: [DragKind; 4] = [DragKind::Enter, DragKind::Over, DragKind::Leave, DragKind::Drop];

    pub fn event_type(self) -> &'static str {
        match self {
            DragKind::Enter => "dragenter",
            DragKind::Over => "dragover",
            DragKind::Leave => "dragleave",
            DragKind::Drop => "drop",
        }
    }

    pub fn from_event_type(event_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.event_type() == event_type)
    }

    /// Whether the zone stays highlighted after this event
    pub fn highlights(self) -> bool {
        matches!(self, DragKind::Enter | DragKind::Over)
    }
}

/// Rendered thumbnail of the selected file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub file_name: String,
    pub data_url: String,
}

/// What the zone panel shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelContent {
    /// Nothing selected yet: the drop prompt
    #[default]
    Prompt,
    /// A file was selected and its data URL is still being read.
    /// Also the resting state when that read fails.
    Reading { file_name: String },
    Ready(Preview),
}

impl PanelContent {
    pub fn preview(&self) -> Option<&Preview> {
        match self {
            PanelContent::Ready(preview) => Some(preview),
            _ => None,
        }
    }
}

/// Generation tag of one file read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// Per-zone state: drag highlight plus the preview slot
#[derive(Debug, Default)]
pub struct ZoneState {
    is_dragging: bool,
    generation: u64,
    content: PanelContent,
}

impl ZoneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    /// Apply a drag event, returning the new highlight state
    pub fn drag(&mut self, kind: DragKind) -> bool {
        self.is_dragging = kind.highlights();
        self.is_dragging
    }

    /// Start showing a newly selected file. The prompt and any previous
    /// preview are dropped immediately; the returned ticket must be handed
    /// back to [`ZoneState::complete`] once the read finishes.
    pub fn select(&mut self, file_name: impl Into<String>) -> ReadTicket {
        self.generation += 1;
        self.content = PanelContent::Reading { file_name: file_name.into() };
        ReadTicket(self.generation)
    }

    /// Publish a finished read. Results of superseded reads are discarded.
    pub fn complete(&mut self, ticket: ReadTicket, data_url: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let PanelContent::Reading { file_name } = &self.content else {
            return false;
        };
        self.content = PanelContent::Ready(Preview {
            file_name: file_name.clone(),
            data_url,
        });
        true
    }

    /// Forget the selection. Reads still in flight become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.content = PanelContent::Prompt;
    }

    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        ticket.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_highlight_cycle() {
        let mut state = ZoneState::new();
        assert!(state.drag(DragKind::Enter));
        assert!(state.drag(DragKind::Over));
        assert!(!state.drag(DragKind::Leave));
        assert!(state.drag(DragKind::Enter));
        assert!(!state.drag(DragKind::Drop));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_event_type_lookup() {
        for kind in DragKind::ALL {
            assert_eq!(DragKind::from_event_type(kind.event_type()), Some(kind));
        }
        assert_eq!(DragKind::from_event_type("dragstart"), None);
    }

    #[test]
    fn test_select_hides_prompt_until_read_finishes() {
        let mut state = ZoneState::new();
        assert_eq!(state.content(), &PanelContent::Prompt);

        let ticket = state.select("cat.png");
        assert_eq!(state.content(), &PanelContent::Reading { file_name: "cat.png".into() });
        assert!(state.content().preview().is_none());

        assert!(state.complete(ticket, "data:image/png;base64,AAAA".into()));
        let preview = state.content().preview().unwrap();
        assert_eq!(preview.file_name, "cat.png");
        assert_eq!(preview.data_url, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_second_file_replaces_preview() {
        let mut state = ZoneState::new();
        let first = state.select("one.png");
        assert!(state.complete(first, "data:one".into()));

        let second = state.select("two.png");
        assert!(state.content().preview().is_none());
        assert!(state.complete(second, "data:two".into()));
        assert_eq!(state.content().preview().unwrap().file_name, "two.png");
    }

    #[test]
    fn test_stale_read_is_discarded() {
        let mut state = ZoneState::new();
        let slow = state.select("slow.png");
        let fast = state.select("fast.png");

        assert!(state.complete(fast, "data:fast".into()));
        // The earlier read resolves last and must not overwrite the newer preview
        assert!(!state.complete(slow, "data:slow".into()));
        assert_eq!(state.content().preview().unwrap().file_name, "fast.png");
        assert_eq!(state.content().preview().unwrap().data_url, "data:fast");
    }

    #[test]
    fn test_cleared_selection_drops_pending_read() {
        let mut state = ZoneState::new();
        let pending = state.select("a.png");
        state.clear();
        assert_eq!(state.content(), &PanelContent::Prompt);
        assert!(!state.complete(pending, "data:a".into()));
        assert_eq!(state.content(), &PanelContent::Prompt);
    }

    #[test]
    fn test_clear_removes_ready_preview() {
        let mut state = ZoneState::new();
        let ticket = state.select("a.png");
        assert!(state.complete(ticket, "data:a".into()));
        state.clear();
        assert!(state.content().preview().is_none());
        assert_eq!(state.content(), &PanelContent::Prompt);
    }

    #[test]
    fn test_failed_read_leaves_no_preview() {
        let mut state = ZoneState::new();
        let first = state.select("a.png");
        assert!(state.complete(first, "data:a".into()));
        let _never_completes = state.select("b.png");
        assert!(state.content().preview().is_none());
        assert_ne!(state.content(), &PanelContent::Prompt);
    }
}
