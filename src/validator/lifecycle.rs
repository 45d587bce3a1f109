//! Field Lifecycle
//!
//! Per-field state machine driving when validation runs. Handlers feed it
//! events and act on the returned [`Reaction`].

use super::rules::Violation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
    Input,
    /// The owning form is being submitted
    Submit,
}

impl FieldEvent {
    /// Events that come from listeners on the field itself
    pub const LISTENED: [FieldEvent; 3] = [FieldEvent::Focus, FieldEvent::Blur, FieldEvent::Input];

    pub fn event_type(self) -> &'static str {
        match self {
            FieldEvent::Focus => "focus",
            FieldEvent::Blur => "blur",
            FieldEvent::Input => "input",
            FieldEvent::Submit => "submit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    Nothing,
    Validate,
}

/// Validation state of one required field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    visited: bool,
    verdict: Option<Result<(), Violation>>,
}

impl FieldState {
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// `None` until the field has been validated once
    pub fn valid(&self) -> Option<bool> {
        self.verdict.map(|verdict| verdict.is_ok())
    }

    pub fn violation(&self) -> Option<Violation> {
        self.verdict.and_then(|verdict| verdict.err())
    }

    /// Input events only validate once the field has been visited, so a
    /// field is not flagged before the user got to it.
    pub fn react(&mut self, event: FieldEvent) -> Reaction {
        match event {
            FieldEvent::Focus => {
                self.visited = true;
                Reaction::Nothing
            }
            FieldEvent::Blur | FieldEvent::Submit => {
                self.visited = true;
                Reaction::Validate
            }
            FieldEvent::Input if self.visited => Reaction::Validate,
            FieldEvent::Input => Reaction::Nothing,
        }
    }

    /// Store a validation outcome; returns whether validity changed
    pub fn record(&mut self, verdict: Result<(), Violation>) -> bool {
        let changed = self.verdict != Some(verdict);
        self.verdict = Some(verdict);
        changed
    }
}

/// Outcome of a submit attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    Allow,
    /// Cancel the submit and focus the field at this index
    Block { focus: usize },
}

impl SubmitDecision {
    /// Decide from per-field verdicts, in document order
    pub fn from_verdicts(verdicts: &[Result<(), Violation>]) -> Self {
        match verdicts.iter().position(|verdict| verdict.is_err()) {
            Some(focus) => SubmitDecision::Block { focus },
            None => SubmitDecision::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_before_visit_is_ignored() {
        let mut state = FieldState::default();
        assert_eq!(state.react(FieldEvent::Input), Reaction::Nothing);
        assert_eq!(state.react(FieldEvent::Input), Reaction::Nothing);
        assert!(!state.visited());
        assert_eq!(state.valid(), None);
    }

    #[test]
    fn test_focus_marks_visited_and_enables_live_validation() {
        let mut state = FieldState::default();
        assert_eq!(state.react(FieldEvent::Focus), Reaction::Nothing);
        assert!(state.visited());
        assert_eq!(state.react(FieldEvent::Input), Reaction::Validate);
    }

    #[test]
    fn test_blur_always_validates() {
        let mut state = FieldState::default();
        assert_eq!(state.react(FieldEvent::Blur), Reaction::Validate);
        assert!(state.visited());
        assert_eq!(state.react(FieldEvent::Input), Reaction::Validate);
    }

    #[test]
    fn test_submit_validates_unvisited_fields() {
        let mut state = FieldState::default();
        assert_eq!(state.react(FieldEvent::Submit), Reaction::Validate);
        assert!(state.visited());
    }

    #[test]
    fn test_record_tracks_changes() {
        let mut state = FieldState::default();
        assert!(state.record(Err(Violation::Required)));
        assert_eq!(state.valid(), Some(false));
        assert_eq!(state.violation(), Some(Violation::Required));

        assert!(!state.record(Err(Violation::Required)));
        assert!(state.record(Err(Violation::MalformedUrl)));
        assert!(state.record(Ok(())));
        assert_eq!(state.valid(), Some(true));
        assert_eq!(state.violation(), None);
    }

    #[test]
    fn test_submit_decision_focuses_first_invalid() {
        let verdicts = [Ok(()), Err(Violation::MalformedUrl), Err(Violation::Required)];
        assert_eq!(SubmitDecision::from_verdicts(&verdicts), SubmitDecision::Block { focus: 1 });
        assert_eq!(SubmitDecision::from_verdicts(&[Ok(()), Ok(())]), SubmitDecision::Allow);
        assert_eq!(SubmitDecision::from_verdicts(&[]), SubmitDecision::Allow);
    }

    #[test]
    fn test_listened_event_types() {
        let types: Vec<_> = FieldEvent::LISTENED.iter().map(|e| e.event_type()).collect();
        assert_eq!(types, vec!["focus", "blur", "input"]);
    }
}
