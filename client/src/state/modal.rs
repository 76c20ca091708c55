//! Biography overlay state machine.
//!
//! DESIGN
//! ======
//! Two states and one CLOSE transition. Every close trigger (button, backdrop,
//! Escape) lands in the same `Closed` state; the trigger survives only as a
//! `CloseReason` for logging. Resources held while open (scroll lock, Escape
//! listener) are owned by `util::modal_session`, keyed on `is_open`.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// What caused the dialog to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    Close(CloseReason),
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Apply an event. Opening an open dialog and closing a closed one are
    /// no-ops.
    #[must_use]
    pub fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::Open => Self::Open,
            ModalEvent::Close(_) => Self::Closed,
        }
    }
}

/// Map a `KeyboardEvent::key()` value to a close event.
pub fn close_event_for_key(key: &str) -> Option<ModalEvent> {
    (key == "Escape").then_some(ModalEvent::Close(CloseReason::Escape))
}
