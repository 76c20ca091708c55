use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::state::modal::{CloseReason, ModalEvent, ModalState, close_event_for_key};

// =============================================================
// Fakes
// =============================================================

#[derive(Clone, Default)]
struct FakeBody(Rc<RefCell<String>>);

impl OverflowStyle for FakeBody {
    fn overflow(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_overflow(&self, value: &str) {
        *self.0.borrow_mut() = value.to_owned();
    }
}

/// Counts live listener registrations.
#[derive(Clone, Default)]
struct Listeners(Rc<Cell<usize>>);

struct FakeListener(Rc<Cell<usize>>);

impl Listeners {
    fn attach(&self) -> FakeListener {
        self.0.set(self.0.get() + 1);
        FakeListener(self.0.clone())
    }

    fn active(&self) -> usize {
        self.0.get()
    }
}

impl Detach for FakeListener {
    fn detach(self) {
        self.0.set(self.0.get() - 1);
    }
}

type FakeSession = ModalSession<FakeBody, FakeListener>;

/// Page-side harness: modal state plus the session slot it drives.
struct Harness {
    body: FakeBody,
    listeners: Listeners,
    modal: ModalState,
    session: Option<FakeSession>,
}

impl Harness {
    fn new(overflow: &str) -> Self {
        let body = FakeBody::default();
        *body.0.borrow_mut() = overflow.to_owned();
        Self { body, listeners: Listeners::default(), modal: ModalState::Closed, session: None }
    }

    fn dispatch(&mut self, event: ModalEvent) -> Option<SessionChange> {
        self.modal = self.modal.apply(event);
        let body = self.body.clone();
        let listeners = self.listeners.clone();
        sync_session(&mut self.session, self.modal.is_open(), || {
            Some(ModalSession::start(body, || listeners.attach()))
        })
    }

    /// Deliver a key press to the active listener, if any.
    fn press(&mut self, key: &str) {
        if self.listeners.active() == 0 {
            return;
        }
        if let Some(event) = close_event_for_key(key) {
            self.dispatch(event);
        }
    }

    fn overflow(&self) -> String {
        self.body.overflow()
    }
}

// =============================================================
// sync_session
// =============================================================

#[test]
fn sync_starts_once_and_stops_once() {
    let mut slot: Option<u8> = None;
    assert_eq!(sync_session(&mut slot, true, || Some(1)), Some(SessionChange::Entered));
    assert_eq!(sync_session(&mut slot, true, || Some(2)), None);
    assert_eq!(slot, Some(1));
    assert_eq!(sync_session(&mut slot, false, || Some(3)), Some(SessionChange::Exited));
    assert_eq!(slot, None);
    assert_eq!(sync_session(&mut slot, false, || Some(4)), None);
}

#[test]
fn sync_reports_nothing_when_start_fails() {
    let mut slot: Option<u8> = None;
    assert_eq!(sync_session(&mut slot, true, || None), None);
    assert_eq!(slot, None);
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn open_locks_scroll_and_attaches_one_listener() {
    let mut h = Harness::new("auto");
    assert_eq!(h.dispatch(ModalEvent::Open), Some(SessionChange::Entered));
    assert_eq!(h.overflow(), "hidden");
    assert_eq!(h.listeners.active(), 1);
    assert_eq!(h.session.as_ref().map(ModalSession::previous_overflow), Some("auto"));
}

#[test]
fn every_close_path_restores_scroll_and_detaches() {
    for reason in [CloseReason::CloseButton, CloseReason::Backdrop, CloseReason::Escape] {
        let mut h = Harness::new("scroll");
        h.dispatch(ModalEvent::Open);
        assert_eq!(h.dispatch(ModalEvent::Close(reason)), Some(SessionChange::Exited));
        assert_eq!(h.overflow(), "scroll", "close via {reason:?}");
        assert_eq!(h.listeners.active(), 0, "close via {reason:?}");
    }
}

#[test]
fn double_open_keeps_single_listener_and_one_escape_closes() {
    let mut h = Harness::new("");
    h.dispatch(ModalEvent::Open);
    assert_eq!(h.dispatch(ModalEvent::Open), None);
    assert_eq!(h.listeners.active(), 1);

    h.press("Escape");
    assert_eq!(h.modal, ModalState::Closed);
    assert_eq!(h.listeners.active(), 0);
    assert_eq!(h.overflow(), "");
}

#[test]
fn escape_after_close_has_no_listener_to_fire() {
    let mut h = Harness::new("auto");
    h.dispatch(ModalEvent::Open);
    h.dispatch(ModalEvent::Close(CloseReason::CloseButton));
    h.press("Escape");
    assert_eq!(h.modal, ModalState::Closed);
    assert_eq!(h.overflow(), "auto");
}

#[test]
fn non_escape_keys_keep_modal_open() {
    let mut h = Harness::new("auto");
    h.dispatch(ModalEvent::Open);
    h.press("Enter");
    assert!(h.modal.is_open());
    assert_eq!(h.overflow(), "hidden");
}

#[test]
fn teardown_while_open_releases_everything() {
    let mut h = Harness::new("auto");
    h.dispatch(ModalEvent::Open);
    let body = h.body.clone();
    let listeners = h.listeners.clone();
    drop(h);
    assert_eq!(body.overflow(), "auto");
    assert_eq!(listeners.active(), 0);
}

#[test]
fn reopen_after_close_starts_fresh_session() {
    let mut h = Harness::new("auto");
    h.dispatch(ModalEvent::Open);
    h.dispatch(ModalEvent::Close(CloseReason::Backdrop));
    h.dispatch(ModalEvent::Open);
    assert_eq!(h.listeners.active(), 1);
    assert_eq!(h.session.as_ref().map(ModalSession::previous_overflow), Some("auto"));
}
