//! Resources held for exactly one OPEN period of a modal.
//!
//! ARCHITECTURE
//! ============
//! A `ModalSession` owns the scroll lock and the Escape key listener. It is
//! created when the modal enters OPEN and dropped when it leaves, whatever
//! the trigger. Dropping detaches the listener first and then releases the
//! lock. `sync_session` keeps an `Option<ModalSession>` slot in step with the
//! modal state and only starts a session when the slot is empty, so a
//! repeated open never stacks a second listener.

#[cfg(test)]
#[path = "modal_session_test.rs"]
mod modal_session_test;

use crate::util::scroll_lock::{OverflowStyle, ScrollLock};

/// A listener registration that can be removed.
pub trait Detach {
    fn detach(self);
}

pub struct ModalSession<T: OverflowStyle, L: Detach> {
    listener: Option<L>,
    lock: ScrollLock<T>,
}

impl<T: OverflowStyle, L: Detach> ModalSession<T, L> {
    /// Lock scrolling on `target`, then register the key listener.
    pub fn start(target: T, attach: impl FnOnce() -> L) -> Self {
        let lock = ScrollLock::acquire(target);
        let listener = attach();
        Self { listener: Some(listener), lock }
    }

    pub fn previous_overflow(&self) -> &str {
        self.lock.previous()
    }
}

impl<T: OverflowStyle, L: Detach> Drop for ModalSession<T, L> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.detach();
        }
    }
}

/// What `sync_session` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChange {
    Entered,
    Exited,
}

/// Bring `slot` in line with `open`.
///
/// Starts a session when open with an empty slot and drops the held session
/// when closed. Returns `None` when nothing changed, including when `start`
/// could not produce a session.
pub fn sync_session<S>(slot: &mut Option<S>, open: bool, start: impl FnOnce() -> Option<S>) -> Option<SessionChange> {
    match (open, slot.is_some()) {
        (true, false) => {
            *slot = Some(start()?);
            Some(SessionChange::Entered)
        }
        (false, true) => {
            *slot = None;
            Some(SessionChange::Exited)
        }
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserModalSession, start_browser_session};

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::*;

    use super::{Detach, ModalSession};
    use crate::state::modal::{ModalState, close_event_for_key};
    use crate::util::scroll_lock::BodyStyle;

    impl Detach for WindowListenerHandle {
        fn detach(self) {
            self.remove();
        }
    }

    pub type BrowserModalSession = ModalSession<BodyStyle, WindowListenerHandle>;

    /// Lock `<body>` scrolling and route Escape presses into `modal`.
    pub fn start_browser_session(modal: RwSignal<ModalState>) -> Option<BrowserModalSession> {
        let body = BodyStyle::current()?;
        Some(ModalSession::start(body, move || {
            window_event_listener(leptos::ev::keydown, move |ev| {
                if let Some(event) = close_event_for_key(&ev.key()) {
                    ev.prevent_default();
                    log::debug!("modal close requested: {event:?}");
                    modal.update(|m| *m = m.apply(event));
                }
            })
        }))
    }
}
