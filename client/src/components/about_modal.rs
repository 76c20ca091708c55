//! Biography overlay.
//!
//! ARCHITECTURE
//! ============
//! This component stays mounted for the life of the page and renders the
//! dialog only while `ModalState` is open. In the browser it keeps a
//! `BrowserModalSession` slot in step with the state: entering OPEN locks
//! body scroll and attaches the Escape listener, leaving OPEN (or unmounting
//! while open) drops the session and undoes both.

use leptos::prelude::*;

use crate::content::Bio;
use crate::state::modal::{CloseReason, ModalEvent, ModalState};

#[component]
pub fn AboutModal(bio: Bio, modal: RwSignal<ModalState>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::modal_session::{BrowserModalSession, start_browser_session, sync_session};

        let session = StoredValue::new_local(None::<BrowserModalSession>);
        Effect::new(move || {
            let open = modal.get().is_open();
            session.update_value(|slot| {
                if let Some(change) = sync_session(slot, open, || start_browser_session(modal)) {
                    log::debug!("bio modal session: {change:?}");
                }
            });
        });
        on_cleanup(move || {
            session.update_value(|slot| {
                if slot.take().is_some() {
                    log::debug!("bio modal session released on unmount");
                }
            });
        });
    }

    let close = move |reason: CloseReason| {
        #[cfg(feature = "hydrate")]
        log::debug!("modal close requested: {reason:?}");
        modal.update(|m| *m = m.apply(ModalEvent::Close(reason)));
    };

    let heading = bio.heading;
    let paragraphs = bio.paragraphs;

    view! {
        <Show when=move || modal.get().is_open()>
            <div class="about-modal__backdrop" on:click=move |_| close(CloseReason::Backdrop)>
                <div
                    id="about-modal"
                    class="about-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="about-modal-title"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="about-modal__header">
                        <h2 id="about-modal-title">{heading.clone()}</h2>
                        <button
                            class="about-modal__close"
                            type="button"
                            title="Close"
                            aria-label="Close"
                            on:click=move |_| close(CloseReason::CloseButton)
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="about-modal__body">
                        {paragraphs.iter().map(|p| view! { <p>{p.clone()}</p> }).collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
