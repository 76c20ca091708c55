//! About section teaser with the entry point into the biography overlay.

use leptos::prelude::*;

use crate::content::{Bio, anchors};
use crate::state::modal::{ModalEvent, ModalState};

#[component]
pub fn About(bio: Bio, modal: RwSignal<ModalState>) -> impl IntoView {
    let on_open = move |_: leptos::ev::MouseEvent| modal.update(|m| *m = m.apply(ModalEvent::Open));

    view! {
        <section id=anchors::ABOUT class="about py-20 bg-white">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl md:text-4xl font-bold">"Meet Your Coach"</h2>
                <p class="text-slate-600 mt-4">{bio.teaser}</p>
                <button
                    class="btn btn--primary mt-8"
                    type="button"
                    aria-haspopup="dialog"
                    aria-controls="about-modal"
                    on:click=on_open
                >
                    "Read My Story"
                </button>
            </div>
        </section>
    }
}
