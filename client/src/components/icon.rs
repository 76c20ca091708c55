//! Decorative icon glyph backed by an SVG mask under `/assets/icons`.

use leptos::prelude::*;

/// Decorative icon; hidden from assistive technology.
#[component]
pub fn Icon(#[prop(into)] name: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = crate::util::class_names::class_names(&["icon", &format!("icon--{name}"), &class]);
    view! { <span class=class aria-hidden="true"></span> }
}
