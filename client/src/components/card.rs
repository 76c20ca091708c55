//! Card primitives shared by listing sections.
//!
//! DESIGN
//! ======
//! Pure presentational wrappers: each applies base classes and merges any
//! caller-supplied classes via `class_names`. No state, no behavior.

use leptos::prelude::*;

use crate::util::class_names::class_names;

const CARD: &str = "border border-slate-200 bg-white shadow-sm rounded-3xl";
const CARD_HEADER: &str = "p-6";
const CARD_TITLE: &str = "font-semibold leading-tight";
const CARD_DESCRIPTION: &str = "text-base text-slate-600";
const CARD_CONTENT: &str = "p-6 pt-0";

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&[CARD, &class])>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&[CARD_HEADER, &class])>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=class_names(&[CARD_TITLE, &class])>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <p class=class_names(&[CARD_DESCRIPTION, &class])>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&[CARD_CONTENT, &class])>{children()}</div> }
}
