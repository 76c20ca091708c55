//! Sticky header with brand mark, inline nav, and the mobile menu panel.
//!
//! Below `md` the inline nav is hidden and a toggle button drives
//! `NavMenuState`; every link in either nav closes the panel.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{Brand, NavItem, anchors, fragment};
use crate::state::nav::{NavAction, NavMenuState};

#[component]
pub fn NavBar(brand: Brand, items: Vec<NavItem>, menu: RwSignal<NavMenuState>) -> impl IntoView {
    let navigate = move |_: leptos::ev::MouseEvent| menu.update(|m| *m = m.apply(NavAction::Navigate));
    let toggle = move |_: leptos::ev::MouseEvent| menu.update(|m| *m = m.apply(NavAction::Toggle));

    let inline_links = items
        .iter()
        .map(|item| {
            view! {
                <a href=fragment(&item.id) class="nav-bar__link" on:click=navigate>
                    {item.label.clone()}
                </a>
            }
        })
        .collect_view();

    let panel_links = items
        .iter()
        .map(|item| {
            view! {
                <a href=fragment(&item.id) class="nav-panel__link" on:click=navigate>
                    {item.label.clone()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="nav-bar sticky top-0 z-50 backdrop-blur bg-black text-white border-b">
            <div class="nav-bar__inner max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href=fragment(anchors::HOME) class="nav-bar__brand flex items-center gap-3" on:click=navigate>
                    <img src="/assets/evolve-logo.svg" alt=brand.logo_alt() class="h-10 w-10 object-cover shadow-lg"/>
                    <div>
                        <div class="font-semibold leading-tight text-xl">{brand.name.clone()}</div>
                        <div class="text-xs -mt-0.5">{brand.slogan.clone()}</div>
                    </div>
                </a>
                <nav class="nav-bar__links hidden md:flex items-center gap-6">
                    {inline_links}
                    <a href=fragment(anchors::CONTACT) class="nav-bar__cta" on:click=navigate>
                        "Book a Session"
                    </a>
                </nav>
                <button
                    class="nav-bar__toggle md:hidden"
                    type="button"
                    aria-controls="nav-panel"
                    aria-expanded=move || menu.get().is_open().to_string()
                    aria-label=move || menu.get().toggle_label()
                    on:click=toggle
                >
                    <Show when=move || menu.get().is_open() fallback=|| view! { <Icon name="menu"/> }>
                        <Icon name="x"/>
                    </Show>
                </button>
            </div>
            <nav
                id="nav-panel"
                class="nav-panel md:hidden"
                class:nav-panel--open=move || menu.get().is_open()
                hidden=move || !menu.get().is_open()
            >
                {panel_links}
                <a href=fragment(anchors::CONTACT) class="nav-panel__cta" on:click=navigate>
                    "Book a Session"
                </a>
            </nav>
        </header>
    }
}
