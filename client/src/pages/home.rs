//! Home page: the whole single-page site.
//!
//! ARCHITECTURE
//! ============
//! `HomePage` owns the three UI state containers (mobile nav, bio modal,
//! contact form) as independent signals and passes each one only to the
//! components that drive or render it. They are created fresh on mount and
//! never persisted, so a reload resets everything.
//!
//! SYSTEM CONTEXT
//! ==============
//! Site copy comes from the server as an `Arc<SiteContent>` context. It is
//! read through a blocking resource so the same copy is serialized into the
//! SSR response and reused during hydration.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::about_modal::AboutModal;
use crate::components::contact_section::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::programs::Programs;
use crate::components::resources::Resources;
use crate::components::speaking::Speaking;
use crate::components::testimonials::Testimonials;
use crate::content::SiteContent;
use crate::state::contact::ContactFormState;
use crate::state::modal::ModalState;
use crate::state::nav::NavMenuState;

#[component]
pub fn HomePage() -> impl IntoView {
    let menu = RwSignal::new(NavMenuState::default());
    let modal = RwSignal::new(ModalState::default());
    let form = RwSignal::new(ContactFormState::default());

    let provided = use_context::<Arc<SiteContent>>();
    let content = Resource::new_blocking(
        || (),
        move |()| {
            let content = provided.as_deref().cloned().unwrap_or_default();
            async move { content }
        },
    );

    Effect::new(move || {
        if content.get().is_some() {
            crate::util::smoke::run();
        }
    });

    view! {
        <Suspense fallback=|| view! { <div class="page-loading min-h-screen bg-black"></div> }>
            {move || Suspend::new(async move {
                let content = content.await;
                view! { <Sections content=content menu=menu modal=modal form=form/> }
            })}
        </Suspense>
    }
}

#[component]
fn Sections(
    content: SiteContent,
    menu: RwSignal<NavMenuState>,
    modal: RwSignal<ModalState>,
    form: RwSignal<ContactFormState>,
) -> impl IntoView {
    let SiteContent {
        brand,
        nav,
        hero_title,
        hero_subtitle,
        features,
        programs,
        talks,
        resources,
        testimonials,
        bio,
        copyright_year,
    } = content;

    view! {
        <div class="min-h-screen bg-gradient-to-b from-slate-50 to-white text-slate-900">
            <NavBar brand=brand.clone() items=nav menu=menu/>
            <main>
                <Hero title=hero_title subtitle=hero_subtitle hashtags=brand.hashtags.clone() features=features/>
                <Programs programs=programs/>
                <About bio=bio.clone() modal=modal/>
                <Speaking talks=talks/>
                <Resources resources=resources/>
                <Testimonials testimonials=testimonials/>
                <ContactSection brand=brand.clone() form=form/>
            </main>
            <Footer brand_name=brand.name.clone() year=copyright_year/>
            <AboutModal bio=bio modal=modal/>
        </div>
    }
}
