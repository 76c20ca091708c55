//! Hero section: headline, calls to action, hashtags, and the feature card.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{Feature, anchors, fragment};

#[component]
pub fn Hero(title: String, subtitle: String, hashtags: Vec<String>, features: Vec<Feature>) -> impl IntoView {
    view! {
        <section id=anchors::HOME class="hero relative overflow-hidden text-white bg-black">
            <div class="hero__honeycomb pointer-events-none absolute inset-0 -z-10" aria-hidden="true"></div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 md:py-28 grid md:grid-cols-2 gap-12 items-center">
                <div class="hero__copy">
                    <h1 class="text-4xl md:text-6xl font-extrabold tracking-tight leading-tight">
                        {title}
                        " "
                        <Icon name="anchor" class="w-8 h-8"/>
                    </h1>
                    <p class="mt-5 text-lg max-w-xl">{subtitle}</p>
                    <div class="mt-8 flex flex-wrap gap-3">
                        <a href=fragment(anchors::CONTACT) class="btn btn--primary">"Start Your Clarity Call"</a>
                        <a href=fragment(anchors::PROGRAMS) class="btn btn--outline">"Explore Programs"</a>
                    </div>
                    <div class="mt-6 text-sm flex flex-wrap gap-2">
                        {hashtags
                            .into_iter()
                            .map(|tag| view! { <span class="hero__hashtag px-3 py-1 rounded-full">{tag}</span> })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero__card card">
                    <div class="card-body">
                        <h2 class="card-title">"What we’ll build together"</h2>
                        <p class="card-text">"Simple tools. Strong habits. Sustainable change."</p>
                        <div class="hero__features">
                            {features
                                .into_iter()
                                .map(|f| {
                                    view! {
                                        <div class="flex gap-3">
                                            <Icon name=f.icon class="w-6 h-6 shrink-0"/>
                                            <div>
                                                <div class="font-medium">{f.title}</div>
                                                <p class="text-sm text-slate-600">{f.desc}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
