use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::content::{Talk, anchors, fragment};

/// Keynotes and workshops.
#[component]
pub fn Speaking(talks: Vec<Talk>) -> impl IntoView {
    view! {
        <section id=anchors::SPEAKING class="py-20 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h2 class="text-3xl md:text-4xl font-bold">"Speaking: Be Your Own Anchor"</h2>
                    <p class="text-slate-600 mt-2 max-w-3xl">
                        "Keynotes and workshops that help teams stay grounded in chaotic times. Real stories. Actionable tools. A calm, confident spark that lasts beyond the event."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {talks
                        .into_iter()
                        .map(|talk| {
                            view! {
                                <Card>
                                    <CardHeader>
                                        <CardTitle>{talk.title}</CardTitle>
                                        <CardDescription>{talk.desc}</CardDescription>
                                    </CardHeader>
                                    <CardContent>
                                        <a href=fragment(anchors::CONTACT) class="btn btn--outline rounded-2xl w-full">
                                            "Inquire for Events"
                                        </a>
                                    </CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
