use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::content::{Resource, anchors, fragment};

/// Free downloads.
#[component]
pub fn Resources(resources: Vec<Resource>) -> impl IntoView {
    view! {
        <section id=anchors::RESOURCES class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-end justify-between gap-6 mb-10">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold">"Free Resources"</h2>
                        <p class="text-slate-600 mt-2 max-w-2xl">
                            "Grab checklists, templates, and quick videos to boost your mindset and momentum."
                        </p>
                    </div>
                    <a href=fragment(anchors::CONTACT) class="btn btn--outline rounded-2xl">"Get the Starter Pack"</a>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {resources
                        .into_iter()
                        .map(|r| {
                            let link = match r.download_href() {
                                Some(href) => view! {
                                    <a href=href.to_owned() class="btn btn--outline rounded-2xl w-full" download="">
                                        "Download"
                                    </a>
                                }
                                .into_any(),
                                None => view! {
                                    <a href=fragment(anchors::CONTACT) class="btn btn--outline rounded-2xl w-full">
                                        "Request a Copy"
                                    </a>
                                }
                                .into_any(),
                            };
                            view! {
                                <Card>
                                    <CardHeader>
                                        <CardTitle>{r.title}</CardTitle>
                                        <CardDescription>{r.desc}</CardDescription>
                                    </CardHeader>
                                    <CardContent>{link}</CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
