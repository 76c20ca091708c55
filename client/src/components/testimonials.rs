use leptos::prelude::*;

use crate::components::card::{Card, CardDescription, CardHeader, CardTitle};
use crate::content::{Testimonial, anchors};

/// Client quotes.
#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id=anchors::TESTIMONIALS class="py-20 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold mb-10">"What Clients Say"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {testimonials
                        .into_iter()
                        .map(|t| {
                            let attribution = t.attribution();
                            view! {
                                <Card>
                                    <CardHeader>
                                        <CardTitle class="text-lg">"“"{t.quote}"”"</CardTitle>
                                        <CardDescription class="mt-2">{attribution}</CardDescription>
                                    </CardHeader>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
