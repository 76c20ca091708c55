//! Programs listing.

use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::icon::Icon;
use crate::content::{Program, anchors, fragment};

#[component]
pub fn Programs(programs: Vec<Program>) -> impl IntoView {
    view! {
        <section id=anchors::PROGRAMS class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-end justify-between gap-6 mb-10">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold">"Programs"</h2>
                        <p class="text-slate-600 mt-2 max-w-2xl">
                            "Choose a focused path or bundle them for a full reboot. Every option includes a kickoff Clarity Call."
                        </p>
                    </div>
                    <a href=fragment(anchors::CONTACT) class="btn btn--primary">"Book a Clarity Call"</a>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {programs.into_iter().map(program_card).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn program_card(program: Program) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-xl">{program.title}</CardTitle>
                <CardDescription>{program.subtitle}</CardDescription>
            </CardHeader>
            <CardContent>
                <ul class="space-y-2 mb-6">
                    {program
                        .bullets
                        .into_iter()
                        .map(|b| {
                            view! {
                                <li class="flex items-start gap-2 text-slate-700">
                                    <Icon name="check-circle" class="w-5 h-5 mt-0.5"/>
                                    {b}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a href=fragment(anchors::CONTACT) class="btn btn--primary w-full rounded-2xl">
                    {program.cta}
                    <Icon name="arrow-right" class="w-4 h-4 ml-2"/>
                </a>
            </CardContent>
        </Card>
    }
}
