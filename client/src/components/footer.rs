use leptos::prelude::*;

use crate::content::{anchors, fragment};

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

fn copyright_line(brand_name: &str, year: Option<i32>) -> String {
    match year {
        Some(year) => format!("© {year} {brand_name}. All rights reserved."),
        None => format!("© {brand_name}. All rights reserved."),
    }
}

/// Copyright line and back-to-top links.
#[component]
pub fn Footer(brand_name: String, year: Option<i32>) -> impl IntoView {
    let copyright = copyright_line(&brand_name, year);

    view! {
        <footer class="py-10 border-t bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-2 gap-6 items-center">
                <p class="text-sm text-slate-600">{copyright}</p>
                <div class="flex md:justify-end gap-4 text-sm">
                    <a href=fragment(anchors::HOME) class="hover:underline">"Back to top"</a>
                    <a href=fragment(anchors::PROGRAMS) class="hover:underline">"Programs"</a>
                    <a href=fragment(anchors::CONTACT) class="hover:underline">"Contact"</a>
                </div>
            </div>
        </footer>
    }
}
