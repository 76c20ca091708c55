//! Contact details and the local-only message form.
//!
//! Submission never leaves the page: the handler cancels the native submit
//! and flips `ContactFormState` into its terminal confirmation. The `name`
//! and `data-netlify` attributes only declare the form to a static
//! form-capture integration.

use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::icon::Icon;
use crate::content::{Brand, anchors};
use crate::state::contact::{ContactField, ContactFormState, ContactView, FORM_NAME};

#[component]
pub fn ContactSection(brand: Brand, form: RwSignal<ContactFormState>) -> impl IntoView {
    let tel = brand.tel_href();
    let mailto = brand.mailto_href();
    let sms = brand.sms_href();

    view! {
        <section id=anchors::CONTACT class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 gap-12 items-start">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold">"Book a Clarity Call"</h2>
                        <p class="text-slate-600 mt-2">"Tell me where you feel stuck. We’ll map your next right moves."</p>
                        <div class="mt-6 space-y-3 text-slate-700">
                            <p class="flex items-center gap-2">
                                <Icon name="phone" class="w-5 h-5"/>
                                <a href=tel class="hover:underline">{brand.phone.clone()}</a>
                            </p>
                            <p class="flex items-center gap-2">
                                <Icon name="mail" class="w-5 h-5"/>
                                <a href=mailto class="hover:underline">{brand.email.clone()}</a>
                            </p>
                            <p class="flex items-center gap-2">
                                <Icon name="instagram" class="w-5 h-5"/>
                                <a href=brand.instagram_url.clone() class="hover:underline" target="_blank" rel="noopener">
                                    {brand.instagram_handle.clone()}
                                </a>
                            </p>
                            <p class="flex items-center gap-2">
                                <Icon name="message-circle" class="w-5 h-5"/>
                                <a href=sms class="hover:underline">"Prefer SMS? Text me to get started."</a>
                            </p>
                        </div>
                    </div>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Send a Message"</CardTitle>
                            <CardDescription>"I’ll reply with available times within one business day."</CardDescription>
                        </CardHeader>
                        <CardContent>
                            {move || match form.with(ContactFormState::view) {
                                ContactView::Form => view! { <MessageForm form=form/> }.into_any(),
                                ContactView::Confirmation => view! { <ContactConfirmation/> }.into_any(),
                            }}
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MessageForm(form: RwSignal<ContactFormState>) -> impl IntoView {
    let on_input = move |field: ContactField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|s| *s = s.with_field(field, value));
        }
    };
    let value_of = move |field: ContactField| move || form.with(|s| s.form.get(field).to_owned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|s| *s = s.submit());
    };

    view! {
        <form class="contact-form space-y-4" name=FORM_NAME method="post" data-netlify="true" on:submit=on_submit>
            <input type="hidden" name="form-name" value=FORM_NAME/>
            <input
                class="contact-form__input rounded-2xl"
                name="name"
                required=true
                placeholder="Your name"
                prop:value=value_of(ContactField::Name)
                on:input=on_input(ContactField::Name)
            />
            <input
                class="contact-form__input rounded-2xl"
                name="email"
                type="email"
                required=true
                placeholder="Email"
                prop:value=value_of(ContactField::Email)
                on:input=on_input(ContactField::Email)
            />
            <textarea
                class="contact-form__input rounded-2xl min-h-[140px]"
                name="message"
                required=true
                placeholder="How can I help?"
                prop:value=value_of(ContactField::Message)
                on:input=on_input(ContactField::Message)
            ></textarea>
            <button class="btn btn--primary rounded-2xl w-full" type="submit">"Send"</button>
        </form>
    }
}

#[component]
fn ContactConfirmation() -> impl IntoView {
    view! {
        <div class="contact-confirmation p-6 rounded-2xl bg-green-50 border border-green-200" role="status">
            <p class="font-medium">"Thanks! Your message is saved locally in this demo."</p>
            <p class="text-sm text-slate-600 mt-1">
                "In production, connect this form to your email, a CRM, or a booking link."
            </p>
        </div>
    }
}
