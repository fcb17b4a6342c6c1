use leptos::{leptos_dom::helpers::set_timeout, prelude::*};

use crate::contact::{ContactForm, Field, STATUS_LIFETIME};
use crate::content::{Contact as ContactContent, SocialLink};
use crate::reveal::{Clock, SectionLayout, WallClock};

use super::reveal::use_reveal;
use super::SectionTitle;

const TITLE: usize = 0;
const INFO: usize = 1;
const FORM: usize = 2;

#[component]
pub fn Contact(
    contact: &'static ContactContent,
    socials: &'static [SocialLink],
) -> impl IntoView {
    let reveal = use_reveal("contact", SectionLayout::sequence(3));

    view! {
        <section id="contact" class="w-full py-16">
            <div node_ref=reveal.node_ref>
                <SectionTitle reveal index=TITLE text="Get In Touch" />
                <div class="flex flex-col lg:flex-row gap-8 lg:gap-12">
                    <div class="reveal w-full lg:max-w-md" style=move || reveal.style(INFO)>
                        <h3 class="text-xl font-bold mb-4">{contact.heading.clone()}</h3>
                        <p class="mb-6 leading-relaxed">{contact.blurb.clone()}</p>
                        <div class="space-y-4 mb-8">
                            {contact
                                .info
                                .iter()
                                .map(|info| {
                                    let value = match info.link.clone() {
                                        Some(link) => {
                                            view! { <a href=link class="hover:text-cyan">{info.value.clone()}</a> }
                                                .into_any()
                                        }
                                        None => view! { <span>{info.value.clone()}</span> }.into_any(),
                                    };
                                    view! {
                                        <div class="flex items-center gap-4">
                                            <i class=format!("{} text-xl text-cyan", info.icon)></i>
                                            <div class="flex flex-col">
                                                <span class="text-sm text-muted">{info.label.clone()}</span>
                                                {value}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h4 class="font-bold mb-2">"Follow Me"</h4>
                        <div class="flex gap-3 text-2xl">
                            {socials
                                .iter()
                                .filter(|s| s.url.starts_with("http"))
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="transition-transform hover:scale-110 hover:text-cyan"
                                            aria-label=social.label.clone()
                                        >
                                            <i class=social.icon.clone()></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="reveal w-full lg:max-w-xl" style=move || reveal.style(FORM)>
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let clock = StoredValue::new(WallClock::default());
    let now = move || clock.with_value(|c| c.now());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted_at = now();
        form.update(|f| {
            f.submit(submitted_at);
        });
        set_timeout(
            move || {
                let now = clock.try_with_value(|c| c.now()).unwrap_or(STATUS_LIFETIME);
                form.try_update(|f| {
                    if f.status(now).is_none() {
                        f.clear_status();
                    }
                });
            },
            STATUS_LIFETIME,
        );
    };

    let status = move || {
        form.with(|f| f.status(now()).cloned()).map(|status| {
            let (class, icon) = if status.is_success() {
                ("bg-green/20 text-green", "extra-check")
            } else {
                ("bg-red/20 text-red", "extra-warning")
            };
            view! {
                <div class=format!("flex items-center gap-2 p-3 rounded-md {class}")>
                    <i class=icon></i>
                    {status.message().to_string()}
                </div>
            }
        })
    };

    view! {
        <form class="flex flex-col gap-4" on:submit=on_submit>
            <FormInput form field=Field::Name label="Name" kind="text" placeholder="Your name" />
            <FormInput
                form
                field=Field::Email
                label="Email"
                kind="email"
                placeholder="your.email@example.com"
            />
            <FormInput
                form
                field=Field::Subject
                label="Subject"
                kind="text"
                placeholder="What's this about?"
            />
            <div class="flex flex-col gap-1">
                <label for="message" class="text-sm font-medium">
                    "Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    required
                    placeholder="Tell me about your project or question..."
                    class="px-4 py-2 rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                    prop:value=move || form.with(|f| f.field(Field::Message).to_string())
                    on:input=move |ev| form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            {status}
            <button
                type="submit"
                class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-transform hover:scale-[1.02]"
            >
                <i class="extra-send mr-2"></i>
                "Send Message"
            </button>
        </form>
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = label.to_lowercase();
    view! {
        <div class="flex flex-col gap-1">
            <label for=id.clone() class="text-sm font-medium">
                {label}
            </label>
            <input
                id=id.clone()
                name=id
                type=kind
                required
                placeholder=placeholder
                class="px-4 py-2 rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}
