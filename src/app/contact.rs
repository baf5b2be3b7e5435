use leptos::prelude::*;

use crate::content::{ContactEntry, CONTACTS, CONTACT_ANCHOR, CONTACT_REL};
use crate::icons::Icon;
use crate::theme::{palette, Theme};

use super::icon::LucideIcon;

#[component]
pub fn Contact(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section
            id=CONTACT_ANCHOR
            class=move || {
                format!("py-20 transition-colors duration-300 {}", palette(theme.get()).band)
            }
        >
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-12 text-center">"Let's Work Together"</h2>
                <div class="max-w-2xl mx-auto flex flex-col gap-6">
                    {CONTACTS
                        .iter()
                        .map(|contact| view! { <ContactLink contact=*contact theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactLink(contact: ContactEntry, theme: Signal<Theme>) -> impl IntoView {
    let icon_class = match contact.accent {
        Some(accent) => format!("w-6 h-6 {accent}"),
        None => "w-6 h-6".to_string(),
    };
    view! {
        <a
            href=contact.href
            target=contact.target()
            rel=CONTACT_REL
            class=move || {
                format!(
                    "group flex items-center gap-4 p-6 rounded-xl transition-all duration-300 hover:scale-105 {}",
                    palette(theme.get()).card,
                )
            }
        >
            <LucideIcon icon=contact.icon class=icon_class />
            <span>{contact.label}</span>
            <LucideIcon
                icon=Icon::ExternalLink
                class="w-5 h-5 ml-auto transform group-hover:translate-x-1 transition-transform"
            />
        </a>
    }
}
