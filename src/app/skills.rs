use leptos::prelude::*;

use crate::content::{SkillEntry, SKILLS};
use crate::theme::{palette, Theme};

use super::icon::LucideIcon;

#[component]
pub fn Skills(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <section class=move || {
            format!("py-20 transition-colors duration-300 {}", palette(theme.get()).band)
        }>
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-12 text-center">"What I Do"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .map(|skill| view! { <SkillCard skill=*skill theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: SkillEntry, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "group p-6 rounded-xl transition-all duration-300 hover:scale-105 {}",
                palette(theme.get()).card,
            )
        }>
            <LucideIcon icon=skill.icon class=format!("w-12 h-12 mb-4 {}", skill.accent) />
            <h3 class="text-xl font-semibold mb-3">{skill.title}</h3>
            <p class=move || palette(theme.get()).body_text>{skill.description}</p>
        </div>
    }
}
