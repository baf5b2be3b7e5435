use leptos::prelude::*;

use crate::theme::palette;

use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;
use super::theme_toggle::{ThemeController, ThemeToggle};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let controller = ThemeController::new();
    let theme = controller.theme();

    view! {
        <div class=move || {
            format!("min-h-screen transition-colors duration-300 {}", palette(theme.get()).page)
        }>
            <ThemeToggle controller />
            <Hero theme />
            <Skills theme />
            <Projects />
            <Contact theme />
            <Footer theme />
        </div>
    }
}
