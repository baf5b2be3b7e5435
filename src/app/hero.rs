use leptos::prelude::*;

use crate::content::{anchor_href, CONTACT_ANCHOR, HERO_TAGLINE, HERO_TITLE, PROJECTS_ANCHOR};
use crate::icons::Icon;
use crate::theme::{palette, Theme};

use super::icon::LucideIcon;

#[component]
pub fn Hero(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <header class="container mx-auto px-6 py-16 md:py-32">
            <div class="max-w-4xl animate-fadeIn">
                <h1 class="text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-blue-500 to-emerald-500 text-transparent bg-clip-text animate-gradient">
                    {HERO_TITLE}
                </h1>
                <p class=move || {
                    format!(
                        "text-xl md:text-2xl mb-8 transition-colors duration-300 {}",
                        palette(theme.get()).tagline,
                    )
                }>{HERO_TAGLINE}</p>
                <div class="flex gap-4">
                    <a
                        href=anchor_href(CONTACT_ANCHOR)
                        class="group bg-blue-500 hover:bg-blue-600 px-6 py-3 rounded-lg font-medium flex items-center gap-2 transition-all duration-300 hover:scale-105"
                    >
                        "Get in touch"
                        <LucideIcon
                            icon=Icon::ChevronRight
                            class="w-5 h-5 transform group-hover:translate-x-1 transition-transform"
                        />
                    </a>
                    <a
                        href=anchor_href(PROJECTS_ANCHOR)
                        class=move || {
                            format!(
                                "transition-all duration-300 hover:scale-105 px-6 py-3 rounded-lg font-medium {}",
                                palette(theme.get()).secondary_button,
                            )
                        }
                    >
                        "View my work"
                    </a>
                </div>
            </div>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;
    use crate::theme::{DARK, LIGHT};

    #[test]
    fn test_calls_to_action_target_regions() {
        let html = render_html(|| view! { <Hero theme=Signal::derive(|| Theme::Dark) /> });
        let contact = html.find("href=\"#contact\"").expect("contact link");
        let work = html.find("href=\"#work\"").expect("work link");
        assert!(contact < work);
        assert!(html.contains("Get in touch"));
        assert!(html.contains("View my work"));
    }

    #[test]
    fn test_follows_theme() {
        let dark = render_html(|| view! { <Hero theme=Signal::derive(|| Theme::Dark) /> });
        assert!(dark.contains(DARK.tagline));
        assert!(dark.contains(DARK.secondary_button));
        assert!(!dark.contains(LIGHT.secondary_button));

        let light = render_html(|| view! { <Hero theme=Signal::derive(|| Theme::Light) /> });
        assert!(light.contains(LIGHT.tagline));
        assert!(light.contains(LIGHT.secondary_button));
        assert!(!light.contains(DARK.tagline));
    }
}
