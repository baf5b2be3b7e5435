use leptos::prelude::*;

use crate::theme::{palette, Theme, ROOT_MARKER};

use super::icon::LucideIcon;

/// Owns the page's theme flag. The flag is mirrored onto the document root as
/// the `dark` class so styles outside the component follow it too.
#[derive(Debug, Clone, Copy)]
pub struct ThemeController {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeController {
    pub fn new() -> Self {
        let (theme, set_theme) = signal(Theme::default());
        // effects only run in the browser; the shell renders the initial marker
        Effect::new(move |_| apply_root_marker(theme.get()));
        Self { theme, set_theme }
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
        log::debug!("theme switched to {:?}", self.theme.get_untracked());
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_root_marker(theme: Theme) {
    let root = if let Some(el) = document().document_element() {
        el
    } else {
        log::warn!("no document root to mark with theme");
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(ROOT_MARKER, theme.is_dark())
    {
        log::warn!("couldn't update root theme marker: {e:?}");
    }
}

#[component]
pub fn ThemeToggle(controller: ThemeController) -> impl IntoView {
    let theme = controller.theme();
    view! {
        <button
            on:click=move |_| controller.toggle()
            class=move || {
                format!(
                    "fixed top-6 right-6 p-3 rounded-full transition-all duration-300 hover:scale-110 {}",
                    palette(theme.get()).toggle,
                )
            }
            aria-label="Toggle theme"
        >
            {move || view! { <LucideIcon icon=theme.get().toggle_icon() class="w-6 h-6" /> }}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;
    use crate::theme::{DARK, LIGHT};

    #[test]
    fn test_double_toggle_returns_to_dark() {
        Owner::new().with(|| {
            let controller = ThemeController::new();
            let theme = controller.theme();
            assert_eq!(theme.get_untracked(), Theme::Dark);
            controller.toggle();
            assert_eq!(theme.get_untracked(), Theme::Light);
            controller.toggle();
            assert_eq!(theme.get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn test_toggle_renders_dark_variant() {
        let html = render_html(|| {
            let controller = ThemeController::new();
            view! { <ThemeToggle controller /> }
        });
        assert!(html.contains("aria-label=\"Toggle theme\""));
        assert!(html.contains(DARK.toggle));
        assert!(!html.contains(LIGHT.toggle));
        // sun glyph is the only toggle icon with a circle
        assert!(html.contains("<circle"));
    }

    #[test]
    fn test_toggle_renders_light_variant() {
        let html = render_html(|| {
            let controller = ThemeController::new();
            controller.toggle();
            view! { <ThemeToggle controller /> }
        });
        assert!(html.contains(LIGHT.toggle));
        assert!(!html.contains(DARK.toggle));
        assert!(!html.contains("<circle"));
    }
}
