use leptos::prelude::*;

use crate::content::{copyright_line, current_year};
use crate::theme::{palette, Theme};

#[component]
pub fn Footer(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let year = current_year();
    view! {
        <footer class=move || {
            format!("border-t transition-colors duration-300 py-8 {}", palette(theme.get()).footer)
        }>
            <div class="container mx-auto px-6 text-center">{copyright_line(year)}</div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;
    use crate::theme::{DARK, LIGHT};
    use chrono::{Datelike, Local};

    #[test]
    fn test_shows_current_year() {
        let html = render_html(|| view! { <Footer theme=Signal::derive(|| Theme::Dark) /> });
        let year = Local::now().year();
        assert!(html.contains(&format!("© {year} Yhya. All rights reserved.")));
        assert!(html.contains(DARK.footer));
    }

    #[test]
    fn test_light_footer() {
        let html = render_html(|| view! { <Footer theme=Signal::derive(|| Theme::Light) /> });
        assert!(html.contains(LIGHT.footer));
        assert!(!html.contains(DARK.footer));
    }
}
