mod contact;
mod footer;
mod hero;
mod icon;
mod portfolio;
mod projects;
mod skills;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{HERO_TITLE, OWNER};
use crate::theme::Theme;

pub use portfolio::PortfolioPage;
pub use theme_toggle::ThemeController;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        // matches the initial theme until hydration takes over the marker
        <html lang="en" class=Theme::default().root_marker().unwrap_or_default()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{OWNER} - {HERO_TITLE}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    use leptos::tachys::view::RenderHtml;

    Owner::new().with(|| f().to_html())
}
