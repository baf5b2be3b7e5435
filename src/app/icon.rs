use leptos::{either::*, prelude::*};

use crate::icons::{Icon, Shape};

#[component]
pub fn LucideIcon(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    let shapes = icon
        .shapes()
        .iter()
        .map(|shape| match *shape {
            Shape::Path(d) => EitherOf3::A(view! { <path d=d></path> }),
            Shape::Circle { cx, cy, r } => EitherOf3::B(view! { <circle cx=cx cy=cy r=r></circle> }),
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => EitherOf3::C(view! {
                <rect x=x y=y width=width height=height rx=rx></rect>
            }),
        })
        .collect_view();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {shapes}
        </svg>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_renders_every_shape() {
        let html = render_html(|| view! { <LucideIcon icon=Icon::Linkedin class="w-6 h-6" /> });
        assert!(html.contains("<svg"));
        assert!(html.contains("class=\"w-6 h-6\""));
        assert_eq!(html.matches("<path").count(), 1);
        assert_eq!(html.matches("<rect").count(), 1);
        assert_eq!(html.matches("<circle").count(), 1);
    }
}
