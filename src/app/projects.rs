use leptos::prelude::*;

use crate::content::{ProjectEntry, PROJECTS, PROJECTS_ANCHOR};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=PROJECTS_ANCHOR class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-12 text-center">"Featured Projects"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Image card with the caption laid over a bottom-up gradient. The overlay is
/// always dark so the caption stays readable on the photo in either theme.
#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <div class="group relative overflow-hidden rounded-xl">
            <img
                src=project.image_url
                alt=project.title
                class="w-full h-[300px] object-cover transform group-hover:scale-105 transition-transform duration-500"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-slate-900 to-transparent opacity-90 flex flex-col justify-end p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-slate-300 mb-4">{project.description}</p>
                <div class="flex gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="bg-blue-500/20 text-blue-300 px-3 py-1 rounded-full text-sm">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    #[test]
    fn test_two_cards_with_anchor() {
        let html = render_html(|| view! { <Projects /> });
        assert!(html.contains("id=\"work\""));
        assert_eq!(html.matches("<img").count(), 2);
        assert_eq!(html.matches("<h3").count(), 2);
    }

    #[test]
    fn test_tag_chips_in_declared_order() {
        let html = render_html(|| view! { <Projects /> });
        let fashion = html.find("Luxury Fashion E-commerce").expect("fashion card");
        let react = html[fashion..].find("React").expect("React chip");
        let wordpress = html[fashion..].find("WordPress").expect("WordPress chip");
        assert!(react < wordpress);

        let dashboard = html.find("SaaS Analytics Dashboard").expect("dashboard card");
        let typescript = html[dashboard..].find("TypeScript").expect("TypeScript chip");
        let tailwind = html[dashboard..].find("Tailwind").expect("Tailwind chip");
        assert!(typescript < tailwind);
        assert!(fashion + wordpress < dashboard);
    }

    #[test]
    fn test_images_use_title_as_alt() {
        let html = render_html(|| view! { <Projects /> });
        for project in PROJECTS {
            assert!(html.contains(&format!("alt=\"{}\"", project.title)));
        }
    }
}
