use chrono::{Datelike, Local};

use crate::icons::Icon;

pub const OWNER: &str = "Yhya";

pub const HERO_TITLE: &str = "Front-end Developer & WordPress Expert";
pub const HERO_TAGLINE: &str =
    "Hi, I'm Yhya. I craft exceptional digital experiences through clean code and thoughtful design.";

pub const PROJECTS_ANCHOR: &str = "work";
pub const CONTACT_ANCHOR: &str = "contact";

pub fn anchor_href(id: &str) -> String {
    format!("#{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub icon: Icon,
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SKILLS: [SkillEntry; 3] = [
    SkillEntry {
        icon: Icon::Code,
        accent: "text-blue-500",
        title: "Front-end Development",
        description: "Building responsive and performant web applications using React, TypeScript, and modern CSS frameworks.",
    },
    SkillEntry {
        icon: Icon::Layout,
        accent: "text-emerald-500",
        title: "WordPress Development",
        description: "Creating custom themes, plugins, and optimizing WordPress sites for performance and SEO.",
    },
    SkillEntry {
        icon: Icon::ShoppingBag,
        accent: "text-purple-500",
        title: "E-commerce Solutions",
        description: "Implementing WooCommerce and custom e-commerce solutions with secure payment integrations.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub image_url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [ProjectEntry; 2] = [
    ProjectEntry {
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=2426",
        title: "Luxury Fashion E-commerce",
        description: "Custom WooCommerce solution with advanced filtering and AR try-on feature.",
        tags: &["React", "WordPress"],
    },
    ProjectEntry {
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=2340",
        title: "SaaS Analytics Dashboard",
        description: "Real-time analytics dashboard with dynamic data visualization.",
        tags: &["TypeScript", "Tailwind"],
    },
];

pub const CONTACT_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub icon: Icon,
    pub accent: Option<&'static str>,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactEntry {
    /// Mail links stay in the current browsing context, everything else opens a new one.
    pub fn opens_new_context(&self) -> bool {
        !self.href.starts_with("mailto:")
    }

    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("_blank")
    }
}

pub const CONTACTS: [ContactEntry; 3] = [
    ContactEntry {
        icon: Icon::Mail,
        accent: Some("text-blue-500"),
        label: "contact@yhya.dev",
        href: "mailto:contact@yhya.dev",
    },
    ContactEntry {
        icon: Icon::Github,
        accent: None,
        label: "GitHub",
        href: "https://github.com",
    },
    ContactEntry {
        icon: Icon::Linkedin,
        accent: Some("text-blue-500"),
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
];

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {OWNER}. All rights reserved.")
}
