use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class applied to the document root so page-level styles follow the theme.
    pub fn root_marker(self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some(ROOT_MARKER),
            Theme::Light => None,
        }
    }

    /// The glyph on the toggle button: the theme a click switches to.
    pub fn toggle_icon(self) -> Icon {
        match self {
            Theme::Dark => Icon::Sun,
            Theme::Light => Icon::Moon,
        }
    }
}

impl From<bool> for Theme {
    fn from(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

pub const ROOT_MARKER: &str = "dark";

/// Theme-dependent class fragments, one per styled surface.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub toggle: &'static str,
    pub tagline: &'static str,
    pub secondary_button: &'static str,
    pub band: &'static str,
    pub card: &'static str,
    pub body_text: &'static str,
    pub footer: &'static str,
}

pub const DARK: Palette = Palette {
    page: "bg-gradient-to-br from-slate-900 to-slate-800 text-white",
    toggle: "bg-slate-700 text-yellow-400 hover:bg-slate-600",
    tagline: "text-slate-300",
    secondary_button: "bg-slate-700 hover:bg-slate-600",
    band: "bg-slate-800/50",
    card: "bg-slate-700/50 hover:bg-slate-700",
    body_text: "text-slate-300",
    footer: "border-slate-700/50 text-slate-400",
};

pub const LIGHT: Palette = Palette {
    page: "bg-gradient-to-br from-blue-50 to-slate-100 text-slate-900",
    toggle: "bg-white text-slate-700 hover:bg-slate-100 shadow-lg",
    tagline: "text-slate-600",
    secondary_button: "bg-white hover:bg-slate-100 shadow-lg",
    band: "bg-white/50",
    card: "bg-white hover:shadow-xl",
    body_text: "text-slate-600",
    footer: "border-slate-200 text-slate-600",
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
