//! Inline SVG glyphs drawn on a 24x24 stroke grid (Lucide artwork, ISC license).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: u8, cy: u8, r: u8 },
    Rect { x: u8, y: u8, width: u8, height: u8, rx: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Layout,
    ShoppingBag,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    ChevronRight,
    Sun,
    Moon,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Code,
        Icon::Layout,
        Icon::ShoppingBag,
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::ChevronRight,
        Icon::Sun,
        Icon::Moon,
    ];

    pub fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::Code => &[
                Path("m18 16 4-4-4-4"),
                Path("m6 8-4 4 4 4"),
                Path("m14.5 4-5 16"),
            ],
            Icon::Layout => &[
                Rect {
                    x: 3,
                    y: 3,
                    width: 18,
                    height: 18,
                    rx: 2,
                },
                Path("M3 9h18"),
                Path("M9 21V9"),
            ],
            Icon::ShoppingBag => &[
                Path("M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"),
                Path("M3 6h18"),
                Path("M16 10a4 4 0 0 1-8 0"),
            ],
            Icon::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect {
                    x: 2,
                    y: 9,
                    width: 4,
                    height: 12,
                    rx: 0,
                },
                Circle { cx: 4, cy: 4, r: 2 },
            ],
            Icon::Mail => &[
                Rect {
                    x: 2,
                    y: 4,
                    width: 20,
                    height: 16,
                    rx: 2,
                },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::ExternalLink => &[
                Path("M15 3h6v6"),
                Path("M10 14 21 3"),
                Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            ],
            Icon::ChevronRight => &[Path("m9 18 6-6-6-6")],
            Icon::Sun => &[
                Circle {
                    cx: 12,
                    cy: 12,
                    r: 4,
                },
                Path("M12 2v2"),
                Path("M12 20v2"),
                Path("m4.93 4.93 1.41 1.41"),
                Path("m17.66 17.66 1.41 1.41"),
                Path("M2 12h2"),
                Path("M20 12h2"),
                Path("m6.34 17.66-1.41 1.41"),
                Path("m19.07 4.93-1.41 1.41"),
            ],
            Icon::Moon => &[Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_shapes() {
        for icon in Icon::ALL {
            assert!(!icon.shapes().is_empty(), "{icon:?} has no shapes");
        }
    }

    #[test]
    fn test_shapes_fit_viewbox() {
        for icon in Icon::ALL {
            for shape in icon.shapes() {
                match *shape {
                    Shape::Path(d) => assert!(!d.is_empty()),
                    Shape::Circle { cx, cy, r } => {
                        assert!(cx >= r && cy >= r && cx + r <= 24 && cy + r <= 24)
                    }
                    Shape::Rect {
                        x,
                        y,
                        width,
                        height,
                        ..
                    } => assert!(x + width <= 24 && y + height <= 24),
                }
            }
        }
    }
}
