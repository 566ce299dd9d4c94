//! Inline SVG glyphs (Lucide outlines, ISC licensed) referenced by name.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Cart,
    Leaf,
    Languages,
    Apple,
    Carrot,
    Wheat,
}

/// Accent colour applied through a CSS modifier; `Inherit` keeps `currentColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Inherit,
    Green,
    Orange,
    Yellow,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Inherit => "",
            Accent::Green => "icon--accent-green",
            Accent::Orange => "icon--accent-orange",
            Accent::Yellow => "icon--accent-yellow",
        }
    }
}

impl IconName {
    pub fn slug(self) -> &'static str {
        match self {
            IconName::Cart => "cart",
            IconName::Leaf => "leaf",
            IconName::Languages => "languages",
            IconName::Apple => "apple",
            IconName::Carrot => "carrot",
            IconName::Wheat => "wheat",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::Cart => &[
                "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
            ],
            IconName::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            IconName::Languages => &[
                "m5 8 6 6",
                "m4 14 6-6 2-3",
                "M2 5h12",
                "M7 2h1",
                "m22 22-5-10-5 10",
                "M14 18h6",
            ],
            IconName::Apple => &[
                "M12 20.94c1.5 0 2.75 1.06 4 1.06 3 0 6-8 6-12.22A4.91 4.91 0 0 0 17 5c-2.22 0-4 1.44-5 2-1-.56-2.78-2-5-2a4.9 4.9 0 0 0-5 4.78C2 14 5 22 8 22c1.25 0 2.5-1.06 4-1.06Z",
                "M10 2c1 .5 2 2 2 5",
            ],
            IconName::Carrot => &[
                "M2.27 21.7s9.87-3.5 12.73-6.36a4.5 4.5 0 0 0-6.36-6.37C5.77 11.84 2.27 21.7 2.27 21.7zM8.64 14l-2.05-2.04M15.34 15l-2.46-2.46",
                "M22 9s-1.33-2-3.5-2C16.86 7 15 9 15 9s1.33 2 3.5 2S22 9 22 9z",
                "M15 2s-2 1.33-2 3.5S15 9 15 9s2-1.84 2-3.5C17 3.33 15 2 15 2z",
            ],
            IconName::Wheat => &[
                "M2 22 16 8",
                "M3.47 12.53 5 11l1.53 1.53a3.5 3.5 0 0 1 0 4.94L5 19l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z",
                "M7.47 8.53 9 7l1.53 1.53a3.5 3.5 0 0 1 0 4.94L9 15l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z",
                "M11.47 4.53 13 3l1.53 1.53a3.5 3.5 0 0 1 0 4.94L13 11l-1.53-1.53a3.5 3.5 0 0 1 0-4.94Z",
                "M20 2h2v2a4 4 0 0 1-4 4h-2V6a4 4 0 0 1 4-4Z",
                "M11.47 17.47 13 19l-1.53 1.53a3.5 3.5 0 0 1-4.94 0L5 19l1.53-1.53a3.5 3.5 0 0 1 4.94 0Z",
                "M15.47 13.47 17 15l-1.53 1.53a3.5 3.5 0 0 1-4.94 0L9 15l1.53-1.53a3.5 3.5 0 0 1 4.94 0Z",
                "M19.47 9.47 21 11l-1.53 1.53a3.5 3.5 0 0 1-4.94 0L13 11l1.53-1.53a3.5 3.5 0 0 1 4.94 0Z",
            ],
        }
    }

    /// Wheels of the cart; the only glyph that needs circles.
    fn dots(self) -> &'static [(&'static str, &'static str)] {
        match self {
            IconName::Cart => &[("8", "21"), ("19", "21")],
            _ => &[],
        }
    }
}

#[component]
pub fn Icon(
    name: IconName,
    #[props(default = 24)] size: u32,
    #[props(default)] accent: Accent,
) -> Element {
    let class = format!("icon icon--{} {}", name.slug(), accent.class());

    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in name.paths().iter().copied() {
                path { d: d }
            }
            for (cx, cy) in name.dots().iter().copied() {
                circle { cx: cx, cy: cy, r: "1" }
            }
        }
    }
}
