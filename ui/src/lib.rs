//! Shared UI crate for Farmer Direct Market. Every component, the page state
//! and the static catalog live here; the `web` and `desktop` crates only
//! launch [`views::FarmerMarketplace`].

use dioxus::prelude::*;

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod view;
pub mod views;

pub mod components {
    pub mod icon;
    pub use icon::Icon;

    mod category_grid;
    pub use category_grid::CategoryGrid;

    mod site_footer;
    pub use site_footer::SiteFooter;

    mod site_header;
    pub use site_header::SiteHeader;

    mod slide_carousel;
    pub use slide_carousel::SlideCarousel;
}

mod hero;
pub use hero::Hero;

/// Shared theme, linked as an asset by web builds.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The same theme as text, for native builds that inline it.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
