//! Render-ready projection of the catalog through the page state.
//!
//! Rebuilt on every render; nothing here is stored.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::catalog::{catalog, CategoryKind};
use crate::components::icon::{Accent, IconName};
use crate::core::language::Language;

/// Characters left unescaped by the browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const PLACEHOLDER_BASE: &str = "/api/placeholder/1200/600";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub language: Language,
    pub toggle_label: &'static str,
    pub title: &'static str,
    pub cart_label: &'static str,
    pub hero_title: &'static str,
    pub hero_description: &'static str,
    pub categories: Vec<CategoryCard>,
    pub slides: Vec<SlideView>,
    pub active_slide: usize,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub kind: CategoryKind,
    pub icon: IconName,
    pub accent: Accent,
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub cta: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub index: usize,
    pub src: String,
    pub alt: &'static str,
    pub caption: &'static str,
    pub active: bool,
}

impl PageView {
    pub fn project(language: Language, active_slide: usize) -> Self {
        let content = catalog(language);

        let categories = CategoryKind::ALL
            .into_iter()
            .map(|kind| {
                let category = content.categories.get(kind);
                let (icon, accent) = category_glyph(kind);
                CategoryCard {
                    kind,
                    icon,
                    accent,
                    name: category.name,
                    items: category.items,
                    cta: content.categories.shop_now,
                }
            })
            .collect();

        let slides = content
            .carousel
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideView {
                index,
                src: placeholder_src(slide.caption),
                alt: slide.alt,
                caption: slide.caption,
                active: index == active_slide,
            })
            .collect();

        Self {
            language,
            toggle_label: language.toggle_label(),
            title: content.header.title,
            cart_label: content.header.cart,
            hero_title: content.hero.title,
            hero_description: content.hero.description,
            categories,
            slides,
            active_slide,
            footer: content.footer,
        }
    }
}

/// Placeholder image address for a slide, parameterized by its caption.
pub fn placeholder_src(caption: &str) -> String {
    format!(
        "{PLACEHOLDER_BASE}?text={}",
        utf8_percent_encode(caption, URI_COMPONENT)
    )
}

/// Horizontal offset of the slide strip for the given slide.
pub fn strip_transform(active_slide: usize) -> String {
    format!("transform: translateX(-{}%);", active_slide * 100)
}

fn category_glyph(kind: CategoryKind) -> (IconName, Accent) {
    match kind {
        CategoryKind::Fruits => (IconName::Apple, Accent::Green),
        CategoryKind::Vegetables => (IconName::Carrot, Accent::Orange),
        CategoryKind::Grains => (IconName::Wheat, Accent::Yellow),
    }
}
