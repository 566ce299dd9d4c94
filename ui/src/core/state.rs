//! State cell owned by the marketplace page: active language + carousel.

use crate::catalog::catalog;
use crate::view::PageView;

use super::carousel::{Carousel, SlideOutOfRange};
use super::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketplaceState {
    pub language: Language,
    pub carousel: Carousel,
}

impl Default for MarketplaceState {
    fn default() -> Self {
        let language = Language::default();
        Self {
            language,
            carousel: Carousel::new(catalog(language).carousel.len()),
        }
    }
}

impl MarketplaceState {
    /// Switch language. The slide index is kept; it is only clamped if the
    /// new language had fewer slides.
    pub fn toggle_language(&mut self) {
        self.language.toggle();
        self.carousel.resize(catalog(self.language).carousel.len());
        tracing::debug!(
            lang = self.language.tag(),
            slide = self.carousel.index(),
            "language toggled"
        );
    }

    pub fn next_slide(&mut self) {
        self.carousel.advance();
        tracing::debug!(slide = self.carousel.index(), "carousel advanced");
    }

    pub fn prev_slide(&mut self) {
        self.carousel.retreat();
        tracing::debug!(slide = self.carousel.index(), "carousel retreated");
    }

    pub fn select_slide(&mut self, index: usize) -> Result<(), SlideOutOfRange> {
        self.carousel.select(index)?;
        tracing::debug!(slide = index, "carousel slide selected");
        Ok(())
    }

    pub fn view(&self) -> PageView {
        PageView::project(self.language, self.carousel.index())
    }
}
