use dioxus::prelude::*;

use crate::components::{CategoryGrid, SiteFooter, SiteHeader, SlideCarousel};
use crate::core::state::MarketplaceState;
use crate::Hero;

#[cfg(debug_assertions)]
fn log_render(lang: &str, slide: usize) {
    // Lightweight render trace for diagnosing refresh issues.
    tracing::debug!("[market] render (lang={lang}, slide={slide})");
}

/// The whole landing page, mounted in English on the first slide.
#[component]
pub fn FarmerMarketplace() -> Element {
    rsx! {
        MarketplacePage { initial: MarketplaceState::default() }
    }
}

/// The page body. Owns the page state seeded from `initial`; every child is a
/// pure function of the projected [`crate::view::PageView`].
#[component]
pub fn MarketplacePage(initial: MarketplaceState) -> Element {
    let mut state = use_signal(|| initial);

    let view = state().view();
    let language = view.language;

    #[cfg(debug_assertions)]
    {
        log_render(language.tag(), view.active_slide);
    }

    rsx! {
        div { class: "market", lang: language.html_lang(),
            SiteHeader {
                language: language,
                title: view.title,
                cart_label: view.cart_label,
                toggle_label: view.toggle_label,
                on_toggle: move |_| state.with_mut(|s| s.toggle_language()),
            }

            SlideCarousel {
                language: language,
                slides: view.slides.clone(),
                active: view.active_slide,
                on_prev: move |_| state.with_mut(|s| s.prev_slide()),
                on_next: move |_| state.with_mut(|s| s.next_slide()),
                on_select: move |index: usize| {
                    state.with_mut(|s| {
                        if let Err(err) = s.select_slide(index) {
                            tracing::warn!("[market] ignoring indicator click: {err}");
                        }
                    })
                },
            }

            main { class: "market__main",
                Hero {
                    title: view.hero_title,
                    description: view.hero_description,
                }
                CategoryGrid { language: language, cards: view.categories.clone() }
            }

            SiteFooter { text: view.footer }
        }
    }
}
