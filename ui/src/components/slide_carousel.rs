//! One-slide-at-a-time carousel with step controls and indicators.

use dioxus::prelude::*;

use crate::core::language::Language;
use crate::t;
use crate::view::{strip_transform, SlideView};

#[component]
pub fn SlideCarousel(
    language: Language,
    slides: Vec<SlideView>,
    active: usize,
    on_prev: EventHandler<MouseEvent>,
    on_next: EventHandler<MouseEvent>,
    on_select: EventHandler<usize>,
) -> Element {
    let region_label = t!(language, "carousel-region");
    let prev_label = t!(language, "carousel-previous");
    let next_label = t!(language, "carousel-next");
    let strip_style = strip_transform(active);

    let indicators: Vec<Indicator> = slides
        .iter()
        .map(|slide| {
            let number: usize = slide.index + 1;
            Indicator {
                index: slide.index,
                is_active: slide.active,
                label: t!(language, "carousel-goto", index = number),
            }
        })
        .collect();

    rsx! {
        section { class: "market-carousel", aria_label: "{region_label}",
            div { class: "market-carousel__strip", style: "{strip_style}",
                for slide in slides.into_iter() {
                    {render_slide(slide)}
                }
            }

            button {
                r#type: "button",
                class: "market-carousel__nav market-carousel__nav--prev",
                aria_label: "{prev_label}",
                onclick: move |evt| on_prev.call(evt),
                "❮"
            }
            button {
                r#type: "button",
                class: "market-carousel__nav market-carousel__nav--next",
                aria_label: "{next_label}",
                onclick: move |evt| on_next.call(evt),
                "❯"
            }

            div { class: "market-carousel__indicators",
                for indicator in indicators.into_iter() {
                    {render_indicator(indicator, on_select)}
                }
            }
        }
    }
}

struct Indicator {
    index: usize,
    is_active: bool,
    label: String,
}

fn render_slide(slide: SlideView) -> Element {
    let SlideView {
        index,
        src,
        alt,
        caption,
        active,
    } = slide;

    rsx! {
        div {
            key: "{index}",
            class: format!(
                "market-carousel__slide {}",
                if active { "market-carousel__slide--active" } else { "" }
            ),
            style: format!("left: {}%;", index * 100),
            aria_hidden: (!active).to_string(),
            img { class: "market-carousel__image", src: "{src}", alt: "{alt}" }
            div { class: "market-carousel__caption",
                p { "{caption}" }
            }
        }
    }
}

fn render_indicator(indicator: Indicator, on_select: EventHandler<usize>) -> Element {
    let Indicator {
        index,
        is_active,
        label,
    } = indicator;

    rsx! {
        button {
            key: "{index}",
            r#type: "button",
            class: format!(
                "market-carousel__indicator {}",
                if is_active { "market-carousel__indicator--active" } else { "" }
            ),
            aria_label: "{label}",
            aria_current: is_active.to_string(),
            onclick: move |_| on_select.call(index),
        }
    }
}
