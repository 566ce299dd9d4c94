use dioxus::prelude::*;

use crate::core::language::Language;
use crate::t;
use crate::view::CategoryCard;

use super::icon::Icon;

#[component]
pub fn CategoryGrid(language: Language, cards: Vec<CategoryCard>) -> Element {
    let items_label = t!(language, "category-items");

    rsx! {
        section { class: "market-categories",
            for card in cards.into_iter() {
                {render_card(card, &items_label)}
            }
        }
    }
}

fn render_card(card: CategoryCard, items_label: &str) -> Element {
    let CategoryCard {
        kind,
        icon,
        accent,
        name,
        items,
        cta,
    } = card;
    let slug = kind.slug();

    rsx! {
        article { key: "{slug}", class: "market-category market-category--{slug}",
            div { class: "market-category__icon",
                Icon { name: icon, size: 40, accent: accent }
            }
            h3 { class: "market-category__name", "{name}" }
            ul { class: "market-category__items", aria_label: "{items_label}",
                for item in items.iter() {
                    li { class: "market-category__item", "{item}" }
                }
            }
            div { class: "market-category__cta",
                button { r#type: "button", class: "button button--primary", "{cta}" }
            }
        }
    }
}
