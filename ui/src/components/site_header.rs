use dioxus::prelude::*;

use crate::core::language::Language;
use crate::t;

use super::icon::{Icon, IconName};

#[component]
pub fn SiteHeader(
    language: Language,
    title: &'static str,
    cart_label: &'static str,
    toggle_label: &'static str,
    on_toggle: EventHandler<MouseEvent>,
) -> Element {
    let toggle_title = t!(language, "header-toggle-language");
    let cart_title = t!(language, "header-cart-button");

    rsx! {
        header { class: "market-header",
            div { class: "market-header__brand",
                Icon { name: IconName::Leaf, size: 40 }
                h1 { class: "market-header__title", "{title}" }
            }
            div { class: "market-header__actions",
                button {
                    r#type: "button",
                    class: "market-header__button market-header__lang",
                    title: "{toggle_title}",
                    onclick: move |evt| on_toggle.call(evt),
                    Icon { name: IconName::Languages, size: 24 }
                    span { class: "market-header__lang-label", "{toggle_label}" }
                }
                // Inert until a cart exists.
                button {
                    r#type: "button",
                    class: "market-header__button market-header__cart",
                    title: "{cart_title}",
                    Icon { name: IconName::Cart, size: 24 }
                    span { class: "visually-hidden", "{cart_label}" }
                }
            }
        }
    }
}
