use dioxus::prelude::*;

#[component]
pub fn SiteFooter(text: &'static str) -> Element {
    rsx! {
        footer { class: "market-footer",
            div { class: "market-footer__inner",
                p { "{text}" }
            }
        }
    }
}
