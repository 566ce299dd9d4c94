use dioxus::prelude::*;

#[component]
pub fn Hero(title: &'static str, description: &'static str) -> Element {
    rsx! {
        section { class: "market-hero",
            h2 { class: "market-hero__title", "{title}" }
            p { class: "market-hero__description", "{description}" }
        }
    }
}
