use dioxus::prelude::*;

use ui::views::FarmerMarketplace;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Farmer Direct Market" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        FarmerMarketplace {}
    }
}
