use crate::deck::Deck;
use crate::review::ReviewHandle;
use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Navigation bar with links to both review views and settings
#[component]
pub fn Navbar() -> Element {
    let review = use_context::<ReviewHandle>();
    let deck = use_context::<Deck>();
    let remembered = review.remembered_count();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div {
            id: "navbar",
            Link {
                to: Route::Grid {},
                "🃏 Grid"
            }
            Link {
                to: Route::Scene {},
                "🧊 Scene"
            }
            Link {
                to: Route::Settings {},
                "⚙️ Settings"
            }
            span { class: "progress", "{remembered} / {deck.len()} remembered" }
        }

        Outlet::<Route> {}
    }
}
