use std::time::Duration;

use dioxus::prelude::*;

mod config;
mod deck;
mod diagnostics;
mod review;
mod scene;
mod views;

use config::Config;
use deck::Deck;
use review::use_review_provider;
use views::{Grid, Navbar, Scene, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Grid {},
        #[route("/scene")]
        Scene {},
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Keep the guard alive so buffered log lines reach the file
    let _guard = diagnostics::init_diagnostics();
    tracing::info!("Flashcard review starting...");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(Config::load);
    let deck_choice = config.deck;
    let deck = use_context_provider(|| Deck::builtin(deck_choice));

    use_hook(|| {
        tracing::info!(
            deck = ?deck_choice,
            cards = deck.len(),
            delay_ms = config.commit_delay_ms,
            "Review session started"
        );
    });

    // One session shared by both views
    use_review_provider(Duration::from_millis(config.commit_delay_ms));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
