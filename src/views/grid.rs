//! Grid view - flat CSS grid of every card still under review

use std::rc::Rc;

use super::card::CardFaces;
use super::zoom_overlay::ZoomOverlay;
use crate::config::Config;
use crate::deck::{Card, Deck};
use crate::review::{CardRect, ReviewHandle};
use dioxus::prelude::*;

const GRID_CSS: Asset = asset!("/assets/styling/grid.css");

/// Grid component
#[component]
pub fn Grid() -> Element {
    let review = use_context::<ReviewHandle>();
    let deck = use_context::<Deck>();
    let config = use_context::<Config>();

    let session = review.snapshot();
    let shaking = session.shaking_key();
    let columns = config.columns.max(1);
    let selected = session.selected_card(&deck).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: GRID_CSS }

        div { class: "page",
            div {
                class: "grid",
                style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                for card in session.visible(&deck) {
                    CardTile {
                        // A new key after each removal remounts the tiles and replays the shake
                        key: "{card.id}-{shaking}",
                        card: card.clone(),
                        hidden: session.selected() == Some(card.id),
                        flipped: session.is_flipped(card.id),
                        forgotten: session.is_forgotten(card.id),
                        shake: shaking > 0,
                    }
                }
            }

            if session.visible(&deck).is_empty() {
                div { class: "done", "All cards remembered 🎉" }
            }
        }

        if let Some(card) = selected {
            ZoomOverlay {
                flipped: session.is_flipped(card.id),
                removing: session.is_removing(card.id),
                origin: session.origin(),
                card,
            }
        }
    }
}

/// Individual card tile
#[component]
fn CardTile(card: Card, hidden: bool, flipped: bool, forgotten: bool, shake: bool) -> Element {
    let review = use_context::<ReviewHandle>();
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let id = card.id;

    // Measure the tile so the zoom starts from where it sits on screen
    let open = move |_: MouseEvent| async move {
        let origin = match mounted() {
            Some(element) => match element.get_client_rect().await {
                Ok(rect) => Some(CardRect {
                    top: rect.origin.y,
                    left: rect.origin.x,
                    width: rect.size.width,
                    height: rect.size.height,
                }),
                Err(e) => {
                    tracing::warn!(card = id, "Failed to measure card: {e:?}");
                    None
                }
            },
            None => None,
        };
        review.open(id, origin);
    };

    let mut class = String::from("card");
    if hidden {
        class.push_str(" hidden");
    }
    if flipped {
        class.push_str(" flipped");
    }
    if forgotten {
        class.push_str(" forgotten");
    }
    if shake {
        class.push_str(" shake");
    }

    rsx! {
        div {
            class: "{class}",
            onmounted: move |e: MountedEvent| mounted.set(Some(e.data())),
            onclick: open,
            CardFaces { card }
        }
    }
}
