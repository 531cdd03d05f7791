//! Card pieces shared by the grid and the scene

use crate::deck::{Card, CardId};
use crate::review::ReviewHandle;
use dioxus::prelude::*;

/// Front and back faces; the parent's `flipped` class turns them
#[component]
pub fn CardFaces(card: Card) -> Element {
    rsx! {
        div { class: "cardInner",
            div { class: "cardFace front",
                span { class: "starIcon", "☆" }
                div { class: "cardTitle", "{card.front}" }
            }
            div { class: "cardFace back",
                span { class: "starIcon", "★" }
                div { class: "cardContent", "{card.back}" }
            }
        }
    }
}

/// Reject/accept buttons for the opened card
#[component]
pub fn ActionButtons(card: CardId) -> Element {
    let review = use_context::<ReviewHandle>();

    rsx! {
        div { class: "actionButtons",
            button {
                class: "actionBtn cross",
                aria_label: "Not remembered yet",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    review.forget(card);
                },
                svg { view_box: "0 0 24 24",
                    line { x1: "6", y1: "6", x2: "18", y2: "18" }
                    line { x1: "18", y1: "6", x2: "6", y2: "18" }
                }
            }
            button {
                class: "actionBtn check",
                aria_label: "Remembered",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    review.remember(card);
                },
                svg { view_box: "0 0 24 24",
                    path { d: "M5 13l4 4L19 7" }
                }
            }
        }
    }
}
