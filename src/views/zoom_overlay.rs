use super::card::{ActionButtons, CardFaces};
use crate::deck::Card;
use crate::review::{CardRect, ReviewHandle};
use dioxus::prelude::*;

/// CSS custom properties the zoom-in animation starts from
fn start_geometry(origin: Option<CardRect>) -> String {
    match origin {
        Some(r) => format!(
            "--start-top: {}px; --start-left: {}px; --start-width: {}px; --start-height: {}px;",
            r.top, r.left, r.width, r.height
        ),
        None => String::new(),
    }
}

/// Enlarged view of the opened card over a dimmed backdrop.
///
/// Clicking the backdrop closes the card, clicking the card flips it.
#[component]
pub fn ZoomOverlay(card: Card, origin: Option<CardRect>, flipped: bool, removing: bool) -> Element {
    let review = use_context::<ReviewHandle>();
    let id = card.id;

    let mut class = String::from("zoomCard");
    if flipped {
        class.push_str(" flipped");
    }
    if removing {
        class.push_str(" removing");
    }
    let style = start_geometry(origin);

    rsx! {
        div { class: "overlay", onclick: move |_| review.close(),
            div {
                class: "{class}",
                style: "{style}",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    review.toggle(id);
                },
                CardFaces { card }
                ActionButtons { card: id }
            }
        }
    }
}
