//! Scene view - the same cards laid out in 3D space under a scrolling camera

use std::time::{Duration, Instant};

use super::card::{ActionButtons, CardFaces};
use crate::config::Config;
use crate::deck::Deck;
use crate::review::ReviewHandle;
use crate::scene::{Panel, SceneFrame, SceneSettings, Viewport, WheelScroll, PANEL_WIDTH_PX};
use dioxus::prelude::*;

const SCENE_CSS: Asset = asset!("/assets/styling/scene.css");

/// Roughly 60 frames per second
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Inline style placing a panel at its projected position
fn panel_style(panel: &Panel) -> String {
    format!(
        "left: {:.2}px; top: {:.2}px; width: {}px; z-index: {}; \
         transform: translate(-50%, -50%) scale({:.4}) rotateY({:.4}rad); pointer-events: {};",
        panel.left,
        panel.top,
        PANEL_WIDTH_PX,
        panel.z_index,
        panel.scale,
        panel.rotation_y,
        if panel.selected { "none" } else { "auto" },
    )
}

/// Scene component. Owns wheel input and the frame loop.
#[component]
pub fn Scene() -> Element {
    let review = use_context::<ReviewHandle>();
    let deck = use_context::<Deck>();
    let config = use_context::<Config>();
    let settings = SceneSettings::from_config(&config);

    let mut viewport = use_signal(Viewport::default);
    let mut scroll = use_signal(WheelScroll::default);
    let mut frame = use_signal(SceneFrame::default);

    let loop_deck = deck.clone();
    use_future(move || {
        let deck = loop_deck.clone();
        async move {
            let mut last = Instant::now();
            loop {
                tokio::time::sleep(FRAME_INTERVAL).await;
                let now = Instant::now();
                let delta_time = now.duration_since(last).as_secs_f32();
                last = now;

                let session = review.peek();
                let max_shift = settings.max_shift(session.visible(&deck).len());
                if scroll.peek().exceeds(max_shift) {
                    scroll.write().clamp_to(max_shift);
                }
                let target = scroll.peek().target();
                let mut next = frame.peek().clone();
                if next.advance(&session, &deck, &settings, target, delta_time) {
                    frame.set(next);
                }
            }
        }
    });

    let session = review.snapshot();
    let visible_count = session.visible(&deck).len();
    let shaking = session.shaking_key();
    let panels = frame.read().panels(&session, &deck, &settings, viewport());

    rsx! {
        document::Link { rel: "stylesheet", href: SCENE_CSS }

        div {
            class: "scene",
            onmounted: move |e: MountedEvent| async move {
                match e.get_client_rect().await {
                    Ok(rect) => viewport.set(Viewport::new(rect.size.width as f32, rect.size.height as f32)),
                    Err(err) => tracing::warn!("Failed to measure scene: {err:?}"),
                }
            },
            onwheel: move |e: WheelEvent| {
                e.prevent_default();
                let delta_y = e.delta().strip_units().y as f32;
                scroll.write().on_wheel(
                    delta_y,
                    settings.max_shift(visible_count),
                    settings.wheel_sensitivity,
                );
            },

            for panel in panels {
                ScenePanel { key: "{panel.card.id}-{shaking}", panel }
            }

            if let Some(id) = session.selected() {
                div {
                    class: "overlay sceneOverlay",
                    onclick: move |_| review.close(),
                    ActionButtons { card: id }
                }
            }
        }
    }
}

/// DOM panel for one card
#[component]
fn ScenePanel(panel: Panel) -> Element {
    let review = use_context::<ReviewHandle>();
    let id = panel.card.id;
    let selected = panel.selected;
    let style = panel_style(&panel);

    rsx! {
        div {
            class: if panel.flipped { "scenePanel flipped" } else { "scenePanel" },
            style: "{style}",
            onclick: move |_| {
                if !selected {
                    review.open(id, None);
                }
            },
            CardFaces { card: panel.card.clone() }
        }
    }
}
