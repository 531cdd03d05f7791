//! Settings view component

use crate::config::Config;
use crate::deck::DeckChoice;
use dioxus::prelude::*;

/// Settings page component
#[component]
pub fn Settings() -> Element {
    let mut config = use_signal(Config::load);
    let mut save_status = use_signal(String::new);

    // Save handler
    let save_config = move |_| match config().save() {
        Ok(_) => save_status.set("Settings saved! Changes apply on next launch.".to_string()),
        Err(e) => {
            tracing::warn!("Failed to save config: {e}");
            save_status.set(format!("Error: {}", e));
        }
    };

    let scroll_speed = config().scene.wheel_sensitivity * 1000.0;

    rsx! {
        div { class: "settings",
            h1 { "⚙️ Settings" }

            // Deck
            div { class: "field",
                label { "Deck" }
                select {
                    value: format!("{:?}", config().deck),
                    onchange: move |e| {
                        let mut c = config();
                        c.deck = match e.value().as_str() {
                            "Starter" => DeckChoice::Starter,
                            _ => DeckChoice::WebStack,
                        };
                        config.set(c);
                    },
                    for choice in DeckChoice::ALL {
                        option { value: format!("{choice:?}"), "{choice.label()}" }
                    }
                }
            }

            // Columns
            div { class: "field",
                label { "Columns" }
                select {
                    value: config().columns.to_string(),
                    onchange: move |e| {
                        let mut c = config();
                        c.columns = e.value().parse().unwrap_or(4);
                        config.set(c);
                    },
                    option { value: "3", "3" }
                    option { value: "4", "4" }
                    option { value: "5", "5" }
                    option { value: "6", "6" }
                }
            }

            // Commit delay
            div { class: "field",
                label { "Close delay: {config().commit_delay_ms} ms" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "1000",
                    step: "50",
                    value: config().commit_delay_ms.to_string(),
                    oninput: move |e| {
                        let mut c = config();
                        c.commit_delay_ms = e.value().parse().unwrap_or(300);
                        config.set(c);
                    }
                }
            }

            // Wheel sensitivity
            div { class: "field",
                label { "Scene scroll speed: {scroll_speed:.1}" }
                input {
                    r#type: "range",
                    min: "0.5",
                    max: "10.0",
                    step: "0.5",
                    value: scroll_speed.to_string(),
                    oninput: move |e| {
                        let mut c = config();
                        c.scene.wheel_sensitivity = e.value().parse::<f32>().unwrap_or(2.5) / 1000.0;
                        config.set(c);
                    }
                }
            }

            // Save button
            div { class: "actions",
                button { onclick: save_config, "Save Settings" }
                span { class: "status", "{save_status}" }
            }
        }
    }
}
