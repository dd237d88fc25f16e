//! Tally - a bounded counter widget for the browser.
//!
//! Hosts a single [`CounterApp`] instance with the stock configuration
//! (min -10, max 25, confetti at 21) and picks the label locale from the
//! browser's language setting.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod components;
mod types;

use components::CounterApp;
use types::Locale;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Resolve the widget locale from `navigator.language`, falling back to
/// English for unsupported or missing tags.
fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .and_then(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

#[component]
fn App() -> Element {
    let locale = browser_locale();

    rsx! {
        CounterApp {
            title: "Counter",
            locale,
        }
    }
}
