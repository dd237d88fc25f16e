//! Bounded counter component.
//!
//! Displays the current value styled by its threshold class, with a -1/+1
//! button pair that disables at the configured bounds. Landing on the
//! confetti trigger pops the confetti container, deferred one tick so the pop
//! lands after the re-render.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::components::confetti::ConfettiContainer;
use crate::components::locale::use_locale_provider;
use crate::types::{BoundedCounter, CounterConfig, Locale, Transition};

/// How long the burst stays up before the container un-pops, so a later
/// re-entry onto the trigger can pop again.
const CONFETTI_DURATION_MS: u32 = 3000;

const STYLE: &str = r#"
.counter-widget {
  display: block;
  color: #1a3e5c;
  background-color: #e8f1f8;
  font-family: "Roboto", sans-serif;
}
.counter-widget .wrapper {
  margin: 8px;
  padding: 16px;
}
.counter-widget h3 span {
  font-size: 20px;
}
.counter-widget .counter {
  font-size: 64px;
  text-align: center;
  margin-bottom: 16px;
  transition: color 0.3s ease-in-out;
  color: #2b6a8f;
}
.counter-widget .counter.max {
  color: #d94f70;
}
.counter-widget .counter.threshold-18 {
  color: #8a3ffc;
}
.counter-widget .counter.threshold-21 {
  color: #1d8a8a;
}
.counter-widget .buttons {
  display: flex;
  justify-content: center;
  gap: 12px;
}
.counter-widget button {
  padding: 8px 16px;
  font-size: 16px;
  border: 1px solid #1d8a8a;
  border-radius: 4px;
  cursor: pointer;
  background: #1d8a8a;
  color: #ffffff;
  transition: background-color 0.3s ease;
}
.counter-widget button:hover:not(:disabled),
.counter-widget button:focus:not(:disabled) {
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
  outline: none;
}
.counter-widget button:disabled {
  background-color: #9aa5ad;
  opacity: 0.2;
  cursor: not-allowed;
}
"#;

/// Counter widget with bounds, threshold styling, and a confetti trigger.
#[component]
pub fn CounterApp(
    #[props(default = String::new())] title: String,
    #[props(default = -10)] min: i32,
    #[props(default = 25)] max: i32,
    #[props(default = 21)] confetti_trigger: i32,
    /// Starting value, clamped into `[min, max]`.
    #[props(default = 0)] start: i32,
    #[props(default = Locale::En)] locale: Locale,
) -> Element {
    let mut counter = use_signal(|| {
        BoundedCounter::new(
            start,
            CounterConfig {
                min,
                max,
                confetti_trigger,
            },
        )
    });
    let popped = use_signal(|| false);
    let labels = use_locale_provider(locale).labels();

    let (value, threshold_class, at_min, at_max) = {
        let state = counter.read();
        (
            state.value(),
            state.threshold().css_class(),
            state.at_min(),
            state.at_max(),
        )
    };

    rsx! {
        style { "{STYLE}" }
        div { class: "counter-widget",
            div { class: "wrapper",
                if !title.is_empty() {
                    h3 {
                        span { "{labels.title}: " }
                        "{title}"
                    }
                }
                ConfettiContainer { popped: popped(),
                    div { class: "counter {threshold_class}", "{value}" }
                    div { class: "buttons",
                        button {
                            title: "{labels.decrement}",
                            disabled: at_min,
                            onclick: move |_| {
                                let transition = counter.write().decrement();
                                on_change(transition, confetti_trigger, popped);
                            },
                            "-1"
                        }
                        button {
                            title: "{labels.increment}",
                            disabled: at_max,
                            onclick: move |_| {
                                let transition = counter.write().increment();
                                on_change(transition, confetti_trigger, popped);
                            },
                            "+1"
                        }
                    }
                }
            }
        }
    }
}

/// React to a completed mutation: log it, and pop the confetti if it landed
/// on the trigger. Saturated (no-op) presses pass `None` and do nothing.
fn on_change(transition: Option<Transition>, trigger: i32, popped: Signal<bool>) {
    let Some(t) = transition else {
        return;
    };
    tracing::debug!("counter {} -> {}, trigger {}", t.from, t.to, trigger);
    if t.crossed_into(trigger) {
        tracing::info!("confetti trigger hit at {}", t.to);
        make_it_rain(popped);
    }
}

/// Pop the confetti container on the next tick, then un-pop it after the
/// burst so a later transition onto the trigger fires again.
fn make_it_rain(mut popped: Signal<bool>) {
    spawn(async move {
        TimeoutFuture::new(0).await;
        popped.set(true);
        TimeoutFuture::new(CONFETTI_DURATION_MS).await;
        popped.set(false);
    });
}
