//! Confetti burst container.
//!
//! Wraps arbitrary children and, while popped, overlays a burst of falling
//! pieces. Piece placement and timing are randomized per pop via
//! `Math.random`; the pop/unpop lifecycle is driven by the counter component.

use dioxus::prelude::*;

/// Pieces rendered per burst.
const PIECE_COUNT: usize = 40;

/// Piece colors, cycled by index.
const COLORS: [&str; 5] = ["#f94144", "#f8961e", "#f9c74f", "#90be6d", "#577590"];

const STYLE: &str = r#"
.confetti-container {
  display: block;
  position: relative;
}
.confetti-burst {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}
.confetti-piece {
  position: absolute;
  top: -10%;
  width: 8px;
  height: 14px;
  opacity: 0;
  animation-name: confetti-fall;
  animation-timing-function: ease-in;
  animation-fill-mode: forwards;
}
@keyframes confetti-fall {
  0% {
    transform: translateY(0) rotate(0deg);
    opacity: 1;
  }
  100% {
    transform: translateY(60vh) rotate(540deg);
    opacity: 0;
  }
}
"#;

/// Container that pops a confetti burst over its children.
#[component]
pub fn ConfettiContainer(#[props(default = false)] popped: bool, children: Element) -> Element {
    rsx! {
        style { "{STYLE}" }
        div {
            class: if popped { "confetti-container popped" } else { "confetti-container" },
            if popped {
                div { class: "confetti-burst",
                    for i in 0..PIECE_COUNT {
                        ConfettiPiece { key: "{i}", index: i }
                    }
                }
            }
            {children}
        }
    }
}

/// One falling piece with randomized drift, delay, and duration.
#[component]
fn ConfettiPiece(index: usize) -> Element {
    let left = js_sys::Math::random() * 100.0;
    let delay = js_sys::Math::random() * 0.4;
    let duration = 2.0 + js_sys::Math::random();
    let color = COLORS[index % COLORS.len()];

    rsx! {
        span {
            class: "confetti-piece",
            style: "left: {left:.1}%; animation-delay: {delay:.2}s; animation-duration: {duration:.2}s; background: {color};",
        }
    }
}
