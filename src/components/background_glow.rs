use bizcard_core::GlowOffset;
use dioxus::prelude::*;

/// Decorative glow drifting behind the card with the pointer.
#[component]
pub fn BackgroundGlow(offset: GlowOffset) -> Element {
    rsx! {
        div {
            class: "background-glow",
            style: "transform: {offset.transform_css()};",
        }
    }
}
