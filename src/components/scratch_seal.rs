use bizcard_core::{ClickOrigin, SealState};
use dioxus::prelude::*;

/// Scratch-off seal over the CVV. Renders nothing once scratched.
#[component]
pub fn ScratchSeal(
    state: SealState,
    on_click: EventHandler<ClickOrigin>,
    on_scratch: EventHandler<()>,
) -> Element {
    if !state.is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: state.class(),
            title: "Click to scratch",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_click.call(ClickOrigin::Seal);
                on_scratch.call(());
            },
            span { class: "seal-text", "SCRATCH" }
        }
    }
}
