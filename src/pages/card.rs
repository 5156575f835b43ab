//! Card page - the whole bio in one interactive card.
//!
//! Owns all transient state of the view: flip, seal, copy acknowledgement,
//! tilt and background glow. Timed transitions run in tasks spawned on this
//! component, so unmounting the page drops them before they can fire.

use bizcard_core::{
    after_delay, CardState, ClickOrigin, ContactField, GlowOffset, Point, Size, SystemClipboard,
};
use dioxus::prelude::*;

use crate::components::{BackgroundGlow, CardBack, CardFront, TiltCard};
use crate::context::{use_card_config, use_profile};

/// Current logical size of the window, read fresh so resizes never leave
/// the glow anchored to an old center.
fn live_viewport() -> Size {
    let desktop = dioxus::desktop::window();
    let physical = desktop.window.inner_size();
    Size::from_physical(physical.width, physical.height, desktop.window.scale_factor())
}

/// Card page component.
#[component]
pub fn CardPage() -> Element {
    let profile = use_profile();
    let config = use_card_config();

    let mut card = use_signal(|| CardState::new(config));
    let mut glow = use_signal(GlowOffset::default);
    let mut on_card_click = move |origin: ClickOrigin| {
        card.write().handle_click(origin);
    };

    let on_copy = move |field: ContactField| {
        let copied = card.write().copy(&mut SystemClipboard, &field);
        if let Some((ticket, delay)) = copied {
            spawn(async move {
                after_delay(delay, move || card.write().revert_copy(ticket)).await;
            });
        }
    };

    let on_scratch = move |_: ()| {
        let started = card.write().scratch();
        if let Some(delay) = started {
            spawn(async move {
                after_delay(delay, move || card.write().finish_scratch()).await;
            });
        }
    };

    let state = card.read();
    let flip_class = state.flip().inner_class();
    let seal = state.seal();
    let feedback = state.copy_feedback().clone();
    drop(state);

    rsx! {
        div {
            class: "page-root",
            onmousemove: move |evt: MouseEvent| {
                let size = live_viewport();
                if size.is_degenerate() {
                    return;
                }
                let pointer = evt.client_coordinates();
                glow.set(GlowOffset::from_pointer(
                    Point::new(pointer.x, pointer.y),
                    size,
                    config.parallax_factor,
                ));
            },

            BackgroundGlow { offset: glow() }

            main { class: "container",
                TiltCard {
                    config: config,
                    onclick: move |_| on_card_click(ClickOrigin::Surface),

                    div { class: "{flip_class}",
                        CardFront {
                            profile: profile.clone(),
                            on_click: on_card_click,
                        }
                        CardBack {
                            profile: profile.clone(),
                            feedback: feedback,
                            seal: seal,
                            on_click: on_card_click,
                            on_copy: on_copy,
                            on_scratch: on_scratch,
                        }
                    }
                }
            }
        }
    }
}
