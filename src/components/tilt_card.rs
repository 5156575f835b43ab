//! Tilt Card
//!
//! Wrapper that rotates its contents towards the pointer.

use std::rc::Rc;

use bizcard_core::{after_delay, Bounds, CardConfig, Point, Rotation, TiltTracker};
use dioxus::prelude::*;
use tokio::time::MissedTickBehavior;

/// Pointer-tracking 3D wrapper around the flip card.
///
/// A frame loop eases the rotation towards the pointer while it hovers the
/// wrapper. Leaving springs the card back to neutral with a slower
/// transition, which is restored once the spring-back has finished.
#[component]
pub fn TiltCard(
    /// Motion constants
    config: CardConfig,
    /// Click on the card surface
    onclick: EventHandler<()>,
    /// Card faces
    children: Element,
) -> Element {
    let mut tilt = use_signal(|| TiltTracker::new(&config));
    let mut transform = use_signal(|| Rotation::NEUTRAL.transform_css());
    let mut transition = use_signal(|| config.tracking_transition_css());
    let mut wrapper: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut bounds = use_signal(Bounds::default);

    // Frame loop, dropped with the component
    use_future(move || async move {
        let mut frames = tokio::time::interval(config.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            frames.tick().await;
            if !tilt.peek().is_hovering() {
                continue;
            }
            let next = tilt.write().tick();
            if let Some(rotation) = next {
                transform.set(rotation.transform_css());
            }
        }
    });

    let on_enter = move |_: MouseEvent| {
        tilt.write().enter();
    };

    // The wrapper is re-measured on every move so window resizes and
    // reflows never leave the tilt keyed to a stale box.
    let on_move = move |evt: MouseEvent| {
        let pointer = evt.client_coordinates();
        let pointer = Point::new(pointer.x, pointer.y);
        spawn(async move {
            if let Some(el) = wrapper() {
                match el.get_client_rect().await {
                    Ok(rect) => bounds.set(Bounds::new(
                        rect.origin.x,
                        rect.origin.y,
                        rect.size.width,
                        rect.size.height,
                    )),
                    Err(e) => tracing::debug!("Card wrapper not measurable: {:?}", e),
                }
            }
            tilt.write().pointer_moved(bounds(), pointer);
        });
    };

    let on_leave = move |_: MouseEvent| {
        let handle = tilt.write().leave();
        transform.set(Rotation::NEUTRAL.transform_css());
        transition.set(config.reset_transition_css());
        spawn(async move {
            after_delay(config.reset_transition, move || {
                // A later exit owns the transition until its own timer fires
                if tilt.write().finish_spring_back(handle) {
                    transition.set(config.tracking_transition_css());
                }
            })
            .await;
        });
    };

    rsx! {
        div {
            class: "card-wrapper",
            onmounted: move |evt| wrapper.set(Some(evt.data())),
            onmouseenter: on_enter,
            onmousemove: on_move,
            onmouseleave: on_leave,

            div {
                class: "card",
                style: "transform: {transform}; transition: {transition};",
                onclick: move |_| onclick.call(()),
                {children}
            }
        }
    }
}
