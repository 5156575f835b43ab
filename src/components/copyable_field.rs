//! Copyable Field
//!
//! Inline contact value that copies itself to the clipboard when clicked.

use bizcard_core::{ClickOrigin, ContactField, CopyFeedback};
use dioxus::prelude::*;

/// Click-to-copy contact value.
///
/// Shows "Copied!" in the accent colour while `feedback` acknowledges this
/// field's display text. The click never reaches the card, so copying does
/// not flip it.
#[component]
pub fn CopyableField(
    /// Value to copy and text to show
    field: ContactField,
    /// Current acknowledgement
    feedback: CopyFeedback,
    /// Card-level click notification
    on_click: EventHandler<ClickOrigin>,
    /// Copy request
    on_copy: EventHandler<ContactField>,
) -> Element {
    let label = feedback.label(&field.display).to_string();
    let style = feedback.style(&field.display);

    rsx! {
        strong {
            class: "copyable",
            style: "{style}",
            title: "Click to copy",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                on_click.call(ClickOrigin::Copyable);
                on_copy.call(field.clone());
            },
            "{label}"
        }
    }
}
