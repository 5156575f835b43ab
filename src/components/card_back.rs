//! Card Back
//!
//! Contact line with copyable fields, tech badges, the CVV strip with its
//! scratch seal, and a short blurb.

use bizcard_core::{ClickOrigin, ContactField, CopyFeedback, Profile, SealState};
use dioxus::prelude::*;

use super::{CopyableField, ScratchSeal, TechStack};

/// Back face of the card.
#[component]
pub fn CardBack(
    /// Card content
    profile: Profile,
    /// Current copy acknowledgement
    feedback: CopyFeedback,
    /// Seal over the CVV
    seal: SealState,
    /// Card-level click notification
    on_click: EventHandler<ClickOrigin>,
    /// Copy request for a contact field
    on_copy: EventHandler<ContactField>,
    /// Seal clicked
    on_scratch: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "card-back",
            div { class: "card-back-header",
                div { class: "contact-area",
                    span { class: "contact-text",
                        "{profile.contact_intro} "
                        CopyableField {
                            field: profile.phone.clone(),
                            feedback: feedback.clone(),
                            on_click: on_click,
                            on_copy: on_copy,
                        }
                        " {profile.contact_joiner} "
                        CopyableField {
                            field: profile.email.clone(),
                            feedback: feedback.clone(),
                            on_click: on_click,
                            on_copy: on_copy,
                        }
                    }
                }
                TechStack { rows: profile.tech_stack.clone() }
            }

            div { class: "card-back-body",
                div { class: "signature-strip",
                    div { class: "cvv-box",
                        span { class: "cvv-label", "CVV" }
                        div { class: "cvv-wrapper",
                            span { class: "cvv-value", "{profile.cvv}" }
                            ScratchSeal {
                                state: seal,
                                on_click: on_click,
                                on_scratch: on_scratch,
                            }
                        }
                    }
                }
            }

            div { class: "card-back-footer",
                div { class: "card-back-text",
                    for (i, line) in profile.bio.iter().enumerate() {
                        p { key: "{i}",
                            if let Some(ref lead) = line.highlight {
                                span { class: "highlight", "{lead}" }
                                " "
                            }
                            "{line.text}"
                        }
                    }
                }
            }
            div { class: "card-shine" }
        }
    }
}
