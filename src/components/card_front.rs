//! Card Front
//!
//! Chip, globe logo, name, company link, QR code, birth date and socials.

use bizcard_core::{ClickOrigin, Profile, SocialKind};
use dioxus::prelude::*;

use super::QrBadge;

/// Chip columns: class and number of contact lines
const CHIP_COLUMNS: [(&str, usize); 3] = [
    ("chip-col", 4),
    ("chip-col chip-col-center", 3),
    ("chip-col", 4),
];

const GLOBE_MERIDIAN: &str =
    "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";
const GLOBE_EQUATOR: &str = "M2 12h20";

/// SVG path for a social network's glyph (24x24 viewBox)
fn social_icon_path(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z",
        SocialKind::Facebook => "M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z",
        SocialKind::LinkedIn => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
    }
}

/// Front face of the card.
#[component]
pub fn CardFront(
    /// Card content
    profile: Profile,
    /// Card-level click notification
    on_click: EventHandler<ClickOrigin>,
) -> Element {
    // Links open externally and must not flip the card
    let link_click = move |evt: MouseEvent| {
        evt.stop_propagation();
        on_click.call(ClickOrigin::Link);
    };

    rsx! {
        div { class: "card-front",
            div { class: "card-header",
                CardChip {}
                div { class: "card-logo",
                    svg {
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "1.5",
                        circle { cx: "12", cy: "12", r: "10" }
                        path { d: GLOBE_MERIDIAN }
                        path { d: GLOBE_EQUATOR }
                    }
                }
            }

            div { class: "card-body",
                div { class: "card-info",
                    div { class: "card-name", "{profile.name}" }
                    div { class: "card-title",
                        "{profile.role_prefix} "
                        a {
                            class: "hextra-link",
                            href: "{profile.company.url}",
                            target: "_blank",
                            onclick: link_click,
                            "{profile.company.label}"
                        }
                    }
                }
                QrBadge { data: profile.qr_data.clone() }
            }

            div { class: "card-footer",
                div { class: "card-date",
                    span { class: "label", "BIRTH DATE" }
                    span { class: "value", "{profile.birth_date}" }
                }
                div { class: "card-social",
                    for social in profile.socials.iter() {
                        a {
                            key: "{social.url}",
                            class: "social-icon",
                            href: "{social.url}",
                            target: "_blank",
                            title: social.kind.title(),
                            onclick: link_click,
                            svg { view_box: "0 0 24 24", fill: "currentColor",
                                path { d: social_icon_path(social.kind) }
                            }
                        }
                    }
                }
            }
            div { class: "card-shine" }
        }
    }
}

/// EMV-style contact chip.
#[component]
fn CardChip() -> Element {
    rsx! {
        div { class: "card-chip",
            div { class: "chip-lines",
                for (col, (class, count)) in CHIP_COLUMNS.into_iter().enumerate() {
                    div { key: "{col}", class: class,
                        for i in 0..count {
                            span { key: "{i}" }
                        }
                    }
                }
            }
        }
    }
}
