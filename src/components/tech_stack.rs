//! Tech Stack
//!
//! Rows of small technology badges on the back of the card.

use bizcard_core::profile::tech_icon_path;
use dioxus::prelude::*;

use crate::context::use_assets;

/// Badge rows. Icons come from `img/icons/<name>.svg` in the assets dir.
#[component]
pub fn TechStack(rows: Vec<Vec<String>>) -> Element {
    rsx! {
        div { class: "tech-stack-header",
            for (i, row) in rows.into_iter().enumerate() {
                div { key: "{i}", class: "tech-row",
                    for name in row {
                        TechBadge { key: "{name}", name: name.clone() }
                    }
                }
            }
        }
    }
}

/// A single badge; falls back to its name when the icon is missing.
#[component]
fn TechBadge(name: String) -> Element {
    let assets = use_assets();
    let icon = use_hook(|| assets.try_data_uri(&tech_icon_path(&name)));

    rsx! {
        if let Some(src) = icon {
            img {
                class: "tech-icon-sm",
                src: "{src}",
                alt: "{name}",
                title: "{name}",
                width: "18",
                height: "18",
            }
        } else {
            span { class: "tech-icon-sm tech-icon-fallback", title: "{name}", "{name}" }
        }
    }
}
