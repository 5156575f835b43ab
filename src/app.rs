use bizcard_core::{DocumentMeta, FontSpec};
use dioxus::prelude::*;

use crate::context::get_app_context;
use crate::pages::CardPage;
use crate::theme::GLOBAL_STYLES;

/// Root document shell.
///
/// Provides page metadata, the display font, global styles and the card
/// context. The font is exposed to descendants as `var(--font-outfit)`.
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(get_app_context);

    let meta = DocumentMeta::default();
    let font = FontSpec::default();
    let assets = ctx.assets.clone();

    // Favicon is inlined once; a missing file just leaves the default icon
    let icon = use_hook(move || assets.try_data_uri(meta.icon));

    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: "{meta.description}" }
        if let Some(href) = icon {
            document::Link { rel: "icon", href: href }
        }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: font.stylesheet_href() }
        style { {GLOBAL_STYLES} }

        div {
            class: "document-root",
            lang: meta.lang,
            style: "{font.css_variable()}",
            CardPage {}
        }
    }
}
