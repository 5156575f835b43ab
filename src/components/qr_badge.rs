//! QR Badge - QR code printed on the card front.

use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::theme::colors;

/// Render `data` as a responsive SVG QR code.
///
/// Width/height attributes are stripped so CSS controls the display size;
/// the viewBox keeps it crisp.
pub fn render_qr_svg(data: &str, size: u32) -> Option<String> {
    let code = match QrCode::new(data.as_bytes()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            return None;
        }
    };

    let svg_string = code
        .render()
        .min_dimensions(size, size)
        .dark_color(svg::Color(colors::INK))
        .light_color(svg::Color(colors::PAPER))
        .build();

    let (width, height) = svg_dimensions(&svg_string)?;
    Some(svg_string.replace(&format!("width=\"{width}\" height=\"{height}\" "), ""))
}

// Pull the rendered width/height back out of the root element
fn svg_dimensions(svg: &str) -> Option<(String, String)> {
    let attr = |name: &str| -> Option<String> {
        let key = format!("{name}=\"");
        let start = svg.find(&key)? + key.len();
        let end = svg[start..].find('"')? + start;
        Some(svg[start..end].to_string())
    };
    Some((attr("width")?, attr("height")?))
}

/// QR code badge.
#[component]
pub fn QrBadge(
    /// Data to encode
    data: String,
    /// Minimum render size in pixels
    #[props(default = 68)]
    size: u32,
) -> Element {
    let qr_svg = use_memo(move || render_qr_svg(&data, size));

    rsx! {
        div { class: "card-qr",
            if let Some(svg) = qr_svg() {
                div { class: "qr-code", dangerous_inner_html: "{svg}" }
            } else {
                div { class: "qr-error", "QR" }
            }
        }
    }
}
