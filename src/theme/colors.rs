//! Color constants shared between Rust-rendered SVG and the stylesheet.
//!
//! Keep in sync with the custom properties at the top of `styles.rs`.

/// Card stock / QR modules
pub const INK: &str = "#0d0d0f";

/// QR quiet zone
pub const PAPER: &str = "#f4efe3";
