//! Click-to-copy contact fields.
//!
//! A successful copy shows a transient acknowledgement keyed by the field's
//! display text. Every acknowledgement hands out a [`CopyTicket`]; the revert
//! scheduled for that copy only clears the acknowledgement if no newer copy
//! has happened since, so rapid successive copies never cut each other short.

use crate::error::Result;
use crate::profile::ContactField;

/// Text shown in place of a field while its acknowledgement is active
pub const COPIED_LABEL: &str = "Copied!";

/// Accent colour applied to an acknowledged field
pub const COPIED_COLOR: &str = "#c9a962";

/// Destination for copied text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, via arboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Handle for the revert belonging to one copy action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Which field (if any) is currently acknowledged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: Option<String>,
    generation: u64,
}

impl CopyFeedback {
    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    pub fn is_copied(&self, display: &str) -> bool {
        self.copied.as_deref() == Some(display)
    }

    /// Show the acknowledgement for `display`, superseding any earlier one.
    pub fn acknowledge(&mut self, display: impl Into<String>) -> CopyTicket {
        self.generation = self.generation.wrapping_add(1);
        self.copied = Some(display.into());
        CopyTicket(self.generation)
    }

    /// Clear the acknowledgement if `ticket` is still the latest copy.
    pub fn revert(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.generation || self.copied.is_none() {
            return false;
        }
        self.copied = None;
        true
    }

    /// Text to render for a field with this display value.
    pub fn label<'a>(&self, display: &'a str) -> &'a str {
        if self.is_copied(display) {
            COPIED_LABEL
        } else {
            display
        }
    }

    /// Inline style for a field with this display value.
    pub fn style(&self, display: &str) -> String {
        if self.is_copied(display) {
            format!("color: {COPIED_COLOR};")
        } else {
            String::new()
        }
    }
}

/// Write `field`'s literal value to the clipboard and acknowledge it.
///
/// On failure the error is logged and returned; `feedback` is untouched.
pub fn copy_field(
    clipboard: &mut impl ClipboardWriter,
    feedback: &mut CopyFeedback,
    field: &ContactField,
) -> Result<CopyTicket> {
    if let Err(e) = clipboard.write_text(&field.value) {
        tracing::error!("Copy failed: {}", e);
        return Err(e);
    }
    tracing::debug!(display = %field.display, "Copied contact field");
    Ok(feedback.acknowledge(field.display.clone()))
}
