//! Front/back flip and click gating.

/// Where a click on the card came from.
///
/// Only bare surface clicks flip the card; the interactive children
/// consume their own clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Anywhere on the card that is not one of the below
    Surface,
    /// An anchor (company link, social icons)
    Link,
    /// A click-to-copy contact field
    Copyable,
    /// The scratch seal over the CVV
    Seal,
}

impl ClickOrigin {
    /// Whether a click from this origin should flip the card.
    pub fn flips_card(self) -> bool {
        matches!(self, ClickOrigin::Surface)
    }
}

/// Which face is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipState {
    flipped: bool,
}

impl FlipState {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Handle a click; returns `true` if the card flipped.
    pub fn click(&mut self, origin: ClickOrigin) -> bool {
        if !origin.flips_card() {
            return false;
        }
        self.flipped = !self.flipped;
        true
    }

    /// CSS class for the inner container
    pub fn inner_class(&self) -> &'static str {
        if self.flipped {
            "card-inner flipped"
        } else {
            "card-inner"
        }
    }
}
