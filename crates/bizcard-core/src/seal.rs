//! Scratch-to-reveal seal over the CVV.
//!
//! `Sealed → Scratching → Scratched`. There are no reverse transitions and
//! `Scratched` is terminal for the lifetime of the view.

/// State of the seal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SealState {
    #[default]
    Sealed,
    Scratching,
    Scratched,
}

impl SealState {
    /// Start scratching. Returns `true` only on the `Sealed → Scratching`
    /// transition; every other state ignores the click.
    pub fn begin_scratch(&mut self) -> bool {
        if *self != SealState::Sealed {
            return false;
        }
        *self = SealState::Scratching;
        true
    }

    /// Complete the scratch. Only valid from `Scratching`.
    pub fn finish_scratch(&mut self) -> bool {
        if *self != SealState::Scratching {
            return false;
        }
        *self = SealState::Scratched;
        true
    }

    /// Whether the seal element is still rendered.
    pub fn is_visible(&self) -> bool {
        *self != SealState::Scratched
    }

    pub fn class(&self) -> &'static str {
        match self {
            SealState::Scratching => "cvv-seal scratching",
            _ => "cvv-seal",
        }
    }
}
