//! Aggregate interaction state for one mounted card.

use std::time::Duration;

use crate::config::CardConfig;
use crate::copy::{copy_field, ClipboardWriter, CopyFeedback, CopyTicket};
use crate::flip::{ClickOrigin, FlipState};
use crate::profile::ContactField;
use crate::seal::SealState;

/// Flip, seal and copy state of the card view.
///
/// Methods that start a timed transition return the delay after which the
/// caller must invoke the matching completion method.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    config: CardConfig,
    flip: FlipState,
    seal: SealState,
    copy: CopyFeedback,
}

impl CardState {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            flip: FlipState::default(),
            seal: SealState::default(),
            copy: CopyFeedback::default(),
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn flip(&self) -> FlipState {
        self.flip
    }

    pub fn seal(&self) -> SealState {
        self.seal
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy
    }

    /// A click reached the card. Returns `true` if it flipped.
    pub fn handle_click(&mut self, origin: ClickOrigin) -> bool {
        let flipped = self.flip.click(origin);
        if flipped {
            tracing::debug!(flipped = self.flip.is_flipped(), "Card flipped");
        }
        flipped
    }

    /// The seal was clicked. Returns the scratch delay if scratching began.
    pub fn scratch(&mut self) -> Option<Duration> {
        if !self.seal.begin_scratch() {
            return None;
        }
        tracing::debug!("Seal scratching");
        Some(self.config.scratch)
    }

    /// The scratch delay elapsed.
    pub fn finish_scratch(&mut self) -> bool {
        let done = self.seal.finish_scratch();
        if done {
            tracing::debug!("Seal scratched");
        }
        done
    }

    /// Copy a contact field. On success returns the ticket and the delay
    /// after which [`CardState::revert_copy`] should be called with it.
    ///
    /// Clipboard failures are logged and leave the state unchanged.
    pub fn copy(
        &mut self,
        clipboard: &mut impl ClipboardWriter,
        field: &ContactField,
    ) -> Option<(CopyTicket, Duration)> {
        copy_field(clipboard, &mut self.copy, field)
            .ok()
            .map(|ticket| (ticket, self.config.copy_ack))
    }

    pub fn revert_copy(&mut self, ticket: CopyTicket) -> bool {
        self.copy.revert(ticket)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new(CardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_returns_delay_once() {
        let mut card = CardState::default();
        assert_eq!(card.scratch(), Some(Duration::from_millis(600)));
        assert_eq!(card.scratch(), None);
        assert!(card.finish_scratch());
        assert_eq!(card.scratch(), None);
        assert!(!card.seal().is_visible());
    }

    #[test]
    fn test_seal_click_does_not_flip() {
        let mut card = CardState::default();
        card.scratch();
        assert!(!card.handle_click(ClickOrigin::Seal));
        assert!(!card.flip().is_flipped());
    }
}
