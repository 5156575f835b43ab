//! Business Card Core Library
//!
//! Interaction state and content for a single-page "business card" bio.
//!
//! ## Overview
//!
//! The card is a flip card with two faces. The pointer tilts it in pseudo-3D,
//! a seal on the back can be scratched off once, and contact fields copy
//! their value to the system clipboard. Everything here is renderer-free so
//! the desktop shell only wires events into these types.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bizcard_core::{CardConfig, CardState, ClickOrigin};
//!
//! let mut card = CardState::new(CardConfig::default());
//! card.handle_click(ClickOrigin::Surface);
//! assert!(card.flip().is_flipped());
//! ```

pub mod card;
pub mod config;
pub mod copy;
pub mod document;
pub mod error;
pub mod flip;
pub mod geometry;
pub mod parallax;
pub mod profile;
pub mod seal;
pub mod tilt;
pub mod timer;

// Re-exports
pub use card::CardState;
pub use config::CardConfig;
pub use copy::{copy_field, ClipboardWriter, CopyFeedback, CopyTicket, SystemClipboard};
pub use document::{DocumentMeta, FontSpec};
pub use error::{CardError, Result};
pub use flip::{ClickOrigin, FlipState};
pub use geometry::{Bounds, Point, Size};
pub use parallax::GlowOffset;
pub use profile::{ContactField, Profile, SocialKind, SocialLink};
pub use seal::SealState;
pub use tilt::{Rotation, SpringBack, TiltTracker};
pub use timer::after_delay;
