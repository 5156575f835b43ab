//! UI Components for the business card.
//!
//! Dark card-stock aesthetic with a gold accent.

mod background_glow;
mod card_back;
mod card_front;
mod copyable_field;
mod qr_badge;
mod scratch_seal;
mod tech_stack;
mod tilt_card;

pub use background_glow::BackgroundGlow;
pub use card_back::CardBack;
pub use card_front::CardFront;
pub use copyable_field::CopyableField;
pub use qr_badge::QrBadge;
pub use scratch_seal::ScratchSeal;
pub use tech_stack::TechStack;
pub use tilt_card::TiltCard;
