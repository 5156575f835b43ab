//! Card context provider.
//!
//! Provides the profile, asset store and motion config to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_app_context);
//!
//! // In child components
//! let profile = use_profile();
//! ```

use bizcard_core::{CardConfig, Profile};
use dioxus::prelude::*;

use crate::assets::AssetStore;

/// Everything the page needs that is decided at startup.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub profile: Profile,
    pub assets: AssetStore,
    pub config: CardConfig,
}

/// Get the context assembled from command line args.
pub fn get_app_context() -> AppContext {
    crate::get_app_context()
}

/// Hook to access the card content from context.
pub fn use_profile() -> Profile {
    use_context::<AppContext>().profile
}

/// Hook to access the asset store from context.
pub fn use_assets() -> AssetStore {
    use_context::<AppContext>().assets
}

/// Hook to access the motion/timing config from context.
pub fn use_card_config() -> CardConfig {
    use_context::<AppContext>().config
}
