//! Context providers for Al-Majlis.
//!
//! The `App` component provides the clock, the settings and the share
//! capability; pages read them through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let clock = use_time_source();
//! let controller = use_signal(move || DisplayController::new(clock));
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use majlis_core::{AppConfig, TextSharer, TimeSource};

/// Share capability chosen at startup.
///
/// `None` until the host has been probed.
pub type SharedSharer = Arc<dyn TextSharer>;

/// Hook to access the time source from context.
pub fn use_time_source() -> Arc<dyn TimeSource> {
    use_context::<Arc<dyn TimeSource>>()
}

/// Hook to access the startup settings.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Hook to access the share capability.
///
/// Returns a reactive signal that fills in once probing finishes.
pub fn use_sharer() -> Signal<Option<SharedSharer>> {
    use_context::<Signal<Option<SharedSharer>>>()
}
