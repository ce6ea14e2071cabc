//! Al-Majlis Core Library
//!
//! Reference data, clock handling and share composition for the
//! "digital majlis" greeting screen.
//!
//! ## Overview
//!
//! The screen presents four Arabic greetings, lets the visitor pick one of
//! three "vibes" (visual presets), shows a live clock with a time-of-day
//! descriptor, and offers a share action. This crate holds everything that
//! does not need a renderer:
//!
//! - **Catalog**: the fixed greeting and vibe tables
//! - **Clock**: injectable time sources, Arabic time formatting, day descriptors
//! - **Display**: the controller that owns selection and time state
//! - **Share**: the text-sharing capability (native share or clipboard)
//! - **Ticker**: the minute timer, released on drop
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use majlis_core::{DisplayController, SystemClock, VibeId};
//!
//! let mut controller = DisplayController::new(Arc::new(SystemClock));
//! controller.select_vibe(VibeId::Modern);
//! println!("{} · {}", controller.formatted_time(), controller.day_descriptor());
//! println!("{}", controller.share_payload().text);
//! ```

pub mod catalog;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod share;
pub mod ticker;

// Re-exports
pub use catalog::{
    greetings, vibes, AccentToken, GreetingRecord, VibeId, VibeRecord, CARD_TAGS, DEFAULT_VIBE,
    SHARED_GREETING_INDEX,
};
pub use clock::{format_time, DayDescriptor, ManualClock, SystemClock, TimeSource};
pub use config::{AppConfig, PAGE_DESCRIPTION, PAGE_TITLE, TICK_PERIOD};
pub use display::{DisplayController, DisplayState};
pub use error::{MajlisError, Result, ShareError};
pub use share::{
    select_sharer, ClipboardCopy, ClipboardWriter, HostCapabilities, NativeShare,
    NativeShareHost, NoSharer, ShareOutcome, SharePayload, SharerKind, TextSharer,
    COPIED_ACKNOWLEDGMENT, SHARE_TITLE,
};
pub use ticker::ClockTicker;
