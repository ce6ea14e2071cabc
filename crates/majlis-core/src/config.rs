//! Fixed application settings and page metadata.

use std::time::Duration;

/// Interval between clock refreshes
pub const TICK_PERIOD: Duration = Duration::from_secs(60);

/// Window and document title
pub const PAGE_TITLE: &str = "المجلس الرقمي";

/// Document description
pub const PAGE_DESCRIPTION: &str =
    "مساحة تفاعلية ترحب بك وتعرّفك على تحيات عربية دافئة مع لمسات حديثة.";

/// Settings handed to the display at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How often the clock is refreshed
    pub tick_period: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
        }
    }
}
