//! Display controller: the screen's only mutable state.
//!
//! Holds the selected vibe and the current time, and derives everything the
//! view shows from them. The view owns one controller and is its only writer.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::catalog::{VibeId, VibeRecord, DEFAULT_VIBE};
use crate::clock::{format_time, DayDescriptor, TimeSource};
use crate::error::Result;
use crate::share::{ShareOutcome, SharePayload, TextSharer};

/// Mutable display fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Always one of the catalog vibes
    pub selected: VibeId,
    /// Never moves backwards within a session
    pub current_time: DateTime<Local>,
}

/// Owns [`DisplayState`] and the time source it is refreshed from
pub struct DisplayController {
    clock: Arc<dyn TimeSource>,
    state: DisplayState,
}

impl DisplayController {
    /// Start with the default vibe and the clock's current reading
    pub fn new(clock: Arc<dyn TimeSource>) -> Self {
        let current_time = clock.now();
        Self {
            clock,
            state: DisplayState {
                selected: DEFAULT_VIBE,
                current_time,
            },
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn selected_vibe(&self) -> &'static VibeRecord {
        self.state.selected.record()
    }

    /// CSS class shared by the hero card and the share button
    pub fn accent_class(&self) -> &'static str {
        self.selected_vibe().accent.as_class()
    }

    pub fn select_vibe(&mut self, id: VibeId) {
        if self.state.selected != id {
            tracing::debug!(vibe = %id, "Vibe selected");
        }
        self.state.selected = id;
    }

    /// Select by string id. Unknown ids leave the selection untouched.
    ///
    /// Returns whether the id matched a catalog vibe.
    pub fn select_vibe_by_id(&mut self, id: &str) -> bool {
        match id.parse::<VibeId>() {
            Ok(vibe) => {
                self.select_vibe(vibe);
                true
            }
            Err(e) => {
                tracing::debug!("Ignoring vibe selection: {}", e);
                false
            }
        }
    }

    /// Refresh the current time from the clock
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.observe_time(now);
    }

    /// Accept a time reading. Readings older than the held one are dropped.
    pub fn observe_time(&mut self, now: DateTime<Local>) {
        if now < self.state.current_time {
            tracing::debug!(
                "Ignoring clock reading {} older than {}",
                now,
                self.state.current_time
            );
            return;
        }
        self.state.current_time = now;
    }

    pub fn formatted_time(&self) -> String {
        format_time(&self.state.current_time)
    }

    pub fn day_descriptor(&self) -> DayDescriptor {
        DayDescriptor::of(&self.state.current_time)
    }

    pub fn share_payload(&self) -> SharePayload {
        SharePayload::compose(self.selected_vibe())
    }

    /// Compose the share text and hand it to `sharer`
    pub fn share(&self, sharer: &dyn TextSharer) -> Result<ShareOutcome> {
        let payload = self.share_payload();
        let outcome = sharer.share(&payload)?;
        tracing::info!(vibe = %self.state.selected, ?outcome, "Greeting shared");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::share::NoSharer;
    use chrono::{NaiveDate, TimeZone};

    fn local(hour: u32, minute: u32) -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    fn controller_at(hour: u32, minute: u32) -> (DisplayController, ManualClock) {
        let clock = ManualClock::new(local(hour, minute));
        (DisplayController::new(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn test_initial_state() {
        let (controller, _) = controller_at(9, 0);
        assert_eq!(controller.state().selected, VibeId::Warm);
        assert_eq!(controller.state().current_time, local(9, 0));
        assert_eq!(controller.accent_class(), "accent-warm");
    }

    #[test]
    fn test_select_vibe_changes_accent() {
        let (mut controller, _) = controller_at(9, 0);
        controller.select_vibe(VibeId::Modern);
        assert_eq!(controller.selected_vibe().id, VibeId::Modern);
        assert_eq!(controller.accent_class(), "accent-modern");
    }

    #[test]
    fn test_unknown_vibe_is_noop() {
        let (mut controller, _) = controller_at(9, 0);
        controller.select_vibe(VibeId::Classic);
        let before = controller.state().clone();
        assert!(!controller.select_vibe_by_id("neon"));
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_tick_reads_clock() {
        let (mut controller, clock) = controller_at(16, 59);
        assert_eq!(controller.day_descriptor(), DayDescriptor::CoffeeAfternoon);
        clock.advance(std::time::Duration::from_secs(60));
        controller.tick();
        assert_eq!(controller.state().current_time, local(17, 0));
        assert_eq!(controller.day_descriptor(), DayDescriptor::WarmEvening);
        assert_eq!(controller.formatted_time(), "5:00 م");
    }

    #[test]
    fn test_time_never_moves_backwards() {
        let (mut controller, clock) = controller_at(10, 0);
        clock.set(local(9, 0));
        controller.tick();
        assert_eq!(controller.state().current_time, local(10, 0));
    }

    #[test]
    fn test_share_without_capability() {
        let (controller, _) = controller_at(10, 0);
        let outcome = controller.share(&NoSharer).unwrap();
        assert_eq!(outcome, ShareOutcome::Skipped);
    }
}
