//! Welcome page - the single screen of Al-Majlis.
//!
//! Owns the display controller, keeps the clock ticking while mounted, and
//! routes the two user actions (vibe selection, share) into it.

use dioxus::prelude::*;
use majlis_core::{ClockTicker, DisplayController, ShareOutcome, VibeId};

use crate::components::{GreetingGrid, HeroCard, SharePanel, VibePanel};
use crate::context::{use_app_config, use_sharer, use_time_source};
use crate::host::acknowledge_copy;

/// Inline notice shown when the clipboard write fails
const COPY_FAILED_NOTICE: &str = "تعذّر نسخ التحية، حاول مرة أخرى.";

/// Welcome page component.
#[component]
pub fn Welcome() -> Element {
    let config = use_app_config();
    let clock = use_time_source();
    let sharer = use_sharer();

    let mut controller = use_signal({
        let clock = clock.clone();
        move || DisplayController::new(clock)
    });
    let mut share_notice: Signal<Option<&'static str>> = use_signal(|| None);

    // The ticker lives inside this scoped future: unmounting the page drops
    // the future, which drops the ticker and aborts its task.
    use_future(move || {
        let clock = clock.clone();
        let period = config.tick_period;
        async move {
            let mut ticker = ClockTicker::start(clock, period);
            while let Some(now) = ticker.next().await {
                controller.write().observe_time(now);
            }
        }
    });

    let on_select = move |id: VibeId| {
        controller.write().select_vibe(id);
    };

    let on_share = move |_: ()| {
        let Some(sharer) = sharer() else {
            tracing::debug!("Share pressed before host capabilities were probed");
            return;
        };

        match controller.read().share(sharer.as_ref()) {
            Ok(ShareOutcome::Copied) => {
                share_notice.set(None);
                spawn(acknowledge_copy());
            }
            Ok(_) => share_notice.set(None),
            Err(e) if e.needs_notice() => {
                tracing::warn!("Share failed: {}", e);
                share_notice.set(Some(COPY_FAILED_NOTICE));
            }
            Err(e) => {
                tracing::debug!("Share not completed: {}", e);
                share_notice.set(None);
            }
        }
    };

    let (selected, accent, time, descriptor) = {
        let state = controller.read();
        (
            state.selected_vibe().id,
            state.accent_class(),
            state.formatted_time(),
            state.day_descriptor().label(),
        )
    };

    rsx! {
        main { class: "page", lang: "ar", dir: "rtl",
            section { class: "hero",
                HeroCard {
                    accent: accent,
                    time: time,
                    descriptor: descriptor,
                }
                VibePanel {
                    selected: selected,
                    on_select: on_select,
                }
            }

            GreetingGrid {}

            SharePanel {
                accent: accent,
                ready: sharer.read().is_some(),
                notice: share_notice(),
                on_share: on_share,
            }
        }
    }
}
