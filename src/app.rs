use std::sync::Arc;

use dioxus::prelude::*;
use majlis_core::{select_sharer, AppConfig, SystemClock, TimeSource, PAGE_DESCRIPTION, PAGE_TITLE};

use crate::context::SharedSharer;
use crate::host::{probe_capabilities, SystemClipboard, WebviewShare};
use crate::pages::Welcome;
use crate::theme::{accent_styles, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The welcome screen
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Welcome {},
}

/// Root application component.
///
/// Provides global styles, the clock, the share capability and routing.
#[component]
pub fn App() -> Element {
    let clock = use_hook(|| Arc::new(SystemClock) as Arc<dyn TimeSource>);
    let mut sharer: Signal<Option<SharedSharer>> = use_signal(|| None);

    use_context_provider(AppConfig::default);
    use_context_provider(|| clock);
    use_context_provider(|| sharer);

    // Probe the host once the webview is up and pick the share path
    use_effect(move || {
        spawn(async move {
            let caps = probe_capabilities().await;
            tracing::info!(
                native_share = caps.native_share,
                clipboard = caps.clipboard,
                "Host capabilities probed"
            );
            sharer.set(Some(select_sharer(caps, WebviewShare, SystemClipboard)));
        });
    });

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: PAGE_DESCRIPTION }
        style { {GLOBAL_STYLES} }
        style { {accent_styles()} }
        Router::<Route> {}
    }
}
