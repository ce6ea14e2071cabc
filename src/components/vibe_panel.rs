//! Vibe selection panel.
//!
//! One button per catalog vibe, in catalog order. The selected one carries
//! `is-active` and `aria-pressed="true"`.

use dioxus::prelude::*;
use majlis_core::{vibes, VibeId, VibeRecord};

/// Props for the VibePanel component.
#[derive(Props, Clone, PartialEq)]
pub struct VibePanelProps {
    /// Currently selected vibe
    pub selected: VibeId,
    /// Handler called when a vibe button is pressed
    pub on_select: EventHandler<VibeId>,
}

/// Side panel listing the selectable vibes.
///
/// # Example
///
/// ```ignore
/// VibePanel {
///     selected: controller.read().selected_vibe().id,
///     on_select: move |id| controller.write().select_vibe(id),
/// }
/// ```
#[component]
pub fn VibePanel(props: VibePanelProps) -> Element {
    rsx! {
        aside { class: "vibe-panel",
            h2 { "اختر الأجواء التي تناسبك" }
            p { class: "vibe-desc",
                "يتغير المشهد حسب رؤيتك. اضغط على الخيار لتلهم بطاقتك الترحيبية."
            }
            div { class: "vibe-options",
                for vibe in vibes().iter() {
                    {
                        let on_select = props.on_select; // Callback is Copy
                        let id = vibe.id;

                        rsx! {
                            VibeButton {
                                key: "{id}",
                                vibe: vibe,
                                is_active: props.selected == id,
                                on_click: move |_| on_select.call(id),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Props for a single vibe button.
#[derive(Props, Clone, PartialEq)]
struct VibeButtonProps {
    vibe: &'static VibeRecord,
    is_active: bool,
    on_click: EventHandler<()>,
}

#[component]
fn VibeButton(props: VibeButtonProps) -> Element {
    let class = vibe_button_class(props.vibe, props.is_active);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-pressed": if props.is_active { "true" } else { "false" },
            onclick: move |_| props.on_click.call(()),
            strong { "{props.vibe.label}" }
            span { "{props.vibe.caption}" }
        }
    }
}

fn vibe_button_class(vibe: &VibeRecord, is_active: bool) -> String {
    if is_active {
        format!("vibe-button {} is-active", vibe.accent)
    } else {
        format!("vibe-button {}", vibe.accent)
    }
}
