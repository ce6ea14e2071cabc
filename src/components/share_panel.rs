//! Call-to-action panel with the share button.

use dioxus::prelude::*;

/// Props for the share panel component.
#[derive(Props, Clone, PartialEq)]
pub struct SharePanelProps {
    /// Accent class of the active vibe, applied to the button
    pub accent: &'static str,
    /// Whether a share capability has been selected yet
    pub ready: bool,
    /// Inline notice shown under the button, if any
    #[props(!optional)]
    pub notice: Option<&'static str>,
    /// Handler called when the share button is pressed
    pub on_share: EventHandler<()>,
}

/// Share section. The button stays disabled until the host has been probed.
#[component]
pub fn SharePanel(props: SharePanelProps) -> Element {
    let class = share_button_class(props.accent, props.ready);

    rsx! {
        section { class: "cta",
            h2 { "اصنع لحظة لقاء لا تُنسى" }
            p {
                "شارك التحية التي تعجبك على منصاتك أو أرسلها لأصدقائك. نشر الدفء يبدأ بكلمة \"هلا\"."
            }
            button {
                class: "{class}",
                r#type: "button",
                disabled: !props.ready,
                "aria-busy": if props.ready { "false" } else { "true" },
                onclick: move |_| props.on_share.call(()),
                "شارك التحية الآن"
            }
            if let Some(notice) = props.notice {
                p { class: "share-notice", role: "status", "{notice}" }
            }
        }
    }
}

fn share_button_class(accent: &str, ready: bool) -> String {
    if ready {
        format!("share-button {accent}")
    } else {
        format!("share-button {accent} is-pending")
    }
}
