//! Hero card with the live clock.

use dioxus::prelude::*;

/// Props for the hero card component.
#[derive(Props, Clone, PartialEq)]
pub struct HeroCardProps {
    /// Accent class of the active vibe
    pub accent: &'static str,
    /// Formatted current time
    pub time: String,
    /// Time-of-day descriptor label
    pub descriptor: &'static str,
}

/// Hero card: eyebrow, title, lead text and the clock line.
#[component]
pub fn HeroCard(props: HeroCardProps) -> Element {
    rsx! {
        div { class: "hero-card {props.accent}",
            p { class: "eyebrow", "المجلس الرقمي" }
            h1 { "هلا وعدت الروح إلى بيتها" }
            p { class: "lead",
                "فضاء عربي حديث يرحب بك، يعرّفك على جمال التحايا، ويلهمك أن تبدأ حديثًا محبًا."
            }
            div { class: "time-note",
                span { "aria-hidden": "true", "🕒" }
                div {
                    strong { "{props.time}" }
                    span { "{props.descriptor} ينتظر حديثك الجميل." }
                }
            }
        }
    }
}
