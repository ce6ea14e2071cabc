//! Greeting card grid.

use dioxus::prelude::*;
use majlis_core::{greetings, GreetingRecord, CARD_TAGS};

/// Grid of all catalog greetings, in catalog order.
#[component]
pub fn GreetingGrid() -> Element {
    rsx! {
        section { class: "grid",
            for greeting in greetings().iter() {
                GreetingCard { key: "{greeting.dialect}", greeting: greeting }
            }
        }
    }
}

/// Props for a single greeting card.
#[derive(Props, Clone, PartialEq)]
pub struct GreetingCardProps {
    pub greeting: &'static GreetingRecord,
}

/// One dialect's greeting with transliteration, note and tags.
#[component]
pub fn GreetingCard(props: GreetingCardProps) -> Element {
    let greeting = props.greeting;

    rsx! {
        article { class: "card",
            header {
                p { class: "dialect", "{greeting.dialect}" }
                h3 { "{greeting.phrase}" }
            }
            dl { class: "meta",
                div {
                    dt { "اللفظ بالحروف اللاتينية" }
                    dd { "{greeting.transliteration}" }
                }
                div {
                    dt { "روح التحية" }
                    dd { "{greeting.note}" }
                }
            }
            footer {
                for tag in CARD_TAGS {
                    span { class: "tag", "{tag}" }
                }
            }
        }
    }
}
