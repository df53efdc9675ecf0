use dioxus::prelude::*;
use upthrift_core::domains::support::SupportMessage;

use crate::state::use_app_store;

/// A single support transcript message
#[component]
pub fn MessageBubble(message: SupportMessage) -> Element {
    let font = use_app_store().font_class();
    let (row, bubble) = if message.is_bot() {
        ("flex justify-start", "bg-gray-100 text-gray-800")
    } else {
        ("flex justify-end", "brand-bg text-white")
    };

    rsx! {
        div {
            class: "{row}",
            div {
                class: "max-w-[80%] rounded-2xl px-4 py-2 {bubble}",
                p { class: "{font}", "{message.text}" }
                p { class: "text-[10px] opacity-70 mt-1", "{message.time_label()}" }
            }
        }
    }
}
