//! Support tab: rule-based chat, FAQ and contact options

use chrono::Utc;
use dioxus::prelude::*;
use upthrift_core::domains::support::{SupportMessage, CONTACTS, FAQ, SUPPORT_HOURS};
use upthrift_core::machines::AppEvent;

use crate::components::MessageBubble;
use crate::state::use_app_store;

#[component]
pub fn SupportTab() -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let mut input = use_signal(String::new);
    let mut open_faq = use_signal(|| None::<usize>);

    let messages: Vec<SupportMessage> = store.machine.read().transcript().messages().to_vec();

    let mut send = move || {
        let text = input();
        if text.trim().is_empty() {
            return;
        }
        store.dispatch(AppEvent::SupportMessageSent {
            text,
            at: Utc::now(),
        });
        input.set(String::new());
    };

    rsx! {
        div {
            class: "p-4 space-y-4",

            // Chat
            div {
                class: "bg-white rounded-2xl shadow-sm border border-gray-100 overflow-hidden",
                div {
                    class: "brand-bg text-white px-4 py-3",
                    h2 { class: "{font} font-semibold", "UpThrift Support" }
                    p { class: "text-xs opacity-80", "We usually reply instantly" }
                }
                div {
                    class: "h-72 overflow-y-auto p-4 space-y-3",
                    for message in messages {
                        MessageBubble { key: "{message.id}", message: message.clone() }
                    }
                }
                div {
                    class: "flex gap-2 p-3 border-t border-gray-100",
                    input {
                        r#type: "text",
                        value: "{input}",
                        placeholder: "Type your message...",
                        class: "flex-1 px-4 py-2 border border-gray-300 rounded-xl {font}",
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    button {
                        class: "px-4 py-2 brand-bg text-white rounded-xl font-medium disabled:opacity-50",
                        disabled: input.read().trim().is_empty(),
                        onclick: move |_| send(),
                        "Send"
                    }
                }
            }

            // FAQ
            div {
                class: "bg-white rounded-2xl p-4 shadow-sm border border-gray-100",
                h3 { class: "{font} font-semibold text-gray-800 mb-3", "Frequently Asked Questions" }
                for (index, item) in FAQ.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "border-b border-gray-50 last:border-0",
                        button {
                            class: "w-full flex justify-between items-center py-3 text-left {font} text-gray-800",
                            onclick: move |_| {
                                let next = if open_faq() == Some(index) { None } else { Some(index) };
                                open_faq.set(next);
                            },
                            span { "{item.question}" }
                            span { class: "text-gray-400", if open_faq() == Some(index) { "\u{2212}" } else { "+" } }
                        }
                        if open_faq() == Some(index) {
                            p { class: "pb-3 {font} text-gray-600", "{item.answer}" }
                        }
                    }
                }
            }

            // Contact
            div {
                class: "bg-white rounded-2xl p-4 shadow-sm border border-gray-100",
                h3 { class: "{font} font-semibold text-gray-800 mb-3", "Contact Us" }
                div {
                    class: "grid grid-cols-2 gap-3",
                    for contact in CONTACTS.iter() {
                        div {
                            key: "{contact.label}",
                            class: "p-3 rounded-xl brand-tint text-center",
                            p { class: "text-sm font-medium brand-text", "{contact.label}" }
                            p { class: "text-xs text-gray-600 mt-1", "{contact.value}" }
                        }
                    }
                }
                p { class: "text-xs text-gray-500 text-center mt-3", "{SUPPORT_HOURS}" }
            }
        }
    }
}
