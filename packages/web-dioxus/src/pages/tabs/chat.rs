//! Chat tab: conversation list and the active conversation

use dioxus::prelude::*;
use upthrift_core::domains::chat::{search_conversations, ActiveConversation};
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[component]
pub fn ChatTab() -> Element {
    let store = use_app_store();
    let active = store.machine.read().active_conversation().cloned();

    match active {
        Some(active) => rsx! { ConversationView { active } },
        None => rsx! { ConversationList {} },
    }
}

fn preview_class(unread: bool) -> &'static str {
    if unread {
        "font-medium text-gray-900"
    } else {
        "text-gray-600"
    }
}

#[component]
fn ConversationList() -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let mut search_term = use_signal(String::new);

    let conversations: Vec<_> = {
        let machine = store.machine.read();
        search_conversations(machine.conversations(), &search_term.read())
            .into_iter()
            .cloned()
            .collect()
    };

    rsx! {
        div {
            class: "p-4 flex flex-col",

            h2 { class: "{font} font-semibold text-gray-800 mb-3", "Messages" }
            input {
                r#type: "text",
                placeholder: "Search conversations...",
                value: "{search_term}",
                oninput: move |evt| search_term.set(evt.value()),
                class: "w-full px-4 py-3 mb-4 bg-white rounded-xl border border-gray-200 focus:outline-none focus:ring-2 focus:ring-[#36723f]",
            }

            div {
                class: "space-y-2",
                if conversations.is_empty() {
                    div {
                        class: "flex flex-col items-center justify-center py-12 text-center",
                        span { class: "text-5xl text-gray-300 mb-4", "\u{1F4AC}" }
                        h3 { class: "{font} font-medium text-gray-500 mb-2", "No conversations found" }
                        p {
                            class: "{font} text-gray-400",
                            if search_term.read().is_empty() {
                                "Start chatting about items you're interested in!"
                            } else {
                                "Try adjusting your search terms"
                            }
                        }
                    }
                }
                for conversation in conversations {
                    div {
                        key: "{conversation.id}",
                        class: "bg-white rounded-xl p-4 shadow-sm border border-gray-100 hover:shadow-md transition-all cursor-pointer",
                        onclick: move |_| store.dispatch(AppEvent::ConversationOpened(conversation.id)),
                        div {
                            class: "flex items-center space-x-3",
                            div {
                                class: "relative",
                                img {
                                    src: "{conversation.avatar_url}",
                                    alt: "{conversation.name}",
                                    class: "w-12 h-12 rounded-full object-cover",
                                }
                                if conversation.unread {
                                    div { class: "absolute -top-1 -right-1 w-4 h-4 brand-bg rounded-full border-2 border-white" }
                                }
                            }
                            div {
                                class: "flex-1 min-w-0",
                                div {
                                    class: "flex items-center justify-between mb-1",
                                    h3 { class: "{font} font-medium truncate text-gray-900", "{conversation.name}" }
                                    span { class: "text-xs text-gray-500", "{conversation.time}" }
                                }
                                p { class: "{font} brand-text mb-1 font-medium", "About: {conversation.item}" }
                                p {
                                    class: "{font} truncate {preview_class(conversation.unread)}",
                                    "{conversation.last_message}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "mt-4 p-3 bg-blue-50 rounded-xl",
                p {
                    class: "{font} text-blue-700 text-center",
                    "\u{1F4AC} Chat directly with contributors to ask questions and arrange pickups"
                }
            }
        }
    }
}

#[component]
fn ConversationView(active: ActiveConversation) -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let origin = store.machine.read().config().public_origin.clone();
    let message = active.prefilled_message(&origin);
    let link = active.listing_link(&origin);

    rsx! {
        div {
            class: "p-4 flex flex-col",

            // Header
            div {
                class: "flex items-center space-x-3 mb-4 bg-white p-4 rounded-xl shadow-sm",
                button {
                    class: "brand-text p-2 rounded-full hover:bg-gray-100",
                    onclick: move |_| store.dispatch(AppEvent::ConversationClosed),
                    "\u{2190}"
                }
                img {
                    src: "{active.avatar_url}",
                    alt: "{active.name}",
                    class: "w-12 h-12 rounded-full object-cover",
                }
                div {
                    class: "flex-1",
                    h3 { class: "{font} font-semibold text-gray-800", "{active.name}" }
                    p { class: "{font} brand-text", "Contributor" }
                }
            }

            if let (Some(listing), Some(link)) = (&active.context_listing, &link) {
                div {
                    class: "brand-tint p-4 rounded-xl mb-4",
                    p { class: "{font} font-medium brand-text mb-2", "\u{1F517} About this item:" }
                    div {
                        class: "flex items-center space-x-3",
                        img {
                            src: "{listing.image_url}",
                            alt: "{listing.title}",
                            class: "w-16 h-16 rounded-lg object-cover",
                        }
                        div {
                            class: "flex-1 min-w-0",
                            h4 { class: "{font} font-semibold text-gray-800", "{listing.title}" }
                            p { class: "{font} text-gray-600", "Size {listing.size} \u{2022} {listing.location}" }
                            p { class: "text-xs brand-text mt-1 break-all", "Listing: {link}" }
                        }
                    }
                }
            }

            div {
                class: "bg-white p-4 rounded-xl shadow-sm mb-4",
                p { class: "{font} text-gray-700", "{message}" }
            }

            div {
                class: "bg-white rounded-xl p-8 shadow-sm text-center",
                span { class: "text-5xl", "\u{1F4AC}" }
                p { class: "{font} brand-text font-medium mt-4", "Your message is ready to send to {active.name}" }
            }
        }
    }
}
