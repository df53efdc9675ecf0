//! Fixed bottom tab bar

use dioxus::prelude::*;
use upthrift_core::machines::{AppEvent, Tab};

use crate::state::use_app_store;

fn icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Feed => "\u{2764}\u{FE0F}",     // ❤️
        Tab::Chat => "\u{1F4AC}",            // 💬
        Tab::Contribute => "\u{2795}",       // ➕
        Tab::Profile => "\u{1F464}",         // 👤
        Tab::Support => "\u{2753}",          // ❓
        Tab::Settings => "\u{2699}\u{FE0F}", // ⚙️
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "flex flex-col items-center px-2 py-1 rounded-xl brand-text brand-tint font-semibold"
    } else {
        "flex flex-col items-center px-2 py-1 rounded-xl text-gray-500 hover:text-gray-700"
    }
}

#[component]
pub fn BottomNav() -> Element {
    let store = use_app_store();
    let active = store.machine.read().tab();

    rsx! {
        nav {
            class: "bottom-nav bg-white border-t border-gray-200 rounded-t-2xl shadow-lg",
            div {
                class: "flex justify-around py-2",
                for tab in Tab::variants().iter().copied() {
                    button {
                        key: "{tab.label()}",
                        class: tab_class(tab == active),
                        onclick: move |_| store.dispatch(AppEvent::TabSelected(tab)),
                        span { class: "text-lg", "{icon(tab)}" }
                        span { class: "text-xs mt-0.5", "{tab.label()}" }
                    }
                }
            }
        }
    }
}
