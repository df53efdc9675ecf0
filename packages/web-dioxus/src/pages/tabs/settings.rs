//! Settings tab: text size

use dioxus::prelude::*;
use upthrift_core::domains::preferences::FontSize;
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[component]
pub fn SettingsTab() -> Element {
    let store = use_app_store();
    let current = store.machine.read().font_size();

    rsx! {
        div {
            class: "p-4 space-y-4",
            div {
                class: "bg-white rounded-2xl p-6 shadow-sm border border-gray-100",
                h2 { class: "text-lg font-semibold text-gray-800 mb-1", "Text Size" }
                p { class: "text-sm text-gray-500 mb-4", "Choose the text size that is easiest for you to read." }

                div {
                    class: "space-y-2",
                    for size in FontSize::variants().iter().copied() {
                        button {
                            key: "{size.label()}",
                            class: font_option_class(size == current),
                            onclick: move |_| store.dispatch(AppEvent::FontSizeChanged(size)),
                            span { class: "font-medium text-gray-800", "{size.label()}" }
                            span { class: "{size.css_class()} text-gray-600", "Sample text" }
                        }
                    }
                }
            }

            div {
                class: "bg-white rounded-2xl p-6 shadow-sm border border-gray-100",
                h3 { class: "text-sm font-semibold text-gray-500 mb-2", "Preview" }
                p {
                    class: "{current.css_class()} text-gray-800",
                    "This is how text will appear throughout UpThrift."
                }
            }
        }
    }
}

fn font_option_class(selected: bool) -> &'static str {
    if selected {
        "w-full flex items-center justify-between px-4 py-3 rounded-xl border-2 brand-border brand-tint"
    } else {
        "w-full flex items-center justify-between px-4 py-3 rounded-xl border-2 border-gray-200"
    }
}
