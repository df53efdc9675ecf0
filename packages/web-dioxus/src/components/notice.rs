use dioxus::prelude::*;

use crate::state::use_app_store;

/// Toast for notices coming back from the machine
#[component]
pub fn NoticeToast() -> Element {
    let store = use_app_store();
    let Some(message) = store.notice.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "toast w-11/12 max-w-sm bg-gray-900 text-white rounded-xl shadow-lg px-4 py-3 flex items-start gap-3",
            role: "status",
            p { class: "text-sm flex-1", "{message}" }
            button {
                class: "text-gray-300 hover:text-white",
                aria_label: "Dismiss",
                onclick: move |_| store.dismiss_notice(),
                "\u{2715}"
            }
        }
    }
}
