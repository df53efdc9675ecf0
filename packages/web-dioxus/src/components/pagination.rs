//! Back / Next pager under the feed grid

use dioxus::prelude::*;
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[component]
pub fn Pagination(page: usize, total_pages: usize) -> Element {
    let store = use_app_store();

    rsx! {
        div {
            class: "flex items-center justify-between bg-white rounded-xl p-3 shadow-sm mt-4",
            button {
                class: "flex items-center gap-1 px-3 py-2 rounded-lg brand-text disabled:text-gray-300 disabled:cursor-not-allowed",
                disabled: page <= 1,
                onclick: move |_| store.dispatch(AppEvent::PreviousPage),
                "\u{2039}"
                span { class: "text-sm", "Back" }
            }
            span {
                class: "text-sm text-gray-600",
                "Page {page} of {total_pages}"
            }
            button {
                class: "flex items-center gap-1 px-3 py-2 rounded-lg brand-text disabled:text-gray-300 disabled:cursor-not-allowed",
                disabled: page >= total_pages,
                onclick: move |_| store.dispatch(AppEvent::NextPage),
                span { class: "text-sm", "Next" }
                "\u{203A}"
            }
        }
    }
}
