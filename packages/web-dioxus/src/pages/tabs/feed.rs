//! Feed tab: filtered, paginated listing grid

use dioxus::prelude::*;
use upthrift_core::domains::listings::Listing;

use crate::components::{FiltersModal, ListingCard, ListingModal, Pagination};
use crate::state::use_app_store;

#[component]
pub fn FeedTab() -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let mut show_filters = use_signal(|| false);

    let machine = store.machine.read();
    let catalog = machine.catalog();
    let page = catalog.visible_page();
    let cards: Vec<(Listing, bool)> = page
        .items
        .iter()
        .map(|listing| ((*listing).clone(), catalog.is_bookmarked(listing.id)))
        .collect();
    let chips = catalog.criteria().active_chips();
    let (current_page, total_pages, total_items) = (page.page, page.total_pages, page.total_items);
    let selected = machine
        .selected_listing()
        .map(|listing| (listing.clone(), catalog.is_bookmarked(listing.id)));
    drop(machine);

    rsx! {
        div {
            class: "p-4",

            // Header
            div {
                class: "flex items-center justify-between mb-4",
                div {
                    h2 { class: "{font} font-semibold text-gray-800", "Available Items" }
                    p { class: "text-xs text-gray-500", "{total_items} items" }
                }
                button {
                    class: "flex items-center gap-2 px-4 py-2 bg-white rounded-xl shadow-sm brand-text font-medium",
                    onclick: move |_| show_filters.set(true),
                    "\u{2699} Filters"
                }
            }

            // Active filter chips
            if !chips.is_empty() {
                div {
                    class: "flex flex-wrap gap-2 mb-4",
                    for chip in chips {
                        span {
                            key: "{chip}",
                            class: "px-3 py-1 rounded-full text-xs font-medium brand-tint brand-text",
                            "{chip}"
                        }
                    }
                }
            }

            if cards.is_empty() {
                div {
                    class: "bg-white rounded-2xl p-8 text-center shadow-sm",
                    p { class: "{font} text-gray-500", "No items match your filters" }
                    p { class: "text-xs text-gray-400 mt-1", "Try widening the distance or clearing a filter" }
                }
            } else {
                div {
                    class: "grid grid-cols-2 gap-3",
                    for (listing, bookmarked) in cards {
                        ListingCard {
                            key: "{listing.id}",
                            listing,
                            bookmarked,
                        }
                    }
                }
            }

            Pagination { page: current_page, total_pages }

            if show_filters() {
                FiltersModal { on_close: move |_| show_filters.set(false) }
            }

            if let Some((listing, bookmarked)) = selected {
                ListingModal { listing, bookmarked }
            }
        }
    }
}
