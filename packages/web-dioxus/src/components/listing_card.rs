//! Listing card in the feed grid

use dioxus::prelude::*;
use upthrift_core::domains::listings::Listing;
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[derive(Props, Clone, PartialEq)]
pub struct ListingCardProps {
    pub listing: Listing,
    pub bookmarked: bool,
}

#[component]
pub fn ListingCard(props: ListingCardProps) -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let listing = &props.listing;
    let id = listing.id;
    let heart = if props.bookmarked { "\u{2764}\u{FE0F}" } else { "\u{1F90D}" };

    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-sm border border-gray-100 overflow-hidden flex flex-col",

            // Image + overlays
            div {
                class: "relative",
                img {
                    src: "{listing.image_url}",
                    alt: "{listing.title}",
                    class: "w-full h-40 object-cover",
                }
                button {
                    class: "absolute top-2 right-2 w-8 h-8 bg-white/90 rounded-full flex items-center justify-center shadow",
                    aria_label: "Toggle favorite",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        store.dispatch(AppEvent::BookmarkToggled(id));
                    },
                    "{heart}"
                }
                span {
                    class: "absolute bottom-2 left-2 bg-black/60 text-white text-xs px-2 py-0.5 rounded-full",
                    "{listing.distance_label()}"
                }
            }

            div {
                class: "p-3 flex flex-col flex-grow",
                h3 {
                    class: "{font} font-semibold text-gray-800 line-clamp-1",
                    "{listing.title}"
                }
                p { class: "{font} text-gray-500 text-xs mb-2", "{listing.location}" }
                div {
                    class: "flex items-center justify-between mt-auto",
                    span {
                        class: "text-xs brand-tint brand-text px-2 py-0.5 rounded-full font-medium",
                        "Size {listing.size}"
                    }
                    button {
                        class: "text-xs brand-text font-medium hover:underline",
                        onclick: move |_| store.dispatch(AppEvent::ListingSelected(id)),
                        "\u{1F441} Details"
                    }
                }
            }
        }
    }
}
