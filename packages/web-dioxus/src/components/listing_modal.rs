//! Listing detail modal

use dioxus::prelude::*;
use upthrift_core::domains::listings::Listing;
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[derive(Props, Clone, PartialEq)]
pub struct ListingModalProps {
    pub listing: Listing,
    pub bookmarked: bool,
}

#[component]
pub fn ListingModal(props: ListingModalProps) -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let listing = &props.listing;
    let contributor = &listing.contributor;
    let id = listing.id;
    let mut avatar_failed = use_signal(|| false);

    let details = [
        ("SIZE", listing.size.to_string()),
        ("COLOR", listing.color.clone()),
        ("STYLE", listing.style.clone()),
        ("TYPE", listing.kind.clone()),
    ];

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50",
            onclick: move |_| store.dispatch(AppEvent::ListingClosed),
            div {
                class: "bg-white rounded-3xl w-full max-w-md max-h-[90vh] overflow-y-auto",
                onclick: move |evt| evt.stop_propagation(),

                // Header image
                div {
                    class: "relative",
                    img {
                        src: "{listing.image_url}",
                        alt: "{listing.title}",
                        class: "w-full h-64 object-cover rounded-t-3xl",
                    }
                    button {
                        class: "absolute top-4 left-4 w-10 h-10 bg-white/90 rounded-full shadow",
                        onclick: move |_| store.dispatch(AppEvent::ListingClosed),
                        "\u{2715}"
                    }
                    button {
                        class: "absolute top-4 right-4 w-10 h-10 bg-white/90 rounded-full shadow",
                        onclick: move |_| store.dispatch(AppEvent::BookmarkToggled(id)),
                        if props.bookmarked { "\u{2764}\u{FE0F}" } else { "\u{1F90D}" }
                    }
                }

                div {
                    class: "p-6 space-y-5",
                    div {
                        h2 { class: "{font} text-2xl font-bold text-gray-800", "{listing.title}" }
                        p {
                            class: "{font} text-gray-600 mt-1",
                            "\u{1F4CD} {listing.location} \u{2022} {listing.distance_label()} away"
                        }
                    }

                    // Contributor
                    div {
                        class: "flex items-center gap-3 bg-gray-50 rounded-xl p-4",
                        if avatar_failed() {
                            div {
                                class: "w-12 h-12 rounded-full brand-bg text-white flex items-center justify-center font-semibold",
                                "{contributor.initials()}"
                            }
                        } else {
                            img {
                                src: "{contributor.avatar_url}",
                                alt: "{contributor.name}",
                                class: "w-12 h-12 rounded-full object-cover",
                                onerror: move |_| avatar_failed.set(true),
                            }
                        }
                        div {
                            class: "flex-1",
                            p { class: "{font} font-semibold text-gray-800", "{contributor.name}" }
                            p { class: "text-xs text-gray-500", "Contributor" }
                        }
                        div {
                            class: "text-right",
                            p { class: "{font} font-semibold text-yellow-600", "\u{2B50} {contributor.rating_label()}" }
                            p { class: "text-xs text-gray-500", "{contributor.total_donations} donations" }
                        }
                    }

                    // Attributes
                    div {
                        class: "grid grid-cols-2 gap-3",
                        for (label, value) in details {
                            div {
                                key: "{label}",
                                class: "bg-gray-50 rounded-xl p-3",
                                p { class: "text-xs text-gray-500", "{label}" }
                                p { class: "{font} font-semibold text-gray-800", "{value}" }
                            }
                        }
                    }

                    // Actions
                    div {
                        class: "space-y-3",
                        button {
                            class: "w-full py-3 rounded-xl border-2 brand-border brand-text font-medium",
                            onclick: move |_| store.dispatch(AppEvent::VirtualTryOnRequested),
                            "\u{1F441} Virtual Try-On"
                        }
                        div {
                            class: "flex gap-3",
                            button {
                                class: "flex-1 py-3 rounded-xl brand-bg text-white font-medium",
                                onclick: move |_| store.dispatch(AppEvent::InterestExpressed(id)),
                                "\u{1F4AC} I'm Interested!"
                            }
                            button {
                                class: "px-6 py-3 rounded-xl bg-gray-100 text-gray-700",
                                onclick: move |_| store.dispatch(AppEvent::ListingClosed),
                                "Exit"
                            }
                        }
                    }

                    div {
                        class: "bg-green-50 rounded-xl p-4 text-center",
                        p { class: "{font} font-semibold text-green-700", "Free to Good Home!" }
                        p {
                            class: "text-xs text-green-600 mt-1",
                            "This item is contributed for free. Message the contributor to arrange pickup."
                        }
                    }
                }
            }
        }
    }
}
