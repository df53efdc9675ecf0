//! Profile tab

use dioxus::prelude::*;
use upthrift_core::domains::contributions::Contribution;
use upthrift_core::domains::profile::{ActivityKind, RECENT_ACTIVITY, SETTINGS_LINKS};
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[component]
pub fn ProfileTab() -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(String::new);

    let machine = store.machine.read();
    let profile = machine.profile().clone();
    let contributions: Vec<Contribution> = machine.contributions().to_vec();
    let favorites = machine.catalog().bookmarks().len();
    drop(machine);

    let contributed = profile.items_contributed_with(contributions.len());
    let start_edit = {
        let bio = profile.bio.clone();
        move |_| {
            draft.set(bio.clone());
            editing.set(true);
        }
    };

    rsx! {
        div {
            class: "p-4 space-y-4",

            // Header card
            div {
                class: "bg-white rounded-2xl p-6 shadow-sm border border-gray-100 text-center",
                img {
                    src: "{profile.avatar_url}",
                    alt: "{profile.name}",
                    class: "w-24 h-24 rounded-full mx-auto object-cover border-4 brand-border",
                }
                h2 { class: "text-xl font-bold text-gray-800 mt-3", "{profile.name}" }
                p { class: "{font} text-gray-500", "\u{1F4CD} {profile.location}" }

                if editing() {
                    div {
                        class: "mt-3 space-y-2",
                        textarea {
                            value: "{draft}",
                            rows: "3",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-xl {font}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        div {
                            class: "flex gap-2 justify-center",
                            button {
                                class: "px-4 py-2 brand-bg text-white rounded-xl text-sm",
                                onclick: move |_| {
                                    store.dispatch(AppEvent::BioUpdated(draft()));
                                    editing.set(false);
                                },
                                "Save"
                            }
                            button {
                                class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-xl text-sm",
                                onclick: move |_| editing.set(false),
                                "Cancel"
                            }
                        }
                    }
                } else {
                    p { class: "{font} text-gray-600 mt-3", "{profile.bio}" }
                    button {
                        class: "mt-2 text-sm brand-text font-medium",
                        onclick: start_edit,
                        "Edit Bio"
                    }
                }
            }

            // Stats
            div {
                class: "grid grid-cols-4 gap-2",
                Stat { value: contributed.to_string(), label: "Contributed" }
                Stat { value: profile.stats.items_collected.to_string(), label: "Collected" }
                Stat { value: format!("{:.1}", profile.stats.rating), label: "Rating" }
                Stat { value: favorites.to_string(), label: "Favorites" }
            }

            // Items posted this session
            if !contributions.is_empty() {
                div {
                    class: "bg-white rounded-2xl p-4 shadow-sm border border-gray-100",
                    h3 { class: "{font} font-semibold text-gray-800 mb-3", "Your Contributions" }
                    div {
                        class: "grid grid-cols-2 gap-3",
                        for contribution in contributions {
                            div {
                                key: "{contribution.id}",
                                class: "rounded-xl overflow-hidden border border-gray-100",
                                img {
                                    src: "{contribution.image_url}",
                                    alt: "{contribution.title}",
                                    class: "w-full h-28 object-cover",
                                }
                                div {
                                    class: "p-2",
                                    p { class: "text-sm font-medium text-gray-800 truncate", "{contribution.title}" }
                                    p {
                                        class: "text-xs text-gray-500",
                                        "Size {contribution.size} \u{2022} {contribution.condition}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Recent activity
            div {
                class: "bg-white rounded-2xl p-4 shadow-sm border border-gray-100",
                h3 { class: "{font} font-semibold text-gray-800 mb-3", "Recent Activity" }
                for activity in RECENT_ACTIVITY.iter() {
                    div {
                        key: "{activity.item}",
                        class: "flex items-center justify-between py-2 border-b border-gray-50 last:border-0",
                        div {
                            p {
                                class: "{font} text-gray-800",
                                "{activity.kind.label()} {activity.item}"
                            }
                            p { class: "text-xs text-gray-500", "{activity.date}" }
                        }
                        span {
                            class: activity_badge_class(activity.kind),
                            "{activity.kind.label()}"
                        }
                    }
                }
            }

            // Settings links
            div {
                class: "bg-white rounded-2xl shadow-sm border border-gray-100",
                for link in SETTINGS_LINKS.iter() {
                    button {
                        key: "{link}",
                        class: "w-full flex items-center justify-between px-4 py-3 border-b border-gray-50 last:border-0 {font} text-gray-700",
                        span { "{link}" }
                        span { class: "text-gray-400", "\u{203A}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Stat(value: String, label: &'static str) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl p-3 text-center shadow-sm border border-gray-100",
            p { class: "text-lg font-bold brand-text", "{value}" }
            p { class: "text-[10px] text-gray-500", "{label}" }
        }
    }
}

fn activity_badge_class(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Contributed => "px-2 py-1 rounded-full text-xs bg-green-100 text-green-700",
        ActivityKind::Collected => "px-2 py-1 rounded-full text-xs bg-blue-100 text-blue-700",
    }
}
