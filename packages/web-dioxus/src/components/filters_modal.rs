//! Filters sheet for the feed

use dioxus::prelude::*;
use upthrift_core::domains::listings::options::{
    COLORS, MAX_RADIUS_MILES, MIN_RADIUS_MILES, STYLES, TYPES,
};
use upthrift_core::domains::listings::{FilterCriteria, FilterField};
use upthrift_core::machines::AppEvent;

use crate::state::{use_app_store, AppStore};

/// Apply an edit to the current criteria and send the result to the machine.
fn update_criteria(store: AppStore, edit: impl FnOnce(&mut FilterCriteria)) {
    let mut criteria = store.machine.read().catalog().criteria().clone();
    edit(&mut criteria);
    store.dispatch(AppEvent::FilterChanged(criteria));
}

const UNSELECTED: &str = "bg-[#bad3de] text-[#132c0b] hover:bg-[#a8c8d4]";

fn chip_class(field: FilterField, selected: bool) -> &'static str {
    if !selected {
        return UNSELECTED;
    }
    match field {
        FilterField::Style => "bg-green-600 text-white",
        FilterField::Color => "bg-blue-600 text-white",
        FilterField::Type => "bg-purple-600 text-white",
    }
}

fn favorites_class(active: bool) -> &'static str {
    if active {
        "bg-red-600 text-white"
    } else {
        UNSELECTED
    }
}

fn options(field: FilterField) -> &'static [&'static str] {
    match field {
        FilterField::Style => STYLES,
        FilterField::Color => COLORS,
        FilterField::Type => TYPES,
    }
}

#[component]
pub fn FiltersModal(on_close: EventHandler<()>) -> Element {
    let store = use_app_store();
    let criteria = store.machine.read().catalog().criteria().clone();
    let radius = criteria.radius.unwrap_or(MAX_RADIUS_MILES);

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-end justify-center z-50",
            div {
                class: "bg-white w-full max-w-md rounded-t-3xl max-h-[85vh] overflow-y-auto p-6",

                // Header
                div {
                    class: "flex items-center justify-between mb-6",
                    h2 { class: "text-xl font-semibold text-gray-800", "Filters" }
                    button {
                        class: "p-2 rounded-full hover:bg-gray-100 text-gray-500",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }

                div {
                    class: "space-y-6",

                    // Favorites
                    button {
                        class: "w-full py-3 rounded-xl font-medium {favorites_class(criteria.show_favorites_only)}",
                        onclick: move |_| update_criteria(store, FilterCriteria::toggle_favorites_only),
                        if criteria.show_favorites_only {
                            "\u{2764}\u{FE0F} Showing Favorites Only"
                        } else {
                            "\u{1F90D} Show Favorites Only"
                        }
                    }

                    // Radius
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Distance: {radius} miles"
                        }
                        input {
                            r#type: "range",
                            min: "{MIN_RADIUS_MILES}",
                            max: "{MAX_RADIUS_MILES}",
                            value: "{radius}",
                            class: "w-full accent-[#36723f]",
                            oninput: move |evt| {
                                if let Ok(miles) = evt.value().parse::<u32>() {
                                    update_criteria(store, |c| c.set_radius(miles));
                                }
                            },
                        }
                        div {
                            class: "flex justify-between text-xs text-gray-500 mt-1",
                            span { "{MIN_RADIUS_MILES} mi" }
                            span { "{MAX_RADIUS_MILES} mi" }
                        }
                    }

                    for field in FilterField::variants().iter().copied() {
                        div {
                            key: "{field.label()}",
                            h3 { class: "text-sm font-medium text-gray-700 mb-2", "{field.label()}" }
                            div {
                                class: "flex flex-wrap gap-2",
                                for value in options(field).iter().copied() {
                                    button {
                                        key: "{value}",
                                        class: "px-3 py-1.5 rounded-full text-sm transition-colors {chip_class(field, criteria.value(field) == Some(value))}",
                                        onclick: move |_| update_criteria(store, |c| c.toggle(field, value)),
                                        "{value}"
                                    }
                                }
                            }
                        }
                    }
                }

                // Actions
                div {
                    class: "flex gap-3 mt-8",
                    button {
                        class: "flex-1 py-3 rounded-xl border border-gray-300 text-gray-700 hover:bg-gray-50",
                        onclick: move |_| store.dispatch(AppEvent::FiltersCleared),
                        "Clear All"
                    }
                    button {
                        class: "flex-1 py-3 rounded-xl brand-bg text-white font-medium",
                        onclick: move |_| on_close.call(()),
                        "Apply Filters"
                    }
                }
            }
        }
    }
}
