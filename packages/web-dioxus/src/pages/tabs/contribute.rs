//! Contribute tab: post an item for free

use chrono::Utc;
use dioxus::prelude::*;
use upthrift_core::domains::contributions::{ContributionForm, MAX_PHOTOS, PICKUP_LOCATION};
use upthrift_core::domains::listings::options::{COLORS, CONDITIONS, STYLES, TYPES};
use upthrift_core::domains::listings::Size;
use upthrift_core::machines::AppEvent;
use upthrift_core::ContributionError;

use crate::photos::read_photos;
use crate::state::use_app_store;

#[component]
pub fn ContributeTab() -> Element {
    let store = use_app_store();
    let font = store.font_class();
    let mut form = use_signal(ContributionForm::default);
    let mut errors = use_signal(Vec::<String>::new);

    let on_photos = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let slots = form.read().remaining_photo_slots();
        for photo in read_photos(engine, slots).await {
            let added = photo
                .map_err(|e| e.to_string())
                .and_then(|url| form.write().add_photo(url).map_err(|e| e.to_string()));
            if let Err(message) = added {
                tracing::warn!(%message, "Photo skipped");
                errors.write().push(message);
            }
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form.read().clone();
        match current.validate() {
            Ok(()) => {
                errors.set(Vec::new());
                form.set(ContributionForm::default());
                store.dispatch(AppEvent::ContributionSubmitted {
                    form: current,
                    at: Utc::now(),
                });
            }
            Err(ContributionError::Invalid(fields)) => {
                errors.set(fields.iter().map(ToString::to_string).collect());
            }
            Err(other) => errors.set(vec![other.to_string()]),
        }
    };

    let current = form.read().clone();
    let size_value = current.size.map(|s| s.label()).unwrap_or_default();

    rsx! {
        div {
            class: "p-4",
            div {
                class: "bg-white rounded-2xl p-6 shadow-sm border border-gray-100",
                h2 { class: "{font} text-lg font-semibold text-gray-800 mb-4", "Contribute Your Clothes" }

                form {
                    class: "space-y-4",
                    onsubmit: submit,

                    // Photos
                    div {
                        label { class: "block {font} font-medium text-gray-700 mb-2", "Photos *" }
                        if !current.photos().is_empty() {
                            div {
                                class: "grid grid-cols-2 gap-3 mb-4",
                                for (index, url) in current.photos().iter().cloned().enumerate() {
                                    div {
                                        key: "{index}",
                                        class: "relative",
                                        img {
                                            src: "{url}",
                                            alt: "Preview {index + 1}",
                                            class: "w-full h-32 object-cover rounded-lg border border-gray-200",
                                        }
                                        button {
                                            r#type: "button",
                                            class: "absolute top-1 right-1 w-6 h-6 bg-red-500 text-white rounded-full text-xs",
                                            onclick: move |_| form.write().remove_photo(index),
                                            "\u{2715}"
                                        }
                                    }
                                }
                            }
                        }
                        if current.remaining_photo_slots() > 0 {
                            label {
                                class: "flex flex-col items-center justify-center w-full h-32 border-2 border-dashed border-gray-300 rounded-xl cursor-pointer hover:border-[#36723f]",
                                span { class: "text-3xl", "\u{1F4F7}" }
                                span {
                                    class: "{font} text-gray-500 mt-1",
                                    "Add photos ({current.photos().len()}/{MAX_PHOTOS})"
                                }
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    multiple: true,
                                    class: "hidden",
                                    onchange: on_photos,
                                }
                            }
                        }
                    }

                    // Title
                    div {
                        label { class: "block {font} font-medium text-gray-700 mb-2", "Title *" }
                        input {
                            r#type: "text",
                            value: "{current.title}",
                            placeholder: "e.g., Vintage Denim Jacket",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-xl",
                            oninput: move |evt| form.write().title = evt.value(),
                        }
                    }

                    // Description
                    div {
                        label { class: "block {font} font-medium text-gray-700 mb-2", "Description" }
                        textarea {
                            value: "{current.description}",
                            rows: "3",
                            placeholder: "Describe the item, its condition, and any special details...",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-xl",
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }

                    div {
                        class: "grid grid-cols-2 gap-3",
                        Choice {
                            label: "Size *",
                            options: size_options(),
                            value: size_value.to_string(),
                            onchange: move |value: String| form.write().size = Size::from_label(&value),
                        }
                        Choice {
                            label: "Color *",
                            options: COLORS.to_vec(),
                            value: current.color.clone(),
                            onchange: move |value| form.write().color = value,
                        }
                        Choice {
                            label: "Style *",
                            options: STYLES.to_vec(),
                            value: current.style.clone(),
                            onchange: move |value| form.write().style = value,
                        }
                        Choice {
                            label: "Type *",
                            options: TYPES.to_vec(),
                            value: current.kind.clone(),
                            onchange: move |value| form.write().kind = value,
                        }
                    }
                    Choice {
                        label: "Condition *",
                        options: CONDITIONS.to_vec(),
                        value: current.condition.clone(),
                        onchange: move |value| form.write().condition = value,
                    }

                    // Pickup location
                    div {
                        label { class: "block {font} font-medium text-gray-700 mb-2", "Pickup Location" }
                        div {
                            class: "w-full px-4 py-3 bg-gray-50 border border-gray-200 rounded-xl text-gray-600",
                            "\u{1F4CD} {PICKUP_LOCATION}"
                        }
                    }

                    if !errors.read().is_empty() {
                        ul {
                            class: "bg-red-50 rounded-xl p-3 space-y-1",
                            for message in errors.read().iter() {
                                li { key: "{message}", class: "text-sm text-red-600", "{message}" }
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full brand-bg text-white py-4 rounded-xl font-medium",
                        "Post Contribution"
                    }
                }
            }

            div {
                class: "mt-4 p-4 bg-green-50 rounded-xl",
                p {
                    class: "{font} text-green-700 text-center",
                    "\u{1F49A} Everything on UpThrift is shared for free"
                }
            }
        }
    }
}

/// Select values for the size dropdown, parsed back with `Size::from_label`.
fn size_options() -> Vec<&'static str> {
    Size::variants().iter().map(Size::label).collect()
}

#[component]
fn Choice(
    label: &'static str,
    options: Vec<&'static str>,
    value: String,
    onchange: EventHandler<String>,
) -> Element {
    let font = use_app_store().font_class();

    rsx! {
        div {
            label { class: "block {font} font-medium text-gray-700 mb-2", "{label}" }
            select {
                class: "w-full px-3 py-3 border border-gray-300 rounded-xl bg-white",
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Select" }
                for option_value in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: value == option_value,
                        "{option_value}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_options_round_trip_to_sizes() {
        let options = size_options();

        assert_eq!(options, vec!["XS", "S", "M", "L", "XL", "XXL"]);
        let parsed: Vec<Size> = options.iter().filter_map(|label| Size::from_label(label)).collect();
        assert_eq!(parsed, Size::variants());
    }
}
