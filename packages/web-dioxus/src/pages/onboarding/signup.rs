//! Sign-up page

use dioxus::prelude::*;
use upthrift_core::domains::onboarding::{SignUpErrors, SignUpField, SignUpForm};
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[component]
pub fn SignUpPage() -> Element {
    let store = use_app_store();
    let mut form = use_signal(SignUpForm::default);
    let mut errors = use_signal(SignUpErrors::default);

    let mut update = move |field: SignUpField, value: String| {
        form.write().set(field, &value);
        // Typing clears that field's error
        errors.write().clear(field);
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Ok(account) => store.dispatch(AppEvent::SignedUp(account)),
            Err(invalid) => errors.set(invalid),
        }
    };

    let current = form.read().clone();
    let current_errors = *errors.read();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-3xl shadow-2xl p-8 w-full max-w-md",

                // Header
                div {
                    class: "text-center mb-8",
                    div {
                        class: "w-20 h-20 brand-bg rounded-full flex items-center justify-center mx-auto mb-4",
                        span { class: "text-white text-2xl font-bold", "UT" }
                    }
                    h1 { class: "text-3xl font-bold brand-text mb-2", "Welcome to UpThrift" }
                    p { class: "text-gray-600", "Join our community of conscious clothing sharers" }
                }

                form {
                    class: "space-y-5",
                    onsubmit: submit,

                    Field {
                        label: "Full Name *",
                        value: current.name.clone(),
                        placeholder: "Enter your first and last name",
                        error: current_errors.get(SignUpField::Name).map(|e| e.to_string()),
                        oninput: move |value| update(SignUpField::Name, value),
                    }
                    Field {
                        label: "Zipcode *",
                        value: current.zipcode.clone(),
                        placeholder: "12345",
                        error: current_errors.get(SignUpField::Zipcode).map(|e| e.to_string()),
                        oninput: move |value| update(SignUpField::Zipcode, value),
                    }
                    Field {
                        label: "Email (optional)",
                        value: current.email.clone(),
                        placeholder: "you@example.com",
                        error: current_errors.get(SignUpField::Email).map(|e| e.to_string()),
                        oninput: move |value| update(SignUpField::Email, value),
                    }
                    Field {
                        label: "Phone (optional)",
                        value: current.phone.clone(),
                        placeholder: "(555) 123-4567",
                        error: current_errors.get(SignUpField::Phone).map(|e| e.to_string()),
                        oninput: move |value| update(SignUpField::Phone, value),
                    }

                    div {
                        class: "bg-gray-50 p-4 rounded-xl",
                        p {
                            class: "text-xs text-gray-600 text-center",
                            "By continuing, you agree to UpThrift's "
                            span { class: "brand-text font-medium", "Terms of Service" }
                            " and "
                            span { class: "brand-text font-medium", "Privacy Policy" }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full brand-bg text-white py-4 rounded-xl font-medium transition-colors",
                        "Continue to Payment \u{2192}"
                    }
                }

                p {
                    class: "mt-6 text-center text-xs text-gray-500",
                    "\u{1F331} Join thousands sharing clothes sustainably"
                }
            }
        }
    }
}

#[component]
fn Field(
    label: &'static str,
    value: String,
    placeholder: &'static str,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let border = if error.is_some() {
        "border-red-500 bg-red-50"
    } else {
        "border-gray-300"
    };

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-2", "{label}" }
            input {
                r#type: "text",
                value: "{value}",
                placeholder,
                class: "w-full px-4 py-3 border rounded-xl focus:outline-none focus:ring-2 focus:ring-[#36723f] {border}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(error) = error {
                p { class: "text-red-500 text-sm mt-1", "{error}" }
            }
        }
    }
}
