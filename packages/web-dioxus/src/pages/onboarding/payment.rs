//! Membership payment page

use dioxus::prelude::*;
use upthrift_core::domains::onboarding::{CardDetails, PaymentMethod, MEMBERSHIP_BENEFITS};
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

fn method_icon(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Card => "\u{1F4B3}",     // 💳
        PaymentMethod::PayPal => "\u{1F17F}",   // 🅿
        PaymentMethod::ApplePay => "\u{1F34E}", // 🍎
        PaymentMethod::Venmo => "\u{1F4F1}",    // 📱
    }
}

#[component]
pub fn PaymentPage() -> Element {
    let store = use_app_store();
    let mut selected = use_signal(|| None::<PaymentMethod>);
    let mut card = use_signal(CardDetails::default);

    let machine = store.machine.read();
    let processing = machine.is_payment_processing();
    let fee = machine.config().membership_fee_usd;
    let Some(account) = machine.account().cloned() else {
        return rsx! {};
    };
    drop(machine);

    let card_details = card.read().clone();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-3xl shadow-2xl p-8 w-full max-w-md",

                // Header
                div {
                    class: "flex items-center mb-6",
                    button {
                        class: "p-2 hover:bg-gray-100 rounded-full transition-colors mr-3 text-gray-600",
                        onclick: move |_| store.dispatch(AppEvent::BackToSignUp),
                        "\u{2190}"
                    }
                    div {
                        class: "flex-1",
                        h1 { class: "text-2xl font-bold brand-text", "Complete Payment" }
                        p { class: "text-gray-600 text-sm", "Hi {account.first_name()}!" }
                    }
                }

                // Account summary
                div {
                    class: "bg-gray-50 p-4 rounded-xl mb-6",
                    h3 { class: "font-medium text-gray-800 mb-2", "Account Information" }
                    div {
                        class: "space-y-1 text-sm text-gray-600",
                        p { strong { "Name: " } "{account.name}" }
                        if let Some(email) = &account.email {
                            p { strong { "Email: " } "{email}" }
                        }
                        if let Some(phone) = &account.phone {
                            p { strong { "Phone: " } "{phone}" }
                        }
                        p { strong { "Location: " } "{account.zipcode}" }
                    }
                }

                // Membership
                div {
                    class: "brand-tint p-4 rounded-xl mb-6",
                    div {
                        class: "flex items-center justify-between mb-2",
                        span { class: "font-medium brand-text", "UpThrift Membership" }
                        span { class: "text-2xl font-bold brand-text", "${fee}" }
                    }
                    p { class: "text-sm text-gray-600", "One-time verification fee" }
                    div {
                        class: "mt-3 space-y-1",
                        for benefit in MEMBERSHIP_BENEFITS.iter() {
                            div {
                                key: "{benefit}",
                                class: "flex items-center space-x-2 text-sm text-gray-600",
                                span { class: "text-green-600", "\u{2713}" }
                                span { "{benefit}" }
                            }
                        }
                    }
                }

                // Methods
                div {
                    class: "space-y-3 mb-6",
                    h3 { class: "font-medium text-gray-800", "Choose Payment Method" }
                    for method in PaymentMethod::variants().iter().copied() {
                        button {
                            key: "{method.name()}",
                            class: if selected() == Some(method) {
                                "w-full p-4 border-2 rounded-xl flex items-center space-x-3 brand-border brand-tint"
                            } else {
                                "w-full p-4 border-2 rounded-xl flex items-center space-x-3 border-gray-200 hover:border-gray-300"
                            },
                            onclick: move |_| selected.set(Some(method)),
                            span { class: "text-xl", "{method_icon(method)}" }
                            div {
                                class: "text-left",
                                p { class: "font-medium text-gray-800", "{method.name()}" }
                                p { class: "text-sm text-gray-500", "{method.description()}" }
                            }
                        }
                    }
                }

                // Card details
                if selected().is_some_and(|m| m.needs_card_details()) {
                    div {
                        class: "space-y-3 mb-6",
                        input {
                            r#type: "text",
                            placeholder: "Card Number",
                            value: "{card_details.number}",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-xl",
                            oninput: move |evt| card.write().set_number(&evt.value()),
                        }
                        div {
                            class: "flex gap-3",
                            input {
                                r#type: "text",
                                placeholder: "MM/YY",
                                value: "{card_details.expiry}",
                                class: "flex-1 px-4 py-3 border border-gray-300 rounded-xl",
                                oninput: move |evt| card.write().set_expiry(&evt.value()),
                            }
                            input {
                                r#type: "text",
                                placeholder: "CVV",
                                value: "{card_details.cvv}",
                                class: "w-24 px-4 py-3 border border-gray-300 rounded-xl",
                                oninput: move |evt| card.write().set_cvv(&evt.value()),
                            }
                        }
                        input {
                            r#type: "text",
                            placeholder: "Cardholder Name",
                            value: "{card_details.name}",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-xl",
                            oninput: move |evt| card.write().name = evt.value(),
                        }
                    }
                }

                button {
                    class: "w-full brand-bg text-white py-4 rounded-xl font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: selected().is_none() || processing,
                    onclick: move |_| {
                        if let Some(method) = selected() {
                            store.dispatch(AppEvent::PaymentSubmitted(method));
                        }
                    },
                    if processing {
                        "Processing..."
                    } else {
                        "Pay ${fee}"
                    }
                }

                p {
                    class: "mt-4 text-center text-xs text-gray-500",
                    "\u{1F512} Secure payment \u{2022} No recurring charges"
                }
            }
        }
    }
}
