//! Post-payment verification page

use dioxus::prelude::*;
use upthrift_core::domains::onboarding::VERIFICATION_NEXT_STEPS;
use upthrift_core::machines::AppEvent;

use crate::state::use_app_store;

#[component]
pub fn VerificationPage() -> Element {
    let store = use_app_store();
    let machine = store.machine.read();
    let first_name = machine
        .account()
        .map(|account| account.first_name().to_string())
        .unwrap_or_default();
    let skip_visible = machine.is_demo_skip_visible();
    drop(machine);

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-3xl shadow-2xl p-8 w-full max-w-md text-center",

                div {
                    class: "w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl text-green-600",
                    "\u{2714}"
                }
                h1 { class: "text-2xl font-bold brand-text mb-2", "Payment Successful!" }
                p {
                    class: "text-gray-600 mb-8",
                    "Thank you {first_name}, your membership is being processed."
                }

                div {
                    class: "bg-yellow-50 border border-yellow-200 rounded-xl p-6 mb-6 text-left",
                    h2 { class: "text-lg font-semibold text-yellow-800 mb-2", "\u{1F6E1} Identity Verification" }
                    p {
                        class: "text-yellow-700 mb-4",
                        "We're manually verifying your identity to ensure a safe community for everyone."
                    }
                    p { class: "text-sm font-medium text-yellow-700", "\u{23F1} This might take up to one business day" }
                }

                div {
                    class: "bg-gray-50 rounded-xl p-6 mb-6 text-left",
                    h3 { class: "font-semibold text-gray-800 mb-3", "What happens next?" }
                    ol {
                        class: "space-y-3",
                        for (index, step) in VERIFICATION_NEXT_STEPS.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "flex items-start space-x-3",
                                span {
                                    class: "w-6 h-6 brand-bg text-white rounded-full flex items-center justify-center text-xs font-bold shrink-0",
                                    "{index + 1}"
                                }
                                p { class: "text-sm text-gray-600", "{step}" }
                            }
                        }
                    }
                }

                div {
                    class: "bg-blue-50 rounded-xl p-4 mb-6",
                    p {
                        class: "text-sm text-blue-700",
                        strong { "Questions?" }
                        " Contact us at "
                        span { class: "font-medium", "support@upthrift.com" }
                    }
                }

                if skip_visible {
                    div {
                        class: "border-t border-gray-200 pt-6",
                        p { class: "text-xs text-gray-500 mb-3", "For demo purposes only:" }
                        button {
                            class: "w-full bg-gray-600 text-white py-3 rounded-xl font-medium hover:bg-gray-700 transition-colors",
                            onclick: move |_| store.dispatch(AppEvent::EnterApp),
                            "Skip Verification & Enter App \u{2192}"
                        }
                    }
                }

                p {
                    class: "mt-6 text-xs text-gray-500",
                    "\u{1F331} Welcome to the UpThrift community!"
                }
            }
        }
    }
}
