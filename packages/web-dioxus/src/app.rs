//! Root application component

use dioxus::prelude::*;
use upthrift_core::domains::onboarding::OnboardingStep;

use crate::components::NoticeToast;
use crate::pages::{AppShell, PaymentPage, SignUpPage, VerificationPage};
use crate::state::{use_app_store, AppStoreProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Stylesheet { href: MAIN_CSS }

        AppStoreProvider {
            Screen {}
            NoticeToast {}
        }
    }
}

/// Picks the page for the current onboarding step
#[component]
fn Screen() -> Element {
    let store = use_app_store();
    let step = store.machine.read().step();

    match step {
        OnboardingStep::SignUp => rsx! { SignUpPage {} },
        OnboardingStep::Payment => rsx! { PaymentPage {} },
        OnboardingStep::Verification => rsx! { VerificationPage {} },
        OnboardingStep::App => rsx! { AppShell {} },
    }
}
