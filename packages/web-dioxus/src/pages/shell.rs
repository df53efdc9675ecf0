//! Tabbed application shell shown after onboarding

use dioxus::prelude::*;
use upthrift_core::machines::Tab;

use super::tabs::{ChatTab, ContributeTab, FeedTab, ProfileTab, SettingsTab, SupportTab};
use crate::components::BottomNav;
use crate::state::use_app_store;

#[component]
pub fn AppShell() -> Element {
    let store = use_app_store();
    let tab = store.machine.read().tab();

    rsx! {
        div {
            class: "min-h-screen flex flex-col max-w-md mx-auto pb-24",

            header {
                class: "bg-white shadow-sm p-4 rounded-b-2xl",
                h1 { class: "text-2xl font-bold brand-text text-center", "UpThrift" }
                p { class: "text-sm brand-text text-center mt-1", "Share clothes, spread love" }
            }

            main {
                class: "flex-1",
                match tab {
                    Tab::Feed => rsx! { FeedTab {} },
                    Tab::Chat => rsx! { ChatTab {} },
                    Tab::Contribute => rsx! { ContributeTab {} },
                    Tab::Profile => rsx! { ProfileTab {} },
                    Tab::Support => rsx! { SupportTab {} },
                    Tab::Settings => rsx! { SettingsTab {} },
                }
            }

            BottomNav {}
        }
    }
}
