//! Global state management
//!
//! One `AppMachine` behind a signal, shared through context. Views read it
//! and call `dispatch`; commands coming back are run here.

use std::time::Duration;

use dioxus::prelude::*;
use upthrift_core::machines::{AppCommand, AppEvent, AppMachine, Machine};

const NOTICE_DURATION: Duration = Duration::from_millis(4000);

/// Store context shared by every view
#[derive(Clone, Copy)]
pub struct AppStore {
    pub machine: Signal<AppMachine>,
    /// Transient message shown in the toast
    pub notice: Signal<Option<String>>,
}

impl AppStore {
    /// Apply `event` and run the command it produced, if any.
    pub fn dispatch(self, event: AppEvent) {
        tracing::debug!(?event, "Dispatching");
        let mut machine = self.machine;
        let command = machine.write().decide(&event);
        if let Some(command) = command {
            self.run(command);
        }
    }

    fn run(self, command: AppCommand) {
        match command {
            AppCommand::Schedule { after, event } => {
                spawn(async move {
                    sleep(after).await;
                    self.dispatch(*event);
                });
            }
            AppCommand::Notify(message) => {
                let mut notice = self.notice;
                notice.set(Some(message.clone()));
                spawn(async move {
                    sleep(NOTICE_DURATION).await;
                    // A newer notice keeps its own timer
                    if notice.peek().as_deref() == Some(message.as_str()) {
                        notice.set(None);
                    }
                });
            }
        }
    }

    pub fn dismiss_notice(self) {
        let mut notice = self.notice;
        notice.set(None);
    }

    /// CSS class for the member's chosen text size
    pub fn font_class(self) -> &'static str {
        self.machine.read().font_size().css_class()
    }
}

#[cfg(feature = "web")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Provides the store to the entire app.
///
/// The machine itself is built before launch and handed over as root context.
#[component]
pub fn AppStoreProvider(children: Element) -> Element {
    let initial = use_context::<AppMachine>();
    let machine = use_signal(|| initial);
    let notice = use_signal(|| None::<String>);

    use_context_provider(|| AppStore { machine, notice });

    children
}

/// Hook to access the store
pub fn use_app_store() -> AppStore {
    use_context::<AppStore>()
}
