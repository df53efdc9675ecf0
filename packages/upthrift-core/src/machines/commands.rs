use std::time::Duration;

use super::events::AppEvent;

/// IO requested by the machine, executed by the front-end.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Feed `event` back into the machine once `after` has elapsed.
    /// Never cancelled.
    Schedule { after: Duration, event: Box<AppEvent> },

    /// Show a transient message to the member.
    Notify(String),
}

impl AppCommand {
    pub fn schedule(after: Duration, event: AppEvent) -> Self {
        AppCommand::Schedule {
            after,
            event: Box::new(event),
        }
    }
}
