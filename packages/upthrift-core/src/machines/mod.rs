//! Application state machine.
//!
//! Views never mutate state directly. They dispatch an [`AppEvent`]; the
//! machine applies it synchronously and may hand back one [`AppCommand`]
//! describing IO (a timer, a notice) for the front-end to run.

pub mod app;
pub mod commands;
pub mod events;
pub mod tabs;

pub use app::AppMachine;
pub use commands::AppCommand;
pub use events::AppEvent;
pub use tabs::Tab;

/// A synchronous decision step over an event stream.
///
/// # Guarantees
///
/// - Called serially, never concurrently
/// - At most one command per event
pub trait Machine {
    type Event;
    type Command;

    fn decide(&mut self, event: &Self::Event) -> Option<Self::Command>;
}
