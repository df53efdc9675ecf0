//! Page components

mod onboarding;
mod shell;
mod tabs;

pub use onboarding::*;
pub use shell::*;
