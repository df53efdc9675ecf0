mod chat;
mod contribute;
mod feed;
mod profile;
mod settings;
mod support;

pub use chat::*;
pub use contribute::*;
pub use feed::*;
pub use profile::*;
pub use settings::*;
pub use support::*;
