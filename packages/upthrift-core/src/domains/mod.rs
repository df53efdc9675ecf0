pub mod chat;
pub mod contributions;
pub mod listings;
pub mod onboarding;
pub mod preferences;
pub mod profile;
pub mod support;
