pub mod bot;
pub mod faq;
pub mod transcript;

pub use bot::{respond, Keywords, Rule, FALLBACK, GREETING, RULES};
pub use faq::{FaqItem, SupportContact, CONTACTS, FAQ, SUPPORT_HOURS};
pub use transcript::{Author, SupportMessage, Transcript};
