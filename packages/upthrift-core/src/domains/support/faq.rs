//! Static help content on the support tab.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "How does UpThrift work?",
        answer: "Browse free clothing listings, message contributors, and arrange pickups!",
    },
    FaqItem {
        question: "Is everything really free?",
        answer: "Yes! UpThrift is all about sharing clothes for free to reduce waste.",
    },
    FaqItem {
        question: "How do I arrange pickup?",
        answer: "Message the item contributor through our chat feature to coordinate.",
    },
    FaqItem {
        question: "What if an item doesn't fit?",
        answer: "You can always pass it along to someone else in the community!",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportContact {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACTS: &[SupportContact] = &[
    SupportContact {
        label: "Call Support",
        value: "1-800-UPTHRIFT",
    },
    SupportContact {
        label: "Email Support",
        value: "help@upthrift.com",
    },
];

pub const SUPPORT_HOURS: &str = "Support hours: Monday-Friday 9AM-6PM EST";
