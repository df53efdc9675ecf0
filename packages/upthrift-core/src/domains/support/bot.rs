//! Canned-response support assistant.
//!
//! Rules are checked in order against the lower-cased message and the first
//! match wins, so the order of `RULES` is part of the behavior.

/// How a rule's keywords must appear in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keywords {
    /// Every keyword must appear.
    All(&'static [&'static str]),
    /// At least one keyword must appear.
    Any(&'static [&'static str]),
}

impl Keywords {
    fn matches(&self, message: &str) -> bool {
        match self {
            Keywords::All(words) => words.iter().all(|w| message.contains(w)),
            Keywords::Any(words) => words.iter().any(|w| message.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub keywords: Keywords,
    pub response: &'static str,
}

pub const RULES: &[Rule] = &[
    Rule {
        keywords: Keywords::All(&["how", "work"]),
        response: "UpThrift is simple! Browse free clothing listings, message the contributor if interested, and arrange a pickup. You can also contribute your own items to share with the community.",
    },
    Rule {
        keywords: Keywords::Any(&["contribute", "post"]),
        response: "To contribute an item, go to the 'Contribute' tab, add photos, fill in the details, and submit. Remember, all items on UpThrift are contributed for free!",
    },
    Rule {
        keywords: Keywords::Any(&["pickup", "meet"]),
        response: "For safety, we recommend meeting in public places during daylight hours. Many users prefer coffee shops, libraries, or community centers for exchanges.",
    },
    Rule {
        keywords: Keywords::Any(&["size", "fit"]),
        response: "Item sizing can vary by brand. We recommend messaging the contributor to ask about measurements or fit. Our virtual try-on feature is coming soon!",
    },
    Rule {
        keywords: Keywords::Any(&["safe"]),
        response: "Your safety is important! Always meet in public places, bring a friend if possible, and trust your instincts. Report any concerning behavior through our app.",
    },
];

pub const FALLBACK: &str = "I'm here to help! You can ask me about how UpThrift works, contributing items, safety tips, or anything else. For complex issues, please contact our support team.";

pub const GREETING: &str = "Hi! I'm your UpThrift assistant. How can I help you today?";

/// The assistant's reply to `message`.
pub fn respond(message: &str) -> &'static str {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.matches(&message))
        .map(|rule| rule.response)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn how_and_work_must_both_appear() {
        assert_eq!(respond("How does this work?"), RULES[0].response);
        assert_eq!(respond("how are you"), FALLBACK);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(respond("Where do we MEET?"), RULES[2].response);
    }

    #[test]
    fn first_matching_rule_wins() {
        // "post" (rule 2) beats "pickup" (rule 3) and "safe" (rule 5)
        assert_eq!(respond("Is it safe to post a pickup spot?"), RULES[1].response);
        // "fit" (rule 4) beats "safe" (rule 5)
        assert_eq!(respond("safe fit?"), RULES[3].response);
    }

    #[test]
    fn keywords_match_inside_words() {
        // "outfit" contains "fit"
        assert_eq!(respond("Cute outfit"), RULES[3].response);
        // "unsafe" contains "safe"
        assert_eq!(respond("that felt unsafe"), RULES[4].response);
    }

    #[test]
    fn unknown_question_gets_fallback() {
        assert_eq!(respond("hello there"), FALLBACK);
    }
}
