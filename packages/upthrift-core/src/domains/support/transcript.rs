use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bot::{respond, GREETING};
use crate::common::MessageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportMessage {
    pub id: MessageId,
    pub text: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
}

impl SupportMessage {
    pub fn is_bot(&self) -> bool {
        self.author == Author::Bot
    }

    /// Local-looking clock time shown under the bubble ("3:07 PM").
    pub fn time_label(&self) -> String {
        self.timestamp.format("%-I:%M %p").to_string()
    }
}

/// Conversation with the support assistant.
///
/// Ids are assigned in append order, starting at 1 for the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<SupportMessage>,
    next_id: MessageId,
}

impl Transcript {
    /// A transcript holding only the assistant's greeting.
    pub fn new(now: DateTime<Utc>) -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: MessageId::new(1),
        };
        transcript.push(GREETING.to_string(), Author::Bot, now);
        transcript
    }

    pub fn messages(&self) -> &[SupportMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append the member's message. Blank input is ignored and yields `None`;
    /// otherwise the trimmed text is stored and the bot's reply to it returned.
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Option<&'static str> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(text.to_string(), Author::User, now);
        Some(respond(text))
    }

    /// Append a bot reply.
    pub fn reply(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.push(text.into(), Author::Bot, now);
    }

    fn push(&mut self, text: String, author: Author, timestamp: DateTime<Utc>) {
        let id = self.next_id;
        self.next_id = id.next();
        self.messages.push(SupportMessage {
            id,
            text,
            author,
            timestamp,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn starts_with_greeting() {
        let transcript = Transcript::new(at(9, 0));

        assert_eq!(transcript.len(), 1);
        let greeting = &transcript.messages()[0];
        assert!(greeting.is_bot());
        assert_eq!(greeting.text, GREETING);
        assert_eq!(greeting.id, MessageId::new(1));
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut transcript = Transcript::new(at(9, 0));

        assert_eq!(transcript.send("   ", at(9, 1)), None);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn send_appends_user_message_and_returns_reply() {
        let mut transcript = Transcript::new(at(9, 0));

        let reply = transcript.send("  Is it safe?  ", at(9, 1)).unwrap();
        transcript.reply(reply, at(9, 1));

        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text, "Is it safe?");
        assert_eq!(messages[1].author, Author::User);
        assert!(messages[2].text.starts_with("Your safety is important!"));
        assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn time_label_uses_twelve_hour_clock() {
        let transcript = Transcript::new(at(15, 7));
        assert_eq!(transcript.messages()[0].time_label(), "3:07 PM");
    }
}
