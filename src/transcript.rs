use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single displayed chat message. Immutable once appended.
#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
            timestamp: Local::now(),
        }
    }
}

/// The ordered list of messages for the current session. Messages are
/// only ever appended or dropped wholesale on reset, never edited or
/// removed individually.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, sender: Sender, content: impl Into<String>) {
        self.messages.push(Message::new(sender, content));
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(Sender::User, "hello");
        transcript.append(Sender::Bot, "hi there");
        transcript.append(Sender::User, "how are you?");

        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].content, "hello");
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(messages[2].content, "how are you?");
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut transcript = Transcript::new();
        transcript.append(Sender::User, "one");
        transcript.append(Sender::Bot, "two");

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}
