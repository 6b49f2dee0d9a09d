use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::UserID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sent: DateTime<Utc>,
    pub sender: UserID,
    pub content: String,
}

impl Message {
    pub fn new(sender: &UserID, content: &str) -> Self {
        Self {
            sent: Utc::now(),
            sender: sender.clone(),
            content: content.to_string(),
        }
    }
}

/// FIFO queue of received messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    messages: VecDeque<Message>,
}

impl Inbox {
    pub fn receive(&mut self, message: Message) {
        self.messages.push_back(message);
    }

    /// Pops the oldest message, `None` when the inbox is empty.
    pub fn read(&mut self) -> Option<Message> {
        self.messages.pop_front()
    }

    pub fn remove_from(&mut self, sender: &UserID) {
        self.messages.retain(|m| &m.sender != sender)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

impl FromIterator<Message> for Inbox {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Self { messages: iter.into_iter().collect() }
    }
}
