use serde::{Deserialize, Serialize};

/// Sender of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in the assistant panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// An ordered, append-only chat transcript.
///
/// Seeded with a single assistant greeting and grown by exactly two turns
/// (user question, assistant answer) per interaction. Turns are never edited
/// or removed, which is why the backing vector stays private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Conversation {
    /// Opens a conversation seeded with the assistant's greeting.
    pub fn opened_with(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatTurn {
                role: ChatRole::Assistant,
                content: greeting.into(),
            }],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: ChatRole::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: ChatRole::Assistant,
            content: content.into(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}
