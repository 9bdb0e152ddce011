//! Deterministic keyword-to-answer lookup behind the assistant panel.
//!
//! There is no language model here. A [`ResponseTable`] is an ordered list
//! of trigger phrases; [`QueryResponder::respond`] lowercases the question,
//! returns the answer of the first trigger found as a substring, and falls
//! back to a fixed apology otherwise.
//!
//! # Example
//!
//! ```
//! use taxhelper_core::assistant::{QueryResponder, open_conversation};
//!
//! let responder = QueryResponder::default();
//! let mut conversation = open_conversation();
//!
//! let answer = responder.respond("What is Section 80C?", &mut conversation);
//! assert!(answer.unwrap().contains("₹1.5 lakh"));
//! assert_eq!(conversation.len(), 3);
//! ```

use tracing::debug;

use crate::Conversation;
use crate::assistant::catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ResponseEntry {
    trigger: String,
    answer: String,
}

/// An ordered trigger→answer table.
///
/// Declaration order is part of the contract: lookup returns the **first**
/// entry whose trigger occurs in the input, not the longest or best one, so
/// the table is a list rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: Vec<ResponseEntry>,
}

impl ResponseTable {
    /// Builds a table from `(trigger, answer)` pairs, preserving order.
    /// Triggers are lowercased so matching stays case-insensitive.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(trigger, answer)| ResponseEntry {
                    trigger: trigger.to_lowercase(),
                    answer: (*answer).to_string(),
                })
                .collect(),
        }
    }

    /// The compact six-entry topical table.
    pub fn faq() -> Self {
        Self::from_pairs(catalog::FAQ_RESPONSES)
    }

    /// The full table consulted by the chat surface. Default.
    pub fn full() -> Self {
        Self::from_pairs(catalog::EXTENDED_RESPONSES)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First-match lookup against the lowercased input.
    pub fn lookup(&self, input: &str) -> Option<&str> {
        let lowered = input.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(&entry.trigger))
            .map(|entry| entry.answer.as_str())
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::full()
    }
}

/// Opens a conversation seeded with the standard assistant greeting.
pub fn open_conversation() -> Conversation {
    Conversation::opened_with(catalog::GREETING)
}

/// Answers free-text questions against one [`ResponseTable`].
///
/// Stateless per call; the caller owns the conversation and the responder
/// only ever appends to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponder {
    table: ResponseTable,
    fallback: String,
}

impl QueryResponder {
    pub fn new(table: ResponseTable) -> Self {
        Self {
            table,
            fallback: catalog::FALLBACK.to_string(),
        }
    }

    /// Overrides the no-match answer.
    pub fn with_fallback(table: ResponseTable, fallback: impl Into<String>) -> Self {
        Self {
            table,
            fallback: fallback.into(),
        }
    }

    /// Resolves `text` to an answer and appends both turns.
    ///
    /// Whitespace-only input is a no-op: nothing is appended and `None` is
    /// returned. Otherwise exactly two turns are appended (the user's
    /// question, then the answer) and the answer is returned.
    pub fn respond(&self, text: &str, conversation: &mut Conversation) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let answer = match self.table.lookup(text) {
            Some(answer) => answer.to_string(),
            None => {
                debug!(question = text, "no trigger matched, using fallback");
                self.fallback.clone()
            }
        };

        conversation.push_user(text);
        conversation.push_assistant(answer.clone());
        Some(answer)
    }
}

impl Default for QueryResponder {
    fn default() -> Self {
        Self::new(ResponseTable::full())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = ResponseTable::full();

        let answer = table.lookup("What is Section 80C?").unwrap();
        assert!(answer.starts_with("Section 80C allows deductions"));
    }

    #[test]
    fn lookup_returns_first_match_in_declaration_order() {
        let table = ResponseTable::from_pairs(&[
            ("tax", "first answer"),
            ("income tax", "second answer"),
        ]);

        // both triggers occur; declaration order wins, not match length
        assert_eq!(table.lookup("my income tax question"), Some("first answer"));
    }

    #[test]
    fn greeting_trigger_shadows_longer_questions() {
        let table = ResponseTable::full();

        // "hi" is declared first and occurs inside "nothing", so the early
        // greeting entry shadows everything after it
        assert_eq!(
            table.lookup("nothing matches here"),
            Some("Hello! How can I assist you with your tax-related queries today?")
        );
    }

    #[test]
    fn lookup_misses_on_unrelated_text() {
        let table = ResponseTable::full();

        assert_eq!(table.lookup("xyzzy unrelated gibberish"), None);
    }

    #[test]
    fn faq_table_answers_topical_triggers() {
        let table = ResponseTable::faq();

        let answer = table.lookup("how do I SAVE TAX this year?").unwrap();
        assert!(answer.contains("Section 80C"));
    }

    #[test]
    fn respond_appends_exactly_two_turns() {
        let responder = QueryResponder::default();
        let mut conversation = open_conversation();

        let answer = responder.respond("what is advance tax?", &mut conversation);

        assert!(answer.unwrap().starts_with("Advance tax"));
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.turns()[1].content, "what is advance tax?");
    }

    #[test]
    fn respond_falls_back_on_gibberish() {
        let responder = QueryResponder::default();
        let mut conversation = open_conversation();

        let answer = responder.respond("xyzzy unrelated gibberish", &mut conversation);

        assert_eq!(answer.as_deref(), Some("I'm still learning"));
    }

    #[test]
    fn respond_ignores_whitespace_input() {
        let responder = QueryResponder::default();
        let mut conversation = open_conversation();

        assert_eq!(responder.respond("", &mut conversation), None);
        assert_eq!(responder.respond("   \t  ", &mut conversation), None);
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn custom_fallback_is_used() {
        let responder =
            QueryResponder::with_fallback(ResponseTable::faq(), "Ask me about deductions.");
        let mut conversation = open_conversation();

        let answer = responder.respond("qwerty", &mut conversation);

        assert_eq!(answer.as_deref(), Some("Ask me about deductions."));
    }
}
