//! The rule-based assistant behind the chat panel.
//!
//! Deterministic by design: a fixed, ordered trigger table and a fallback,
//! no natural-language understanding. See [`responder`] for the matching
//! policy and [`catalog`] for the canned content.

pub mod catalog;
pub mod responder;

pub use catalog::{FALLBACK, GREETING, suggest_investments};
pub use responder::{QueryResponder, ResponseTable, open_conversation};
