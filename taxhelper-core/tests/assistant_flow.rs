//! Conversation-level behavior of the query responder.

use pretty_assertions::assert_eq;
use taxhelper_core::assistant::{QueryResponder, ResponseTable, open_conversation};
use taxhelper_core::{ChatRole, Conversation};

#[test]
fn conversation_grows_by_two_turns_per_question() {
    let responder = QueryResponder::default();
    let mut conversation = open_conversation();

    responder.respond("what is form 16?", &mut conversation);
    responder.respond("what is dtaa?", &mut conversation);

    assert_eq!(conversation.len(), 5);
    let roles: Vec<ChatRole> = conversation.turns().iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![
            ChatRole::Assistant,
            ChatRole::User,
            ChatRole::Assistant,
            ChatRole::User,
            ChatRole::Assistant,
        ]
    );
}

#[test]
fn earlier_turns_are_never_rewritten() {
    let responder = QueryResponder::default();
    let mut conversation = open_conversation();

    responder.respond("hello there", &mut conversation);
    let before: Conversation = conversation.clone();

    responder.respond("what is gst?", &mut conversation);

    assert_eq!(&conversation.turns()[..3], before.turns());
}

#[test]
fn section_80c_is_answered_by_both_tables() {
    let question = "What is Section 80C?";

    let full = QueryResponder::default();
    let mut conversation = open_conversation();
    let answer = full.respond(question, &mut conversation).unwrap();
    assert!(answer.starts_with("Section 80C allows deductions"));

    let faq = QueryResponder::new(ResponseTable::faq());
    let mut conversation = open_conversation();
    let answer = faq.respond(question, &mut conversation).unwrap();
    assert!(answer.starts_with("Under Section 80C"));
}

#[test]
fn whitespace_submission_leaves_conversation_untouched() {
    let responder = QueryResponder::default();
    let mut conversation = open_conversation();

    assert_eq!(responder.respond("  \n ", &mut conversation), None);
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation.turns()[0].role, ChatRole::Assistant);
}
