use super::*;

#[test]
fn welcome_chat_seeds_one_assistant_message() {
    let state = ChatState::welcome(0.0);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].author, Author::Assistant);
    assert_eq!(state.messages[0].body, WELCOME_TEXT);
    assert!(!state.awaiting_reply);
}

#[test]
fn send_appends_one_user_then_one_assistant_message() {
    let mut state = ChatState::welcome(0.0);
    assert!(state.push_user("hello", 1.0));
    assert!(state.awaiting_reply);
    assert_eq!(state.count_from(Author::User), 1);

    state.push_assistant(CANNED_REPLY, 2.0);
    assert!(!state.awaiting_reply);
    assert_eq!(state.count_from(Author::User), 1);
    assert_eq!(state.count_from(Author::Assistant), 2);
}

#[test]
fn blank_input_is_rejected() {
    let mut state = ChatState::welcome(0.0);
    assert!(!state.push_user("", 1.0));
    assert!(!state.push_user("   ", 1.0));
    assert_eq!(state.messages.len(), 1);
    assert!(!state.awaiting_reply);
}

#[test]
fn sends_are_blocked_while_a_reply_is_pending() {
    let mut state = ChatState::welcome(0.0);
    assert!(state.push_user("first", 1.0));
    assert!(!state.push_user("second", 2.0));
    assert_eq!(state.count_from(Author::User), 1);

    state.push_assistant(CANNED_REPLY, 3.0);
    assert!(state.push_user("second", 4.0));
}

#[test]
fn user_input_is_trimmed() {
    let mut state = ChatState::welcome(0.0);
    assert!(state.push_user("  hello  ", 1.0));
    assert_eq!(state.messages.last().unwrap().body, "hello");
}

#[test]
fn document_reply_carries_preview() {
    let mut state = ChatState::welcome(0.0);
    assert!(state.push_user("Show me my files", 1.0));
    state.push_assistant_document(
        FILES_REPLY,
        DocumentPreview {
            title: FILES_DOC_TITLE.to_owned(),
            preview: FILES_DOC_PREVIEW.to_owned(),
        },
        2.0,
    );

    let last = state.messages.last().unwrap();
    assert_eq!(last.author, Author::Assistant);
    let doc = last.document.as_ref().unwrap();
    assert_eq!(doc.title, FILES_DOC_TITLE);
    assert!(!state.awaiting_reply);
}

#[test]
fn upload_acknowledgement_does_not_arm_reply() {
    let mut state = ChatState::welcome(0.0);
    state.push_upload("agenda.pdf", 1.0);
    assert_eq!(state.messages.last().unwrap().body, "Uploaded: agenda.pdf");
    assert_eq!(state.messages.last().unwrap().author, Author::User);
    assert!(!state.awaiting_reply);
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::welcome(0.0);
    state.push_user("one", 1.0);
    state.push_assistant(CANNED_REPLY, 2.0);
    let mut ids: Vec<_> = state.messages.iter().map(|m| m.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), state.messages.len());
}
