use decks::demo::deck_for;
use documents::{DocumentKind, demo};

use super::*;

#[test]
fn default_view_is_chat_with_no_data() {
    let state = ViewState::default();
    assert_eq!(state.active, ActiveView::Chat);
    assert!(state.document.is_none());
    assert!(state.deck.is_none());
}

#[test]
fn open_camera_and_back() {
    let mut state = ViewState::default();
    state.open_camera();
    assert_eq!(state.active, ActiveView::Camera);
    state.back_to_chat();
    assert_eq!(state.active, ActiveView::Chat);
}

#[test]
fn begin_scan_creates_notes_document_and_switches() {
    let mut state = ViewState::default();
    state.begin_scan("doc-1".to_owned(), Some("agenda.pdf".to_owned()));
    assert_eq!(state.active, ActiveView::Processing);

    let doc = state.document.as_ref().unwrap();
    assert_eq!(doc.title, "agenda.pdf");
    assert_eq!(doc.kind, DocumentKind::Notes);
    assert!(!doc.is_processed());
}

#[test]
fn begin_scan_without_filename_uses_fallback_title() {
    let mut state = ViewState::default();
    state.begin_scan("doc-1".to_owned(), None);
    assert_eq!(state.document.as_ref().unwrap().title, UNTITLED_SCAN);
}

#[test]
fn complete_scan_attaches_extraction_text() {
    let mut state = ViewState::default();
    state.complete_scan(demo::EXTRACTED_TEXT);
    assert!(state.document.is_none());

    state.begin_scan("doc-1".to_owned(), None);
    state.complete_scan(demo::EXTRACTED_TEXT);
    assert!(state.document.as_ref().unwrap().is_processed());
}

#[test]
fn open_flashcards_hands_deck_to_view() {
    let mut state = ViewState::default();
    state.begin_scan("doc-1".to_owned(), None);
    let deck = deck_for(state.document.as_ref().unwrap());
    state.open_flashcards(deck.clone());
    assert_eq!(state.active, ActiveView::Flashcards);
    assert_eq!(state.deck.as_ref(), Some(&deck));
}

#[test]
fn back_to_chat_keeps_document_and_deck() {
    let mut state = ViewState::default();
    state.begin_scan("doc-1".to_owned(), None);
    let deck = deck_for(state.document.as_ref().unwrap());
    state.open_flashcards(deck);
    state.back_to_chat();
    assert!(state.document.is_some());
    assert!(state.deck.is_some());
}
