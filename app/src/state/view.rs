//! View-switcher state: which screen is active and the data handed between
//! screens.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use decks::Deck;
use documents::{DocumentKind, DocumentRecord};

/// Fallback title for scans initiated without a filename.
pub const UNTITLED_SCAN: &str = "Scanned Document";

/// The screens reachable once signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Chat,
    Camera,
    Processing,
    Flashcards,
}

/// Root navigation state.
///
/// `document` and `deck` survive a return to chat so re-entering a screen
/// does not lose the last scan, matching the prototype's behavior.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub active: ActiveView,
    /// The scan currently being processed or last processed.
    pub document: Option<DocumentRecord>,
    /// The deck currently being studied or last studied.
    pub deck: Option<Deck>,
}

impl ViewState {
    /// Switch to the camera screen.
    pub fn open_camera(&mut self) {
        self.active = ActiveView::Camera;
    }

    /// Return to the chat screen.
    pub fn back_to_chat(&mut self) {
        self.active = ActiveView::Chat;
    }

    /// Start a simulated scan and switch to the processing screen.
    ///
    /// `title` is the uploaded filename when one was selected.
    pub fn begin_scan(&mut self, id: String, title: Option<String>) {
        let title = title.unwrap_or_else(|| UNTITLED_SCAN.to_owned());
        self.document = Some(DocumentRecord::scanned(id, title, DocumentKind::Notes));
        self.active = ActiveView::Processing;
    }

    /// Attach extraction output to the in-flight document, if any.
    pub fn complete_scan(&mut self, text: &str) {
        if let Some(doc) = self.document.as_mut() {
            doc.complete_extraction(text);
        }
    }

    /// Hand a generated deck to the flashcard screen and switch to it.
    pub fn open_flashcards(&mut self, deck: Deck) {
        self.deck = Some(deck);
        self.active = ActiveView::Flashcards;
    }
}
