//! Flashcard decks and study-session progress for the CogniScan prototype.
//!
//! This crate is UI-framework agnostic so the `cogniscan` client can drive a
//! session from signals while tests drive it directly. Deck content in the
//! prototype is hardcoded; [`demo::deck_for`] stands in for a generation
//! backend.


use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One question/answer study pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered set of flashcards generated from a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Identifier of the source document.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Cards in study order.
    pub cards: Vec<Flashcard>,
}

impl Deck {
    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Self-assessed recall rating after revealing an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Hard,
    Medium,
    Easy,
}

/// Walker over one deck: current card index, reveal flip, and the set of
/// card indices mastered this session.
///
/// The index is clamped to the deck bounds; it never decrements below zero
/// or advances past the last card. Mastery never leaves memory and resets
/// with the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudySession {
    index: usize,
    revealed: bool,
    mastered: BTreeSet<usize>,
}

impl StudySession {
    /// Zero-based index of the card currently shown.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the answer side of the current card is showing.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the card at `index` has been rated Easy this session.
    #[must_use]
    pub fn is_mastered(&self, index: usize) -> bool {
        self.mastered.contains(&index)
    }

    /// Count of cards mastered this session.
    #[must_use]
    pub fn mastered_count(&self) -> usize {
        self.mastered.len()
    }

    /// Cards after the current one, given the deck length.
    #[must_use]
    pub fn remaining(&self, deck_len: usize) -> usize {
        deck_len.saturating_sub(self.index + 1)
    }

    /// Progress through the deck in `0.0..=1.0`, counting the current card.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self, deck_len: usize) -> f64 {
        if deck_len == 0 {
            return 0.0;
        }
        (self.index + 1).min(deck_len) as f64 / deck_len as f64
    }

    /// Flip between question and answer on the current card.
    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Advance to the next card, hiding the answer. No-op on the last card.
    pub fn next(&mut self, deck_len: usize) {
        if self.index + 1 < deck_len {
            self.index += 1;
            self.revealed = false;
        }
    }

    /// Step back to the previous card, hiding the answer. No-op on the first.
    pub fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.revealed = false;
        }
    }

    /// Record a recall rating for the current card and advance.
    ///
    /// Only [`Difficulty::Easy`] adds the card to the mastered set; repeated
    /// Easy ratings on the same card are idempotent.
    pub fn rate(&mut self, difficulty: Difficulty, deck_len: usize) {
        if difficulty == Difficulty::Easy {
            self.mastered.insert(self.index);
        }
        self.next(deck_len);
    }

    /// Return to the first card with nothing revealed or mastered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Hardcoded deck generation standing in for a flashcard backend.
pub mod demo {
    use documents::DocumentRecord;

    use crate::{Deck, Flashcard};

    /// Title of the demo deck.
    pub const DECK_TITLE: &str = "Q4 Tasks";

    /// Build the fixed demo deck attributed to `document`.
    #[must_use]
    pub fn deck_for(document: &DocumentRecord) -> Deck {
        Deck {
            id: document.id.clone(),
            title: DECK_TITLE.to_owned(),
            cards: vec![
                Flashcard::new("What are Q4 revenue targets", "$3M USD 15% 156 Growth"),
                Flashcard::new(
                    "Key Q4 Priorities",
                    "Launch new product line, expand sales team",
                ),
                Flashcard::new(
                    "Budget allocation",
                    "40% Marketing, 30% R&D, 30% Operations",
                ),
            ],
        }
    }
}
