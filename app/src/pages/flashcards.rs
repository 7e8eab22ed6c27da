//! Flashcard study screen: bounded card walker with mastery tracking.
//!
//! The deck is fixed for the life of the screen; only the study session
//! (index, reveal flip, mastered set) changes, and all of it resets with
//! the deck.

#[cfg(test)]
#[path = "flashcards_test.rs"]
mod flashcards_test;

use leptos::prelude::*;

use decks::{Deck, Difficulty, StudySession};

use crate::components::progress_bar::ProgressBar;
use crate::state::view::ViewState;

#[component]
pub fn FlashcardsPage() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let deck = StoredValue::new(view.get_untracked().deck.clone().unwrap_or_default());
    let study = RwSignal::new(StudySession::default());

    let deck_len = deck.with_value(Deck::len);
    let deck_title = deck.with_value(|d| d.title.clone());

    let current_card = move || {
        let index = study.get().index();
        deck.with_value(|d| d.cards.get(index).cloned())
    };

    let on_back = move |_| view.update(|v| v.back_to_chat());
    let on_flip = move |_| study.update(StudySession::flip);
    let on_next = move |_| study.update(|s| s.next(deck_len));
    let on_previous = move |_| study.update(StudySession::previous);
    let on_reset = move |_| study.update(StudySession::reset);
    let rate = move |difficulty: Difficulty| {
        study.update(|s| s.rate(difficulty, deck_len));
    };

    view! {
        <div class="flashcards-page">
            <header class="flashcards-page__header">
                <button class="btn flashcards-page__back" title="Back to chat" on:click=on_back>
                    "\u{2190}"
                </button>
                <div>
                    <h2 class="flashcards-page__title">{format!("Flashcards: {deck_title}")}</h2>
                    <p class="flashcards-page__counter">
                        {move || counter_label(study.get().index(), deck_len)}
                    </p>
                </div>
                <button class="btn flashcards-page__reset" title="Reset deck" on:click=on_reset>
                    "Reset"
                </button>
            </header>

            <ProgressBar fraction=Signal::derive(move || study.get().progress_fraction(deck_len)) />

            <div class="flashcards-page__card-area">
                <div
                    class="flashcard"
                    class:flashcard--revealed=move || study.get().is_revealed()
                    on:click=on_flip
                >
                    {move || {
                        current_card().map_or_else(
                            || view! { <p class="flashcard__empty">"No cards in this deck"</p> }.into_any(),
                            |card| {
                                let revealed = study.get().is_revealed();
                                view! {
                                    <div class="flashcard__face">
                                        <p class="flashcard__kind">
                                            {if revealed { "Answer" } else { "Question" }}
                                        </p>
                                        <h3 class="flashcard__text">
                                            {if revealed { card.answer } else { card.question }}
                                        </h3>
                                        <Show when=move || !revealed>
                                            <p class="flashcard__hint">"Tap to reveal answer"</p>
                                        </Show>
                                    </div>
                                }
                                .into_any()
                            },
                        )
                    }}
                </div>

                <Show when=move || study.get().is_revealed()>
                    <div class="flashcards-page__ratings">
                        <button class="btn flashcards-page__rating flashcards-page__rating--hard"
                            on:click=move |_| rate(Difficulty::Hard)>
                            "Hard"
                        </button>
                        <button class="btn flashcards-page__rating flashcards-page__rating--medium"
                            on:click=move |_| rate(Difficulty::Medium)>
                            "Good"
                        </button>
                        <button class="btn flashcards-page__rating flashcards-page__rating--easy"
                            on:click=move |_| rate(Difficulty::Easy)>
                            "Easy"
                        </button>
                    </div>
                </Show>

                <div class="flashcards-page__nav">
                    <button
                        class="btn flashcards-page__step"
                        disabled=move || study.get().index() == 0
                        on:click=on_previous
                    >
                        "Previous"
                    </button>

                    <div class="flashcards-page__dots">
                        {move || {
                            let session = study.get();
                            (0..deck_len)
                                .map(|index| {
                                    let class = dot_class(
                                        index,
                                        session.index(),
                                        session.is_mastered(index),
                                    );
                                    view! { <span class=class></span> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    <button
                        class="btn flashcards-page__step"
                        disabled={move || study.get().index() + 1 >= deck_len}
                        on:click=on_next
                    >
                        "Next"
                    </button>
                </div>

                <div class="flashcards-page__stats">
                    <div class="stat-tile">
                        <span class="stat-tile__value">{move || study.get().mastered_count()}</span>
                        <span class="stat-tile__label">"Mastered"</span>
                    </div>
                    <div class="stat-tile">
                        <span class="stat-tile__value">{move || study.get().index() + 1}</span>
                        <span class="stat-tile__label">"Current"</span>
                    </div>
                    <div class="stat-tile">
                        <span class="stat-tile__value">{move || study.get().remaining(deck_len)}</span>
                        <span class="stat-tile__label">"Remaining"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Header counter, e.g. `2 / 3 cards`.
fn counter_label(index: usize, deck_len: usize) -> String {
    format!("{} / {deck_len} cards", (index + 1).min(deck_len.max(1)))
}

/// CSS class for a deck position dot.
fn dot_class(index: usize, current: usize, mastered: bool) -> &'static str {
    if index == current {
        "flashcards-page__dot flashcards-page__dot--current"
    } else if mastered {
        "flashcards-page__dot flashcards-page__dot--mastered"
    } else {
        "flashcards-page__dot"
    }
}
