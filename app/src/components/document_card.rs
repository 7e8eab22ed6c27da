//! Card component for a document summary inside an assistant message.
//!
//! DESIGN
//! ======
//! Keeps document presentation consistent between chat replies and any
//! future file listing while centralizing the view/flashcard affordances.

use leptos::prelude::*;

/// A document summary card with View Details and Generate Flashcards
/// actions.
#[component]
pub fn DocumentCard(
    title: String,
    preview: String,
    on_view: Callback<()>,
    on_flashcards: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="document-card">
            <div class="document-card__summary">
                <span class="document-card__icon" aria-hidden="true">"\u{1F4C4}"</span>
                <div>
                    <h3 class="document-card__title">{title}</h3>
                    <p class="document-card__preview">{preview}</p>
                </div>
            </div>
            <div class="document-card__actions">
                <button class="btn btn--primary document-card__action" on:click=move |_| on_view.run(())>
                    "View Details"
                </button>
                <button class="btn document-card__action" on:click=move |_| on_flashcards.run(())>
                    "Generate Flashcards"
                </button>
            </div>
        </div>
    }
}
