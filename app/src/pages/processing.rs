//! Document-processing screen: staged OCR simulation and extraction reveal.
//!
//! The sequencer advances one stage per fixed interval until terminal, then
//! assigns the fixture extraction text to the in-flight document. There is
//! no error path; unmounting the screen stops the driver.

#[cfg(test)]
#[path = "processing_test.rs"]
mod processing_test;

use leptos::prelude::*;

use documents::ProcessingStage;

use crate::components::progress_bar::ProgressBar;
use crate::state::view::ViewState;

#[component]
pub fn ProcessingPage() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let stage = RwSignal::new(ProcessingStage::default());

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    documents::STAGE_INTERVAL_MS,
                ))
                .await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let mut terminal = false;
                let _ = stage.try_update(|s| {
                    *s = s.advance();
                    terminal = s.is_terminal();
                });
                if terminal {
                    view.update(|v| v.complete_scan(documents::demo::EXTRACTED_TEXT));
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let title = move || {
        view.get()
            .document
            .as_ref()
            .map(|d| d.title.clone())
            .unwrap_or_default()
    };
    let is_processing = move || !stage.get().is_terminal();
    let extracted = move || {
        view.get()
            .document
            .as_ref()
            .and_then(|d| d.extracted_text.clone())
            .unwrap_or_default()
    };

    let on_back = move |_| view.update(|v| v.back_to_chat());
    let on_flashcards = move |_| {
        view.update(|v| {
            let deck = v.document.as_ref().map(decks::demo::deck_for);
            if let Some(deck) = deck {
                v.open_flashcards(deck);
            }
        });
    };

    view! {
        <div class="processing-page">
            <header class="processing-page__header">
                <button class="btn processing-page__back" title="Back to chat" on:click=on_back>
                    "\u{2190}"
                </button>
                <div>
                    <h2 class="processing-page__title">{title}</h2>
                    <p class="processing-page__subtitle">{move || stage.get().label()}</p>
                </div>
            </header>

            <div class="processing-page__body">
                <div class="processing-page__preview">
                    <Show
                        when=is_processing
                        fallback=move || {
                            view! {
                                <div class="processing-page__document">
                                    <h3 class="processing-page__document-title">
                                        {documents::demo::EXTRACTED_TITLE}
                                    </h3>
                                    <pre class="processing-page__document-text">{extracted}</pre>
                                </div>
                            }
                        }
                    >
                        <div class="processing-page__spinner" aria-hidden="true"></div>
                        <p class="processing-page__stage">{move || stage.get().label()}</p>
                        <ProgressBar fraction=Signal::derive(move || stage.get().fraction()) />
                    </Show>
                </div>

                <aside class="processing-page__sidebar">
                    <section class="processing-page__panel">
                        <h3>"Intelligent Actions"</h3>
                        {intelligent_actions()
                            .into_iter()
                            .map(|(label, description)| {
                                let is_flashcards = label == "Generate Flashcards";
                                view! {
                                    <button
                                        class="processing-page__action"
                                        disabled=is_processing
                                        on:click=move |ev| {
                                            if is_flashcards {
                                                on_flashcards(ev);
                                            }
                                        }
                                    >
                                        <span class="processing-page__action-label">{label}</span>
                                        <span class="processing-page__action-desc">{description}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </section>

                    <section class="processing-page__panel">
                        <h3>"Export"</h3>
                        {export_options()
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <button class="processing-page__export" disabled=is_processing>
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </section>

                    <Show when=move || !is_processing()>
                        <section class="processing-page__panel processing-page__panel--files">
                            <span>"Connected files"</span>
                        </section>
                    </Show>
                </aside>
            </div>
        </div>
    }
}

/// Sidebar actions; only Generate Flashcards is wired in the prototype.
fn intelligent_actions() -> [(&'static str, &'static str); 3] {
    [
        ("Summarize", "Get a concise summary"),
        ("Extract Keywords", "Identify key terms"),
        ("Generate Flashcards", "Create study cards"),
    ]
}

fn export_options() -> [&'static str; 3] {
    ["Export as PDF", "Export as Word", "Copy to Clipboard"]
}
