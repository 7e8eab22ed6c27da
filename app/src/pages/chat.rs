//! Chat screen: message list, quick actions, suggested prompts, and the
//! simulated assistant reply cycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing screen after login. Every hand-off to another screen
//! (camera, scan processing, flashcards) starts here, routed through the
//! `ViewState` context. Replies arrive on fixed timers; nothing leaves the
//! browser.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::document_card::DocumentCard;
use crate::state::chat::{
    Author, CANNED_REPLY, ChatState, DocumentPreview, FILES_DOC_PREVIEW, FILES_DOC_TITLE,
    FILES_REPLY, SUGGESTED_PROMPTS,
};
use crate::state::session::SessionState;
use crate::state::view::ViewState;
use crate::util::clock;

#[cfg(feature = "csr")]
use crate::state::chat::{REPLY_DELAY_MS, SCAN_HANDOFF_MS};

/// Which canned assistant reply a send is waiting on.
#[derive(Clone, Copy)]
enum PendingReply {
    /// The one free-form reply.
    Canned,
    /// The recent-documents reply with its attached card.
    Files,
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let view = expect_context::<RwSignal<ViewState>>();

    let chat = RwSignal::new(ChatState::welcome(clock::now_ms()));
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the list pinned to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();
        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let mut sent = false;
        chat.update(|c| sent = c.push_user(&text, clock::now_ms()));
        if !sent {
            return;
        }
        input.set(String::new());
        schedule_reply(chat, PendingReply::Canned);
    };

    let on_send_click = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let on_open_camera = move |_| view.update(|v| v.open_camera());

    let on_pick_file = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input_el) = file_ref.get_untracked() {
                input_el.click();
            }
        }
    };

    let on_show_files = move |_| {
        let mut sent = false;
        chat.update(|c| sent = c.push_user("Show me my files", clock::now_ms()));
        if sent {
            schedule_reply(chat, PendingReply::Files);
        }
    };

    // Only the filename is read; file contents never leave the picker.
    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let Some(input_el) = file_ref.get_untracked() else {
                return;
            };
            let Some(file) = input_el.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file_name = file.name();
            chat.update(|c| c.push_upload(&file_name, clock::now_ms()));
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SCAN_HANDOFF_MS))
                    .await;
                let id = uuid::Uuid::new_v4().to_string();
                view.update(|v| v.begin_scan(id, Some(file_name)));
            });
        }
    };

    let on_view_details = Callback::new(move |()| {
        let id = uuid::Uuid::new_v4().to_string();
        view.update(|v| v.begin_scan(id, None));
    });
    let on_generate_flashcards = Callback::new(move |()| {
        let id = uuid::Uuid::new_v4().to_string();
        view.update(|v| {
            v.begin_scan(id, Some(FILES_DOC_TITLE.to_owned()));
            v.complete_scan(documents::demo::EXTRACTED_TEXT);
            let deck = v.document.as_ref().map(decks::demo::deck_for);
            if let Some(deck) = deck {
                v.open_flashcards(deck);
            }
        });
    });

    let can_send = move || !input.get().trim().is_empty() && !chat.get().awaiting_reply;

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <div class="chat-page__identity">
                    <span class="chat-page__avatar">"CS"</span>
                    <h1 class="chat-page__title">"CogniScan AI"</h1>
                </div>
                <div class="chat-page__session">
                    <span class="chat-page__user">
                        {move || session.get().display_name().unwrap_or_default()}
                    </span>
                    <button
                        class="btn chat-page__logout"
                        title="Sign out"
                        on:click=move |_| session.update(|s| s.sign_out())
                    >
                        "Sign Out"
                    </button>
                </div>
            </header>

            <div class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .enumerate()
                        .map(|(index, msg)| {
                            let is_user = msg.author == Author::User;
                            let body = msg.body.clone();
                            let document = msg.document.clone();
                            let is_welcome = index == 0;

                            view! {
                                <div class="chat-message" class:chat-message--user=is_user>
                                    {if is_user {
                                        view! { <p class="chat-message__body">{body}</p> }.into_any()
                                    } else {
                                        view! {
                                            <div
                                                class="chat-message__body chat-message__markdown"
                                                inner_html=render_markdown_html(&body)
                                            ></div>
                                        }
                                        .into_any()
                                    }}

                                    <Show when=move || is_welcome>
                                        <div class="chat-message__quick-actions">
                                            <button class="btn btn--primary" on:click=on_pick_file>
                                                "Scan Document"
                                            </button>
                                            <button class="btn" on:click=on_open_camera>
                                                "Translate Sign"
                                            </button>
                                            <button class="btn" on:click=on_show_files>
                                                "View My Files"
                                            </button>
                                        </div>
                                        <div class="chat-message__prompts">
                                            <h3 class="chat-message__prompts-heading">"Suggested Prompts"</h3>
                                            {SUGGESTED_PROMPTS
                                                .iter()
                                                .map(|prompt| {
                                                    view! {
                                                        <button
                                                            class="chat-message__prompt"
                                                            on:click=move |_| input.set((*prompt).to_owned())
                                                        >
                                                            {*prompt}
                                                        </button>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </Show>

                                    {document.map(|doc| {
                                        view! {
                                            <DocumentCard
                                                title=doc.title
                                                preview=doc.preview
                                                on_view=on_view_details
                                                on_flashcards=on_generate_flashcards
                                            />
                                        }
                                    })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    chat.get()
                        .awaiting_reply
                        .then(|| view! { <div class="chat-page__thinking">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-page__input-bar">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Ask me anything or upload a file..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <input
                    class="chat-page__file-input"
                    type="file"
                    accept="image/*,.pdf"
                    node_ref=file_ref
                    on:change=on_file_change
                />
                <button class="btn chat-page__icon-button" title="Voice input" on:click=|_| {}>
                    "\u{1F3A4}"
                </button>
                <button class="btn chat-page__icon-button" title="Open camera" on:click=on_open_camera>
                    "\u{1F4F7}"
                </button>
                <button class="btn chat-page__icon-button" title="Attach file" on:click=on_pick_file>
                    "\u{1F4CE}"
                </button>
                <button
                    class="btn btn--primary chat-page__send"
                    on:click=on_send_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Queue the delayed assistant reply for a send that just landed.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn schedule_reply(chat: RwSignal<ChatState>, reply: PendingReply) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(REPLY_DELAY_MS)).await;
        // The chat signal is gone if the screen unmounted mid-delay.
        let _ = chat.try_update(|c| match reply {
            PendingReply::Canned => c.push_assistant(CANNED_REPLY, clock::now_ms()),
            PendingReply::Files => c.push_assistant_document(
                FILES_REPLY,
                DocumentPreview {
                    title: FILES_DOC_TITLE.to_owned(),
                    preview: FILES_DOC_PREVIEW.to_owned(),
                },
                clock::now_ms(),
            ),
        });
    });
}

/// Render assistant markdown with raw HTML stripped.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
