//! Root component: session gate and screen switcher.
//!
//! DESIGN
//! ======
//! Navigation is state-driven rather than URL-routed: the active screen and
//! the data handed between screens (the in-flight document, the active
//! deck) live in one `ViewState` signal provided via context. Screens keep
//! their own ephemeral state; it is discarded when they unmount.

use leptos::prelude::*;

use crate::pages::camera::CameraPage;
use crate::pages::chat::ChatPage;
use crate::pages::flashcards::FlashcardsPage;
use crate::pages::login::LoginPage;
use crate::pages::processing::ProcessingPage;
use crate::state::session::SessionState;
use crate::state::view::{ActiveView, ViewState};

/// Application root. Provides the session and view-switcher contexts and
/// renders the login screen until a session exists.
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    let view = RwSignal::new(ViewState::default());
    provide_context(session);
    provide_context(view);

    view! {
        <div class="app-shell">
            <Show when=move || session.get().is_signed_in() fallback=|| view! { <LoginPage /> }>
                {move || match view.get().active {
                    ActiveView::Chat => view! { <ChatPage /> }.into_any(),
                    ActiveView::Camera => view! { <CameraPage /> }.into_any(),
                    ActiveView::Processing => {
                        if view.get().document.is_some() {
                            view! { <ProcessingPage /> }.into_any()
                        } else {
                            view! { <ChatPage /> }.into_any()
                        }
                    }
                    ActiveView::Flashcards => {
                        if view.get().deck.is_some() {
                            view! { <FlashcardsPage /> }.into_any()
                        } else {
                            view! { <ChatPage /> }.into_any()
                        }
                    }
                }}
            </Show>
        </div>
    }
}
