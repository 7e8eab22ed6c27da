//! Camera screen with the simulated AR translation overlay.
//!
//! DESIGN
//! ======
//! The media stream is requested best-effort for display only; when access
//! fails the static placeholder stays visible and nothing is reported to
//! the user. Freezing pauses the video element and reveals the fixed
//! detection boxes — no frames are captured or analyzed.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use leptos::prelude::*;

use crate::state::camera::{
    CameraState, DETECTED_TEXT, FeedStatus, SOURCE_LANGUAGES, TARGET_LANGUAGES,
};
use crate::state::view::ViewState;

#[component]
pub fn CameraPage() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let camera = RwSignal::new(CameraState::default());
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "csr")]
    {
        let stream_handle = StoredValue::new_local(None::<web_sys::MediaStream>);
        leptos::task::spawn_local(async move {
            match crate::util::media::open_camera_stream().await {
                Some(stream) => {
                    if let Some(video) = video_ref.get_untracked() {
                        video.set_src_object(Some(&stream));
                    }
                    stream_handle.set_value(Some(stream));
                    let _ = camera.try_update(|c| c.feed = FeedStatus::Live);
                }
                None => {
                    let _ = camera.try_update(|c| c.feed = FeedStatus::Unavailable);
                }
            }
        });
        on_cleanup(move || {
            if let Some(stream) = stream_handle.get_value() {
                crate::util::media::stop_stream(&stream);
            }
        });
    }

    let on_back = move |_| view.update(|v| v.back_to_chat());
    let on_flash = move |_| camera.update(|c| c.toggle_flash());
    let on_selector = move |_| camera.update(|c| c.toggle_selector());

    let on_freeze = move |_| {
        let mut frozen = false;
        camera.update(|c| frozen = c.toggle_freeze());
        #[cfg(feature = "csr")]
        {
            if let Some(video) = video_ref.get_untracked() {
                if frozen {
                    let _ = video.pause();
                } else {
                    let _ = video.play();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = frozen;
    };

    view! {
        <div class="camera-page">
            <div class="camera-page__feed">
                <video
                    class="camera-page__video"
                    node_ref=video_ref
                    autoplay=true
                    muted=true
                    playsinline=true
                ></video>

                <Show when=move || camera.get().feed != FeedStatus::Live>
                    <div class="camera-page__placeholder">
                        <span class="camera-page__placeholder-icon" aria-hidden="true">"\u{1F310}"</span>
                        <p class="camera-page__placeholder-label">"Camera View (Demo Mode)"</p>
                    </div>
                </Show>

                <Show when=move || camera.get().frozen>
                    <div class="camera-page__overlay">
                        {DETECTED_TEXT
                            .iter()
                            .map(|(detected, translated)| {
                                view! {
                                    <div class="detection-box">
                                        <p class="detection-box__source">{*detected}</p>
                                        <p class="detection-box__translation">{*translated}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>

                <div class="camera-page__top-bar">
                    <button class="btn camera-page__back" title="Back to chat" on:click=on_back>
                        "\u{2190}"
                    </button>
                    <button class="btn camera-page__languages" on:click=on_selector>
                        {move || camera.get().language_pair()}
                    </button>
                    <button
                        class="btn camera-page__flash"
                        title=move || flash_label(camera.get().flash_on)
                        on:click=on_flash
                    >
                        {move || if camera.get().flash_on { "\u{26A1}" } else { "\u{1F506}" }}
                    </button>
                </div>

                <Show when=move || camera.get().selector_open>
                    <LanguageSelector camera=camera />
                </Show>

                <div class="camera-page__controls">
                    <button class="btn camera-page__secondary" title="Capture still" on:click=|_| {}>
                        "\u{25A0}"
                    </button>
                    <button class="camera-page__shutter" title="Freeze frame" on:click=on_freeze>
                        "\u{25CB}"
                    </button>
                    <p class="camera-page__status">{move || camera.get().status_line()}</p>
                    <Show when=move || camera.get().frozen>
                        <button class="btn camera-page__unfreeze" on:click=on_freeze>
                            "Unfreeze Frame"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Source/target language picker shown over the feed.
#[component]
fn LanguageSelector(camera: RwSignal<CameraState>) -> impl IntoView {
    view! {
        <div class="language-selector">
            <label class="language-selector__label">
                "From"
                <select
                    class="language-selector__select"
                    prop:value=move || camera.get().source_language
                    on:change=move |ev| {
                        camera.update(|c| c.source_language = event_target_value(&ev));
                    }
                >
                    {SOURCE_LANGUAGES
                        .iter()
                        .map(|lang| view! { <option value=*lang>{*lang}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="language-selector__label">
                "To"
                <select
                    class="language-selector__select"
                    prop:value=move || camera.get().target_language
                    on:change=move |ev| {
                        camera.update(|c| c.target_language = event_target_value(&ev));
                    }
                >
                    {TARGET_LANGUAGES
                        .iter()
                        .map(|lang| view! { <option value=*lang>{*lang}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <button
                class="btn btn--primary language-selector__apply"
                on:click=move |_| camera.update(|c| c.selector_open = false)
            >
                "Apply"
            </button>
        </div>
    }
}

fn flash_label(on: bool) -> &'static str {
    if on { "Flash on" } else { "Flash off" }
}
