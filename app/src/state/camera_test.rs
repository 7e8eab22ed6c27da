use super::*;

#[test]
fn default_state_is_live_translate_mode() {
    let state = CameraState::default();
    assert!(!state.frozen);
    assert!(!state.flash_on);
    assert!(!state.selector_open);
    assert_eq!(state.feed, FeedStatus::Pending);
    assert_eq!(state.source_language, "Auto-detect");
    assert_eq!(state.target_language, "English");
}

#[test]
fn toggle_freeze_twice_restores_original_state() {
    let mut state = CameraState::default();
    let original = state.clone();

    assert!(state.toggle_freeze());
    assert!(state.frozen);
    assert!(!state.toggle_freeze());
    assert_eq!(state, original);
}

#[test]
fn status_line_follows_frozen_flag() {
    let mut state = CameraState::default();
    assert_eq!(state.status_line(), "Real-time Translate Mode");
    state.toggle_freeze();
    assert_eq!(state.status_line(), "Tap detected text to interact");
}

#[test]
fn toggle_flash_and_selector_are_independent() {
    let mut state = CameraState::default();
    state.toggle_flash();
    assert!(state.flash_on);
    assert!(!state.selector_open);

    state.toggle_selector();
    assert!(state.selector_open);
    state.toggle_selector();
    assert!(!state.selector_open);
    assert!(state.flash_on);
}

#[test]
fn language_pair_formats_selection() {
    let mut state = CameraState::default();
    assert_eq!(state.language_pair(), "Auto-detect \u{2192} English");
    state.source_language = "French".to_owned();
    assert_eq!(state.language_pair(), "French \u{2192} English");
}

#[test]
fn detected_text_pairs_are_nonempty() {
    for (detected, translated) in DETECTED_TEXT {
        assert!(!detected.is_empty());
        assert!(!translated.is_empty());
    }
}
