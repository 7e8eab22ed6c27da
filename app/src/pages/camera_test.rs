use super::*;

#[test]
fn flash_label_follows_toggle() {
    assert_eq!(flash_label(true), "Flash on");
    assert_eq!(flash_label(false), "Flash off");
}

#[test]
fn language_lists_cover_detected_pairs() {
    // The overlay translates into the default target language.
    assert!(TARGET_LANGUAGES.contains(&"English"));
    assert!(SOURCE_LANGUAGES.contains(&"French"));
}
