use super::*;

#[test]
fn flashcard_generation_is_offered_in_sidebar() {
    let labels: Vec<_> = intelligent_actions().iter().map(|(label, _)| *label).collect();
    assert!(labels.contains(&"Generate Flashcards"));
    assert_eq!(labels.len(), 3);
}

#[test]
fn action_descriptions_are_nonempty() {
    for (label, description) in intelligent_actions() {
        assert!(!label.is_empty());
        assert!(!description.is_empty());
    }
}

#[test]
fn export_options_are_distinct() {
    let options = export_options();
    for (i, a) in options.iter().enumerate() {
        for (j, b) in options.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
