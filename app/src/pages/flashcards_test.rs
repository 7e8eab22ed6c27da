use super::*;

#[test]
fn counter_label_is_one_based() {
    assert_eq!(counter_label(0, 3), "1 / 3 cards");
    assert_eq!(counter_label(2, 3), "3 / 3 cards");
}

#[test]
fn counter_label_never_overruns_deck() {
    assert_eq!(counter_label(5, 3), "3 / 3 cards");
    assert_eq!(counter_label(0, 0), "1 / 0 cards");
}

#[test]
fn current_dot_wins_over_mastered() {
    assert_eq!(
        dot_class(1, 1, true),
        "flashcards-page__dot flashcards-page__dot--current"
    );
    assert_eq!(
        dot_class(0, 1, true),
        "flashcards-page__dot flashcards-page__dot--mastered"
    );
    assert_eq!(dot_class(2, 1, false), "flashcards-page__dot");
}
