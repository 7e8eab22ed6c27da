use std::str::FromStr;

use crate::{DocumentKind, DocumentRecord, ProcessingStage, STAGE_COUNT, demo};

fn record(kind: DocumentKind) -> DocumentRecord {
    DocumentRecord::scanned("doc-1".to_owned(), "Scanned Document", kind)
}

// =============================================================
// DocumentKind
// =============================================================

#[test]
fn kind_default_is_general() {
    assert_eq!(DocumentKind::default(), DocumentKind::General);
}

#[test]
fn kind_round_trips_through_str() {
    for kind in [
        DocumentKind::Receipt,
        DocumentKind::Notes,
        DocumentKind::Legal,
        DocumentKind::General,
    ] {
        assert_eq!(DocumentKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn kind_parse_rejects_unknown_tag() {
    let err = DocumentKind::from_str("poetry").unwrap_err();
    assert!(err.to_string().contains("poetry"));
}

// =============================================================
// DocumentRecord
// =============================================================

#[test]
fn scanned_record_starts_unprocessed() {
    let doc = record(DocumentKind::Notes);
    assert_eq!(doc.title, "Scanned Document");
    assert_eq!(doc.kind, DocumentKind::Notes);
    assert!(doc.thumbnail.is_none());
    assert!(!doc.is_processed());
}

#[test]
fn complete_extraction_marks_processed() {
    let mut doc = record(DocumentKind::Notes);
    doc.complete_extraction(demo::EXTRACTED_TEXT);
    assert!(doc.is_processed());
    assert_eq!(doc.extracted_text.as_deref(), Some(demo::EXTRACTED_TEXT));
}

// =============================================================
// ProcessingStage
// =============================================================

#[test]
fn stage_default_is_quality() {
    assert_eq!(ProcessingStage::default(), ProcessingStage::Quality);
}

#[test]
fn stage_advances_monotonically_to_terminal() {
    let mut stage = ProcessingStage::default();
    let mut seen = vec![stage];
    for _ in 0..STAGE_COUNT {
        let next = stage.advance();
        assert!(next >= stage, "stage went backwards: {stage:?} -> {next:?}");
        stage = next;
        seen.push(stage);
    }
    assert!(stage.is_terminal());
    // Indices never decrease across the whole walk.
    for pair in seen.windows(2) {
        assert!(pair[1].index() >= pair[0].index());
    }
}

#[test]
fn terminal_stage_halts() {
    let stage = ProcessingStage::Complete;
    assert_eq!(stage.advance(), ProcessingStage::Complete);
    assert_eq!(stage.advance().advance(), ProcessingStage::Complete);
}

#[test]
fn stage_indices_cover_sequence() {
    assert_eq!(ProcessingStage::Quality.index(), 0);
    assert_eq!(ProcessingStage::Handwriting.index(), 1);
    assert_eq!(ProcessingStage::Extraction.index(), 2);
    assert_eq!(ProcessingStage::Complete.index(), 3);
}

#[test]
fn stage_fraction_reaches_one_at_terminal() {
    assert!((ProcessingStage::Quality.fraction() - 0.25).abs() < f64::EPSILON);
    assert!((ProcessingStage::Complete.fraction() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn stage_labels_are_distinct() {
    let labels = [
        ProcessingStage::Quality.label(),
        ProcessingStage::Handwriting.label(),
        ProcessingStage::Extraction.label(),
        ProcessingStage::Complete.label(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for (j, b) in labels.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn demo_text_opens_with_title() {
    assert!(demo::EXTRACTED_TEXT.starts_with(demo::EXTRACTED_TITLE));
}
