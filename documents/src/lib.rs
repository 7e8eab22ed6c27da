//! Shared document model for the CogniScan prototype.
//!
//! This crate owns the scanned-document record and the staged OCR
//! sequencer consumed by the `cogniscan` UI crate. It is UI-framework
//! agnostic so page code can drive it from signals and tests can drive it
//! directly. All extraction output in the prototype is simulated; the
//! fixture text lives in [`demo`].

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`DocumentKind`] from its wire string.
#[derive(Debug, thiserror::Error)]
#[error("unknown document kind: {0}")]
pub struct ParseKindError(String);

/// Category tag assigned to a scanned document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Receipt,
    Notes,
    Legal,
    #[default]
    General,
}

impl DocumentKind {
    /// Stable lowercase tag used in serialized form and UI badges.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Receipt => "receipt",
            Self::Notes => "notes",
            Self::Legal => "legal",
            Self::General => "general",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receipt" => Ok(Self::Receipt),
            "notes" => Ok(Self::Notes),
            "legal" => Ok(Self::Legal),
            "general" => Ok(Self::General),
            other => Err(ParseKindError(other.to_owned())),
        }
    }
}

/// A scanned document as handed between screens.
///
/// Created when a scan is initiated; `extracted_text` stays `None` until the
/// processing sequencer reaches its terminal stage. Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique document identifier (UUID string).
    pub id: String,
    /// Display title, usually the uploaded filename.
    pub title: String,
    /// Category tag.
    pub kind: DocumentKind,
    /// Optional thumbnail URL.
    pub thumbnail: Option<String>,
    /// OCR output, assigned once processing completes.
    pub extracted_text: Option<String>,
}

impl DocumentRecord {
    /// Create a fresh record for a newly initiated scan.
    #[must_use]
    pub fn scanned(id: String, title: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            thumbnail: None,
            extracted_text: None,
        }
    }

    /// Whether extraction has produced output for this document.
    #[must_use]
    pub fn is_processed(&self) -> bool {
        self.extracted_text.is_some()
    }

    /// Attach extraction output, marking the document processed.
    pub fn complete_extraction(&mut self, text: impl Into<String>) {
        self.extracted_text = Some(text.into());
    }
}

/// Number of stages in the processing sequence, terminal stage included.
pub const STAGE_COUNT: usize = 4;

/// Milliseconds between stage advances in the simulated pipeline.
pub const STAGE_INTERVAL_MS: u64 = 1200;

/// The four-stage OCR processing sequence.
///
/// Advancement is strictly forward: each stage yields the next until
/// [`ProcessingStage::Complete`], which yields itself. There is no error
/// stage and no branching; the only cancellation is dropping the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStage {
    /// Checking scan quality before extraction begins.
    #[default]
    Quality,
    /// Locating handwritten regions.
    Handwriting,
    /// Running text extraction.
    Extraction,
    /// Terminal stage; extraction output is available.
    Complete,
}

impl ProcessingStage {
    /// The next stage, clamped at [`Self::Complete`].
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Quality => Self::Handwriting,
            Self::Handwriting => Self::Extraction,
            Self::Extraction | Self::Complete => Self::Complete,
        }
    }

    /// Zero-based position in the sequence.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Quality => 0,
            Self::Handwriting => 1,
            Self::Extraction => 2,
            Self::Complete => 3,
        }
    }

    /// Whether this is the terminal stage.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Complete
    }

    /// Progress through the sequence in `0.0..=1.0`, counting the current
    /// stage as underway.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(self) -> f64 {
        (self.index() + 1) as f64 / STAGE_COUNT as f64
    }

    /// Status line shown while this stage runs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Quality => "Analyzing document quality...",
            Self::Handwriting => "Detecting handwriting...",
            Self::Extraction => "Extracting text...",
            Self::Complete => "Processing complete!",
        }
    }
}

/// Hardcoded prototype fixtures standing in for real OCR output.
pub mod demo {
    /// Title line of the demo extraction.
    pub const EXTRACTED_TITLE: &str = "Q4 PLANNING NOTES";

    /// Extraction text revealed when the demo scan completes.
    pub const EXTRACTED_TEXT: &str = "Q4 PLANNING NOTES

Meeting Agenda - October 15, 2023

1. Review Q3 Performance
   \u{2022} Revenue: $2.4M (target: $2.5M)
   \u{2022} Customer acquisition: 150 new clients
   \u{2022} Team expansion: 5 new hires

2. Q4 Objectives
   \u{2022} Launch new product line
   \u{2022} Expand sales team by 30%
   \u{2022} Increase marketing budget
   \u{2022} Focus on customer retention

3. Key Metrics to Track
   \u{2022} Monthly recurring revenue (MRR)
   \u{2022} Customer lifetime value (LTV)
   \u{2022} Churn rate
   \u{2022} Net promoter score (NPS)

4. Action Items
   \u{2022} Finalize Q4 budget by Oct 20
   \u{2022} Schedule team kickoff meeting
   \u{2022} Update product roadmap
   \u{2022} Review vendor contracts";
}
