//! Camera screen state: freeze/flash toggles, language selection, and the
//! feed status.
//!
//! The feed is display-only. Acquisition failure is swallowed into
//! [`FeedStatus::Unavailable`] and the static placeholder shows instead —
//! no retry, no user-visible error.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// Source-language options, auto-detect first.
pub const SOURCE_LANGUAGES: [&str; 6] = [
    "Auto-detect",
    "French",
    "Spanish",
    "German",
    "Chinese",
    "Japanese",
];

/// Target-language options.
pub const TARGET_LANGUAGES: [&str; 6] = [
    "English",
    "French",
    "Spanish",
    "German",
    "Chinese",
    "Japanese",
];

/// Simulated detection boxes shown while frozen: (detected, translated).
pub const DETECTED_TEXT: [(&str, &str); 2] = [("Bienvenue", "Welcome"), ("Sortie", "Exit")];

/// Lifecycle of the best-effort media stream request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedStatus {
    /// Request not yet resolved.
    #[default]
    Pending,
    /// A live stream is attached to the video element.
    Live,
    /// Access failed or was denied; the placeholder shows.
    Unavailable,
}

/// Camera screen state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraState {
    /// When frozen the video pauses and the AR overlay renders.
    pub frozen: bool,
    pub flash_on: bool,
    pub selector_open: bool,
    pub source_language: String,
    pub target_language: String,
    pub feed: FeedStatus,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            frozen: false,
            flash_on: false,
            selector_open: false,
            source_language: SOURCE_LANGUAGES[0].to_owned(),
            target_language: TARGET_LANGUAGES[0].to_owned(),
            feed: FeedStatus::default(),
        }
    }
}

impl CameraState {
    /// Flip the frozen flag, returning the new value so the caller can
    /// pause or resume the video element.
    pub fn toggle_freeze(&mut self) -> bool {
        self.frozen = !self.frozen;
        self.frozen
    }

    pub fn toggle_flash(&mut self) {
        self.flash_on = !self.flash_on;
    }

    pub fn toggle_selector(&mut self) {
        self.selector_open = !self.selector_open;
    }

    /// Hint line under the shutter button.
    #[must_use]
    pub fn status_line(&self) -> &'static str {
        if self.frozen {
            "Tap detected text to interact"
        } else {
            "Real-time Translate Mode"
        }
    }

    /// Selector button label, e.g. `Auto-detect → English`.
    #[must_use]
    pub fn language_pair(&self) -> String {
        format!("{} \u{2192} {}", self.source_language, self.target_language)
    }
}
