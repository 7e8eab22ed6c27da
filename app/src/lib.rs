//! CogniScan — a visual prototype for a document-scanning chat assistant.
//!
//! ARCHITECTURE
//! ============
//! The root component in `app` owns which screen is active and the data
//! handed between screens. Screens live in `pages` and delegate rendering
//! details to `components`; their state machines are plain structs in
//! `state` so they stay testable off the browser. `util` isolates the
//! browser boundary (clock, camera media stream).
//!
//! All intelligence here is simulated: OCR output, translations, and deck
//! generation are fixtures in the `documents` and `decks` crates, driven by
//! fixed timers.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
