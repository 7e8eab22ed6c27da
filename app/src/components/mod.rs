//! Reusable UI component modules.
//!
//! Components render shared chrome for the screens; screen-specific dialogs
//! stay private inside their page modules.

pub mod document_card;
pub mod progress_bar;
