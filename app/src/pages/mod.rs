//! Screen modules for the view switcher.
//!
//! ARCHITECTURE
//! ============
//! Each screen owns its ephemeral state and delegates shared rendering
//! details to `components`. Screens never talk to each other directly; data
//! moves through the `ViewState` context.

pub mod camera;
pub mod chat;
pub mod flashcards;
pub mod login;
pub mod processing;
