//! Plain state structs backing the screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens hold these in `RwSignal`s — `view` and `session` app-wide via
//! context, the rest page-local so their lifetime matches the mounted
//! screen. Keeping the structs framework-free lets the transition logic run
//! under native `cargo test`.

pub mod camera;
pub mod chat;
pub mod session;
pub mod view;
