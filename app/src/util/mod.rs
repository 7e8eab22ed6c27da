//! Browser-boundary helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic; native builds compile them down to inert stubs.

pub mod clock;
pub mod media;
