//! Shared UI helpers.

pub mod format;
pub mod guard;
