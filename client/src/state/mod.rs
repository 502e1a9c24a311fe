//! Client-side application state.
//!
//! `auth` holds the session/profile state machine, `channel` broadcasts
//! session changes, and `provider` wires both into the reactive context.

pub mod auth;
pub mod channel;
pub mod provider;
