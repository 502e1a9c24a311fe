//! Shared UI components.

pub mod event_card;
pub mod footer;
pub mod header;
pub mod protected_route;
