//! Business-logic services shared by route handlers.

pub mod application;
pub mod auth;
pub mod event;
pub mod profile;
pub mod session;
