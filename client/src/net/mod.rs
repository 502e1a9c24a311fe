//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the server, `types` defines the shared
//! wire schema.

pub mod api;
pub mod types;
