//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap themselves in
//! `components::protected_route::Protected`.

pub mod admin_dashboard;
pub mod create_event;
pub mod event_details;
pub mod events;
pub mod home;
pub mod login;
pub mod org_dashboard;
pub mod profile;
pub mod register_org;
pub mod signup;
pub mod unauthorized;
