//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod analytics;
pub mod dashboard;
pub mod docs;
pub mod generator;
pub mod home;
pub mod settings;
