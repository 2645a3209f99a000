//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`generator`, `query`, `toast`, etc.) so
//! components depend on small focused models. Modules hold plain data with
//! pure transitions; `App` wraps them in signals and provides them as context.
//! `query` additionally owns the reactive `QueryClient` handle.

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod generator;
pub mod query;
pub mod theme;
pub mod toast;
