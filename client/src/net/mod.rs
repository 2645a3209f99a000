//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side HTTP calls and `types` defines the wire
//! schema shared with the Axum server.

pub mod api;
pub mod types;
