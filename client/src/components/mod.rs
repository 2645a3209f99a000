//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod generation_form;
pub mod nav_bar;
pub mod progress_bar;
pub mod toaster;
pub mod website_card;
