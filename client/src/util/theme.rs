//! Theme persistence and application.
//!
//! Reads the stored theme from `localStorage`, resolves `System` through
//! `prefers-color-scheme`, and sets a `data-theme` attribute on `<html>`.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{Theme, ThemeState};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "snapsite-theme";

/// Load the stored preference and the current system scheme.
pub fn read_state() -> ThemeState {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeState::default();
        };

        let preference = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| v.parse::<Theme>().ok())
            .unwrap_or_default();

        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        ThemeState { preference, system_dark }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeState::default()
    }
}

/// Value written to the `data-theme` attribute.
pub fn attribute_value(state: ThemeState) -> &'static str {
    if state.is_dark() { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(state: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", attribute_value(state));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Persist `preference` to localStorage.
pub fn store(preference: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, preference.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preference;
    }
}
