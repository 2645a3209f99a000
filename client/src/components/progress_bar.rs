//! Horizontal progress indicator.

use leptos::prelude::*;

/// Progress bar for a `0..=100` percentage signal.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u8>, #[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let width = move || format!("width: {}%", percent.get().min(100));

    view! {
        <div class="progress">
            <div class="progress__header">
                <span class="progress__label">{label}</span>
                <span class="progress__value">{move || format!("{}%", percent.get())}</span>
            </div>
            <div
                class="progress__track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent.get().to_string()
            >
                <div class="progress__fill" style=width></div>
            </div>
        </div>
    }
}
