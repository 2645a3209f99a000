//! Settings page: theme selection, signed-in operator, cache configuration.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::query::QueryClient;
use crate::state::theme::{Theme, ThemeState};
use crate::util::theme;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let theme_state = expect_context::<RwSignal<ThemeState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache_config = expect_context::<QueryClient>().config();

    let select_theme = move |preference: Theme| {
        let next = ThemeState { preference, ..theme_state.get_untracked() };
        theme::store(preference);
        theme::apply(next);
        theme_state.set(next);
    };

    let stale_minutes = cache_config.stale_time_ms / 60_000.0;
    let cache_minutes = cache_config.cache_time_ms / 60_000.0;

    view! {
        <div class="settings-page">
            <header class="page-header">
                <h1>"Settings"</h1>
            </header>

            <section class="settings-section">
                <h2>"Appearance"</h2>
                <div class="segmented">
                    {Theme::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="segmented__option"
                                    class:segmented__option--active=move || theme_state.get().preference == t
                                    on:click=move |_| select_theme(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="settings-section">
                <h2>"Account"</h2>
                <p>
                    "Signed in as "
                    <strong>{move || auth.with(|a| a.display_name().to_owned())}</strong>
                </p>
            </section>

            <section class="settings-section">
                <h2>"Data"</h2>
                <dl class="settings-list">
                    <dt>"Cache freshness"</dt>
                    <dd>{format!("{stale_minutes} minutes")}</dd>
                    <dt>"Unused data kept for"</dt>
                    <dd>{format!("{cache_minutes} minutes")}</dd>
                    <dt>"Read retries"</dt>
                    <dd>{cache_config.retry}</dd>
                </dl>
            </section>
        </div>
    }
}
