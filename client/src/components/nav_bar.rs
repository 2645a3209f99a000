//! Top navigation bar with route links and the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::theme::ThemeState;
use crate::util::theme;

const LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/generator", "Generator"),
    ("/analytics", "Analytics"),
    ("/settings", "Settings"),
    ("/docs", "Docs"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let theme_state = expect_context::<RwSignal<ThemeState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_toggle = move |_| {
        let next = theme_state.get_untracked().toggled();
        theme::store(next.preference);
        theme::apply(next);
        theme_state.set(next);
    };

    view! {
        <header class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">"Sitegen"</A>
            <nav class="nav-bar__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! { <A href=*href attr:class="nav-bar__link">{*label}</A> }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{move || auth.with(|a| a.display_name().to_owned())}</span>
            <button class="btn nav-bar__theme" title="Toggle theme" on:click=on_toggle>
                {move || if theme_state.get().is_dark() { "Light" } else { "Dark" }}
            </button>
        </header>
    }
}
