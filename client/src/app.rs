//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toaster::Toaster;
use crate::pages::{
    analytics::AnalyticsPage, dashboard::DashboardPage, docs::DocsPage, generator::GeneratorPage,
    home::HomePage, settings::SettingsPage,
};
use crate::state::auth::AuthState;
use crate::state::query::{QueryClient, QueryConfig};
use crate::state::theme::ThemeState;
use crate::state::toast::ToastState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds every shared dependency here and hands it down through context;
/// nothing below `App` constructs its own cache, theme, auth, or toast state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let query = QueryClient::new(QueryConfig::default());
    let theme_state = RwSignal::new(ThemeState::default());
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let toasts = RwSignal::new(ToastState::default());

    provide_context(query);
    provide_context(theme_state);
    provide_context(auth);
    provide_context(toasts);

    // Browser-only: stored theme and the signed-in operator.
    Effect::new(move |_| {
        let stored = theme::read_state();
        theme::apply(stored);
        theme_state.set(stored);
    });
    let current_user = LocalResource::new(crate::net::api::fetch_current_user);
    Effect::new(move |_| {
        if let Some(user) = current_user.get() {
            auth.set(AuthState { user, loading: false });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sitegen.css"/>
        <Title text="Sitegen"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("generator") view=GeneratorPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("docs") view=DocsPage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href="/" class="btn">"Go home"</a>
        </div>
    }
}
