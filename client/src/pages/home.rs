//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Websites from a single description"</h1>
                <p class="hero__subtitle">
                    "Tell the generator what your site is for, choose a template, and get a complete site back."
                </p>
                <div class="hero__actions">
                    <A href="/generator" attr:class="btn btn--primary">"Start generating"</A>
                    <A href="/dashboard" attr:class="btn">"View your websites"</A>
                </div>
            </section>
        </div>
    }
}
