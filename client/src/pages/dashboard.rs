//! Dashboard page listing generated websites.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::website_card::WebsiteCard;
use crate::net::types::WebsiteSummary;
use crate::state::query::{QueryClient, QueryKey};

/// The `websites` query, re-run whenever the key is invalidated.
pub fn use_websites() -> LocalResource<Result<Vec<WebsiteSummary>, String>> {
    let query = expect_context::<QueryClient>();
    LocalResource::new(move || {
        // Subscribe to invalidations of this key.
        let _epoch = query.epoch(QueryKey::WEBSITES);
        async move {
            query
                .fetch_query(QueryKey::WEBSITES, crate::net::api::fetch_websites)
                .await
        }
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let websites = use_websites();

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Your Websites"</h1>
                <A href="/generator" attr:class="btn btn--primary">"+ New Website"</A>
            </header>

            <Suspense fallback=move || view! { <p class="muted">"Loading websites..."</p> }>
                {move || {
                    websites
                        .get()
                        .map(|result| match result {
                            Err(err) => {
                                view! {
                                    <div class="empty-state empty-state--error">
                                        <p>"Could not load websites."</p>
                                        <p class="muted">{err}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <div class="empty-state">
                                        <p>"No websites yet."</p>
                                        <A href="/generator" attr:class="btn">"Generate your first site"</A>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="dashboard-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|w| view! { <WebsiteCard website=w/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
