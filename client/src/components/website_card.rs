//! Card for one generated website on the dashboard.

use leptos::prelude::*;

use crate::net::types::{GenerationMode, WebsiteSummary};
use crate::state::catalog;

#[component]
pub fn WebsiteCard(website: WebsiteSummary) -> impl IntoView {
    let template = catalog::template(website.template).name;
    let premium = website.generation_mode == GenerationMode::Premium;
    let created = website
        .created_at
        .split('T')
        .next()
        .unwrap_or_default()
        .to_owned();

    view! {
        <article class="website-card">
            <header class="website-card__header">
                <h3 class="website-card__name">{website.name}</h3>
                {premium.then(|| view! { <span class="badge badge--premium">"Premium"</span> })}
            </header>
            <p class="website-card__meta">
                <span>{template}</span>
                <span class="website-card__divider">"·"</span>
                <span>{created}</span>
            </p>
            {website
                .url
                .map(|url| {
                    view! {
                        <a class="website-card__link" href=url target="_blank" rel="noopener noreferrer">
                            "Open site"
                        </a>
                    }
                })}
        </article>
    }
}
