//! Analytics page with counts derived from the `websites` query.

use leptos::prelude::*;

use crate::pages::dashboard::use_websites;
use crate::state::analytics::WebsiteStats;
use crate::state::catalog;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let websites = use_websites();

    view! {
        <div class="analytics-page">
            <header class="page-header">
                <h1>"Analytics"</h1>
            </header>
            <Suspense fallback=move || view! { <p class="muted">"Loading analytics..."</p> }>
                {move || {
                    websites
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <StatsView stats=WebsiteStats::from_websites(&list)/> }.into_any(),
                            Err(err) => {
                                view! {
                                    <div class="empty-state empty-state--error">
                                        <p>"Could not load analytics."</p>
                                        <p class="muted">{err}</p>
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

#[component]
fn StatsView(stats: WebsiteStats) -> impl IntoView {
    let top = stats
        .top_template()
        .map_or("n/a", |t| catalog::template(t).name);

    let template_rows = stats
        .by_template
        .iter()
        .map(|&(id, count)| (catalog::template(id).name, count, stats.percent(count)))
        .collect::<Vec<_>>();
    let mode_rows = stats
        .by_mode
        .iter()
        .map(|&(id, count)| (catalog::mode(id).name, count, stats.percent(count)))
        .collect::<Vec<_>>();

    view! {
        <div class="stat-cards">
            <div class="stat-card">
                <span class="stat-card__label">"Total websites"</span>
                <span class="stat-card__value">{stats.total}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Most used template"</span>
                <span class="stat-card__value">{top}</span>
            </div>
        </div>
        <BreakdownTable title="By template" rows=template_rows/>
        <BreakdownTable title="By mode" rows=mode_rows/>
    }
}

#[component]
fn BreakdownTable(title: &'static str, rows: Vec<(&'static str, usize, u32)>) -> impl IntoView {
    view! {
        <section class="breakdown">
            <h2>{title}</h2>
            <table class="breakdown__table">
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(name, count, percent)| {
                            view! {
                                <tr>
                                    <td>{name}</td>
                                    <td class="breakdown__count">{count}</td>
                                    <td class="breakdown__bar">
                                        <div class="breakdown__fill" style=format!("width: {percent}%")></div>
                                    </td>
                                    <td class="breakdown__percent">{format!("{percent}%")}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}
