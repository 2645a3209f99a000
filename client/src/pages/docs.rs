//! Static usage documentation.

use leptos::prelude::*;

use crate::state::catalog::{MODES, TEMPLATES};

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <div class="docs-page">
            <header class="page-header">
                <h1>"Documentation"</h1>
            </header>

            <section class="docs-section">
                <h2>"Generating a website"</h2>
                <ol>
                    <li>"Open the Generator page."</li>
                    <li>"Describe the site: who it is for, what it should contain, and the tone."</li>
                    <li>"Choose a template and a generation mode."</li>
                    <li>"Press Generate Website. New sites appear on the Dashboard when generation finishes."</li>
                </ol>
            </section>

            <section class="docs-section">
                <h2>"Templates"</h2>
                <dl>
                    {TEMPLATES
                        .iter()
                        .map(|t| {
                            view! {
                                <dt><code>{t.id.as_str()}</code>" - "{t.name}</dt>
                                <dd>{t.description}</dd>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
            </section>

            <section class="docs-section">
                <h2>"Generation modes"</h2>
                <dl>
                    {MODES
                        .iter()
                        .map(|m| {
                            view! {
                                <dt><code>{m.id.as_str()}</code>" - "{m.name}</dt>
                                <dd>{m.description}</dd>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
            </section>
        </div>
    }
}
