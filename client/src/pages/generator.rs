//! Generator page hosting the generation form.

use leptos::prelude::*;

use crate::components::generation_form::GenerationForm;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    view! {
        <div class="generator-page">
            <header class="page-header">
                <div>
                    <h1>"Generate a Website"</h1>
                    <p class="muted">"Describe what you need, pick a template, and let the generator build it."</p>
                </div>
            </header>
            <GenerationForm/>
        </div>
    }
}
