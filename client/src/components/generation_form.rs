//! Website generation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns a `GeneratorState` signal and feeds every user event,
//! progress tick, and network result through `GeneratorState::apply`. The
//! returned `Outcome` is carried out here: toasts, the API call, the progress
//! timer, and query invalidation.
//!
//! The progress timer polls the form after each interval and exits as soon as
//! the form is no longer pending on its request or the component is gone.

#[cfg(test)]
#[path = "generation_form_test.rs"]
mod generation_form_test;

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::toaster::notify;
use crate::net::types::GenerationMode;
use crate::state::catalog::{MODES, TEMPLATES};
use crate::state::generator::{GeneratorAction, GeneratorState, Outcome, Transition};
use crate::state::query::QueryClient;
use crate::state::toast::ToastState;

/// Signals the form's side effects write to.
#[derive(Clone, Copy)]
struct FormHandles {
    form: RwSignal<GeneratorState>,
    toasts: RwSignal<ToastState>,
    query: QueryClient,
}

/// Apply one action and carry out the resulting outcome.
fn step(h: FormHandles, action: GeneratorAction) {
    let Some(current) = h.form.try_get_untracked() else {
        return;
    };
    let Transition { state, outcome } = current.apply(action);
    let _ = h.form.try_set(state);

    match outcome {
        None => {}
        Some(Outcome::Rejected(notice) | Outcome::Failed(notice)) => notify(h.toasts, notice),
        Some(Outcome::Completed { notice, invalidate }) => {
            notify(h.toasts, notice);
            h.query.invalidate(invalidate);
        }
        Some(Outcome::Dispatch { request_id, request }) => {
            #[cfg(feature = "hydrate")]
            {
                spawn_progress_timer(h, request_id);
                leptos::task::spawn_local(async move {
                    let action = match crate::net::api::generate_website(&request).await {
                        Ok(result) => GeneratorAction::Succeeded { request_id, result },
                        Err(error) => {
                            log::warn!("generation request {request_id} failed: {error}");
                            GeneratorAction::Failed { request_id, error }
                        }
                    };
                    step(h, action);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (request_id, request);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn spawn_progress_timer(h: FormHandles, request_id: u64) {
    use crate::state::generator::{TICK_INTERVAL_MS, tick_increment};

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(TICK_INTERVAL_MS).await;
            let still_pending = h
                .form
                .try_with_untracked(|s| s.pending_request() == Some(request_id))
                .unwrap_or(false);
            if !still_pending {
                break;
            }
            let increment = tick_increment(crate::util::clock::random_unit());
            step(h, GeneratorAction::Tick { request_id, increment });
        }
    });
}

/// Prompt, template, and mode inputs plus the generate action.
#[component]
pub fn GenerationForm() -> impl IntoView {
    let form = RwSignal::new(GeneratorState::default());
    let h = FormHandles {
        form,
        toasts: expect_context::<RwSignal<ToastState>>(),
        query: expect_context::<QueryClient>(),
    };

    let pending = Memo::new(move |_| form.with(GeneratorState::is_pending));
    let progress = Signal::derive(move || form.with(|s| s.progress));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        step(h, GeneratorAction::Submit);
    };

    view! {
        <form class="generator-form" on:submit=on_submit>
            <label class="generator-form__label" for="generator-prompt">
                "Describe your website"
            </label>
            <textarea
                id="generator-prompt"
                class="generator-form__prompt"
                rows="5"
                placeholder="A warm, welcoming site for a neighbourhood bakery with a menu and opening hours..."
                prop:value=move || form.with(|s| s.prompt.clone())
                prop:disabled=move || pending.get()
                on:input=move |ev| step(h, GeneratorAction::SetPrompt(event_target_value(&ev)))
            ></textarea>

            <fieldset class="generator-form__group" prop:disabled=move || pending.get()>
                <legend class="generator-form__label">"Template"</legend>
                <div class="template-grid">
                    {TEMPLATES
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            view! {
                                <TemplateOption
                                    selected=Signal::derive(move || form.with(|s| s.template == Some(id)))
                                    name=entry.name
                                    description=entry.description
                                    badge=entry.badge
                                    on_select=Callback::new(move |()| step(h, GeneratorAction::SelectTemplate(id)))
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </fieldset>

            <fieldset class="generator-form__group" prop:disabled=move || pending.get()>
                <legend class="generator-form__label">"Generation mode"</legend>
                <div class="mode-grid">
                    {MODES
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            view! {
                                <ModeOption
                                    mode=id
                                    selected=Signal::derive(move || form.with(|s| s.mode == id))
                                    name=entry.name
                                    description=entry.description
                                    badge=entry.badge
                                    on_select=Callback::new(move |()| step(h, GeneratorAction::SelectMode(id)))
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </fieldset>

            <Show when=move || pending.get()>
                <ProgressBar percent=progress label="Generating your website...".to_owned()/>
            </Show>

            <button class="btn btn--primary generator-form__submit" type="submit" prop:disabled=move || pending.get()>
                {move || if pending.get() { "Generating..." } else { "Generate Website" }}
            </button>
        </form>
    }
}

/// Selectable card for one template category.
#[component]
fn TemplateOption(
    selected: Signal<bool>,
    name: &'static str,
    description: &'static str,
    badge: Option<&'static str>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="option-card"
            class:option-card--selected=move || selected.get()
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_select.run(())
        >
            <span class="option-card__name">{name}</span>
            {badge.map(|b| view! { <span class="badge">{b}</span> })}
            <span class="option-card__description">{description}</span>
        </button>
    }
}

/// Radio-style card for one generation mode.
#[component]
fn ModeOption(
    mode: GenerationMode,
    selected: Signal<bool>,
    name: &'static str,
    description: &'static str,
    badge: Option<&'static str>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="option-card" class:option-card--selected=move || selected.get()>
            <input
                type="radio"
                name="generation-mode"
                value=mode.as_str()
                prop:checked=move || selected.get()
                on:change=move |_| on_select.run(())
            />
            <span class="option-card__name">{name}</span>
            {badge.map(|b| view! { <span class="badge badge--premium">{b}</span> })}
            <span class="option-card__description">{description}</span>
        </label>
    }
}
