//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{Notice, NoticeKind, ToastState};

/// Push a notice onto the shared toast stack and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
            let _ = toasts.try_update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

fn variant_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "toast",
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--destructive",
    }
}

/// Fixed-position stack of the currently visible toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li class=variant_class(toast.notice.kind) role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.notice.title}</p>
                                <p class="toast__description">{toast.notice.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
