//! Toast overlay rendering the `UiState` queue.
//!
//! DESIGN
//! ======
//! `ToastHost` is mounted once, above the router, and renders whatever is in
//! the queue. Each toast schedules its own auto-dismiss timer (browser only),
//! and an optional action button navigates client-side before dismissing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::{Toast, UiState};

/// Overlay container for all active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || ui.get().toasts
                key=|toast| toast.id.clone()
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

/// A single rendered toast with close button, optional description and action.
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let id = toast.id.clone();

    // Schedule auto-dismiss once per toast; the timer may race a manual
    // close, which dismiss_toast tolerates.
    #[cfg(feature = "hydrate")]
    {
        let id = id.clone();
        let duration_ms = u32::try_from(toast.duration_ms).unwrap_or(u32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            ui.update(|state| state.dismiss_toast(&id));
        });
    }

    let close_id = id.clone();
    let on_close = move |_| ui.update(|state| state.dismiss_toast(&close_id));

    let action_view = toast.action.clone().map(|action| {
        let navigate = use_navigate();
        let action_id = id.clone();
        let on_action = move |_| {
            navigate(&action.to, NavigateOptions::default());
            ui.update(|state| state.dismiss_toast(&action_id));
        };
        view! {
            <button class="toast__action" on:click=on_action>
                {action.label.clone()}
            </button>
        }
    });

    view! {
        <div class=format!("toast toast--{}", toast.level.css_class())>
            <span class="toast__indicator">{toast.level.indicator()}</span>
            <div class="toast__body">
                <p class="toast__message">{toast.message.clone()}</p>
                {toast
                    .description
                    .clone()
                    .map(|text| view! { <p class="toast__description">{text}</p> })}
            </div>
            {action_view}
            <button class="toast__close" on:click=on_close title="Dismiss">
                "×"
            </button>
        </div>
    }
}
