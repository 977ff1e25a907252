//! Sign-in / sign-up page.
//!
//! The `form` query parameter selects the initial form (`/auth?form=signup`
//! opens sign-up, anything else sign-in), so toasts and links can deep-link
//! straight to account creation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::auth::AuthState;
use crate::state::ui::{Toast, UiState};

/// Which form the auth page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    Signin,
    Signup,
}

/// Map the `form` query parameter to the form to open.
pub fn initial_form(param: Option<&str>) -> AuthForm {
    match param {
        Some("signup") => AuthForm::Signup,
        _ => AuthForm::Signin,
    }
}

/// Auth page — email/password sign-in and account creation.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();

    let form = RwSignal::new(initial_form(
        query.get_untracked().get("form").as_deref(),
    ));
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move || {
        if email.get().trim().is_empty() || password.get().is_empty() {
            ui.update(|state| {
                state.push_toast(Toast::warning("Email and password are required"));
            });
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match form.get_untracked() {
                    AuthForm::Signin => {
                        crate::net::api::signin(email.get_untracked().trim(), &password.get_untracked()).await
                    }
                    AuthForm::Signup => {
                        crate::net::api::signup(
                            name.get_untracked().trim(),
                            email.get_untracked().trim(),
                            &password.get_untracked(),
                        )
                        .await
                    }
                };
                match result {
                    Ok(user) => {
                        auth.update(|state| {
                            state.user = Some(user);
                            state.loading = false;
                        });
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(message) => {
                        log::warn!("auth request failed: {message}");
                        ui.update(|state| {
                            state.push_toast(Toast::error(message));
                        });
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Loom"</h1>

            <Show when=move || form.get() == AuthForm::Signup>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </Show>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />

            <button
                class="auth-page__submit"
                prop:disabled=move || auth.get().loading
                on:click=move |_| submit()
            >
                {move || match form.get() {
                    AuthForm::Signin => "Sign in",
                    AuthForm::Signup => "Create Account",
                }}
            </button>

            <button
                class="auth-page__toggle"
                on:click=move |_| {
                    form.update(|f| {
                        *f = match f {
                            AuthForm::Signin => AuthForm::Signup,
                            AuthForm::Signup => AuthForm::Signin,
                        };
                    });
                }
            >
                {move || match form.get() {
                    AuthForm::Signin => "Need an account? Sign up",
                    AuthForm::Signup => "Already registered? Sign in",
                }}
            </button>
        </div>
    }
}
