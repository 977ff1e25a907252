//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{auth::AuthPage, chat::ChatPage};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, bootstraps the session, and sets up
/// client-side routing. `ToastHost` sits above the routes so notifications
/// survive navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    // Fetch the current session once on the client; effects never run
    // during SSR.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            if user.is_none() {
                log::debug!("no active session");
            }
            auth.update(|state| {
                state.user = user;
                state.loading = false;
            });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/loom-ui.css"/>
        <Title text="Loom"/>

        <Router>
            // Toast actions navigate, so the host must live under the router.
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
