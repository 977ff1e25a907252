//! Main chat page with guest-gated feature entry points.
//!
//! Chat itself is never gated — guest accounts are chat-only, so the message
//! box stays available. Everything beyond it consults the guest guard first
//! and only proceeds when allowed.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::guest::{check_guest_access, is_guest};

/// Feature panels reachable from the chat page toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FeaturePanel {
    VoiceChat,
    ImageGeneration,
    Workspace,
}

impl FeaturePanel {
    /// Human-readable label, also used in the guest warning toast.
    fn label(self) -> &'static str {
        match self {
            Self::VoiceChat => "voice chat",
            Self::ImageGeneration => "image generation",
            Self::Workspace => "the workspace",
        }
    }
}

/// Chat page — message history, input box, and gated feature buttons.
#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let messages = RwSignal::new(Vec::<String>::new());
    let input = RwSignal::new(String::new());
    let open_panel = RwSignal::new(None::<FeaturePanel>);

    let open_feature = move |panel: FeaturePanel| {
        if check_guest_access(auth, ui, Some(panel.label())) {
            open_panel.set(Some(panel));
        }
    };

    let send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        messages.update(|list| list.push(text.trim().to_owned()));
        input.set(String::new());
    };

    view! {
        <div class="chat-page">
            <Show when=move || is_guest(auth)>
                <div class="chat-page__guest-banner">
                    "You are browsing as a guest. "
                    <a href="/auth?form=signup">"Create an account"</a>
                    " to unlock all features."
                </div>
            </Show>

            <nav class="chat-page__toolbar">
                <button on:click=move |_| open_feature(FeaturePanel::VoiceChat)>
                    "Voice chat"
                </button>
                <button on:click=move |_| open_feature(FeaturePanel::ImageGeneration)>
                    "Generate image"
                </button>
                <button on:click=move |_| open_feature(FeaturePanel::Workspace)>
                    "Workspace"
                </button>
            </nav>

            <div class="chat-page__messages">
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=|(_, text)| view! { <p class="chat-page__message">{text}</p> }
                />
            </div>

            <div class="chat-page__composer">
                <input
                    type="text"
                    placeholder="Send a message"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button on:click=move |_| send()>"Send"</button>
            </div>

            <Show when=move || open_panel.get().is_some()>
                <div class="chat-page__panel">
                    {move || open_panel.get().map(FeaturePanel::label)}
                </div>
            </Show>
        </div>
    }
}
