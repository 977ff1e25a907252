//! Guest access guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest accounts are chat-only. Feature entry points call
//! [`check_guest_access`] before proceeding; for a guest it raises a single
//! "create an account" toast and reports the denial, for everyone else it is
//! a no-op returning `true`. The guard never blocks the operation itself —
//! call sites decide what to do with the answer.
//!
//! An absent session reads as non-guest on purpose: unauthenticated contexts
//! are handled elsewhere and must not trip the guest warning.

#[cfg(test)]
#[path = "guest_test.rs"]
mod guest_test;

use leptos::prelude::*;

use crate::net::types::SessionUser;
use crate::state::auth::AuthState;
use crate::state::ui::{Toast, UiState};

/// The `user_type` value marking a guest account.
pub const GUEST_USER_TYPE: &str = "guest";

/// Feature label used when the caller does not name one.
pub const DEFAULT_FEATURE_LABEL: &str = "this feature";

/// Where the "Create Account" toast action sends the user.
pub const SIGNUP_ROUTE: &str = "/auth?form=signup";

/// Whether this user record is a guest account.
pub fn is_guest_user(user: Option<&SessionUser>) -> bool {
    user.is_some_and(|u| u.user_type == GUEST_USER_TYPE)
}

/// Build the warning toast shown when a guest hits a gated feature.
pub fn guest_warning(feature: &str) -> Toast {
    Toast::error(format!("You don't have full access to {feature}"))
        .with_description(
            "Guest users can only access chat features. \
             Please create an account for full access.",
        )
        .with_duration_ms(5000)
        .with_action("Create Account", SIGNUP_ROUTE)
}

/// Check whether the current user may use `feature`, warning guests.
///
/// Snapshots the auth state without subscribing. Returns `true` (and does
/// nothing) for non-guests and for absent sessions; for a guest, pushes the
/// [`guest_warning`] toast and returns `false`. `feature` falls back to
/// [`DEFAULT_FEATURE_LABEL`] when `None`.
pub fn check_guest_access(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    feature: Option<&str>,
) -> bool {
    let snapshot = auth.get_untracked();
    if !is_guest_user(snapshot.user.as_ref()) {
        return true;
    }

    let label = feature.unwrap_or(DEFAULT_FEATURE_LABEL);
    ui.update(|state| {
        state.push_toast(guest_warning(label));
    });
    false
}

/// Whether the current user is a guest, without any warning.
///
/// Pure snapshot read; never touches the toast queue.
pub fn is_guest(auth: RwSignal<AuthState>) -> bool {
    is_guest_user(auth.get_untracked().user.as_ref())
}
