//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the guest-access guard and user-aware components. The root `App`
//! owns the signal and fills it once from the session endpoint; everything
//! else only reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}
