//! REST helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::SessionUser;
#[cfg(feature = "hydrate")]
use super::types::{SigninRequest, SignupRequest};

/// Fetch the current session user from `GET /api/v1/auths/`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/v1/auths/")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/v1/auths/signin`.
///
/// # Errors
///
/// Returns an error string when the request cannot be built or sent, or the
/// server rejects the credentials.
pub async fn signin(email: &str, password: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SigninRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        post_auth("/api/v1/auths/signin", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/v1/auths/signup`.
///
/// # Errors
///
/// Returns an error string when the request fails or the server refuses the
/// registration (duplicate email, signups disabled, ...).
pub async fn signup(name: &str, email: &str, password: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignupRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        post_auth("/api/v1/auths/signup", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// End the current session via `GET /api/v1/auths/signout`.
pub async fn signout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::get("/api/v1/auths/signout")
            .send()
            .await;
    }
}

#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(url: &str, body: &B) -> Result<SessionUser, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("request failed: {}", resp.status()));
    }
    resp.json::<SessionUser>().await.map_err(|e| e.to_string())
}
