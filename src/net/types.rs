//! Session DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend session payloads so serde round-trips stay
//! lossless. Optional-with-default fields keep older payloads deserializing
//! cleanly; in particular a missing `user_type` reads as `"individual"`, never
//! as `"guest"`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the session endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Permission role (e.g. `"admin"`, `"user"`, `"pending"`).
    pub role: String,
    /// Avatar image URL or data URI.
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Account classification (`"individual"`, `"org"`, or `"guest"`).
    #[serde(default = "default_user_type")]
    pub user_type: String,
}

fn default_user_type() -> String {
    "individual".to_owned()
}

/// Credentials for `POST /api/v1/auths/signin`.
#[derive(Clone, Debug, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/v1/auths/signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
