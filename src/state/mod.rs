//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so individual components can
//! depend on small focused models. Each is provided as an `RwSignal` context
//! from the root `App`.

pub mod auth;
pub mod ui;
