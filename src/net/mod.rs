//! Network layer: session DTOs and REST helpers.

pub mod api;
pub mod types;
