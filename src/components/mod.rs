//! Reusable UI components.

pub mod toast_host;
