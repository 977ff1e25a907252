//! Shared UI helpers.

pub mod guest;
