//! Route components.

pub mod auth;
pub mod chat;
