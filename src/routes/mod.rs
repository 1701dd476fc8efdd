//! HTTP route handlers.

pub mod api;
