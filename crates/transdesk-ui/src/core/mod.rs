//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod notify;
pub mod outcome;
pub mod routing;
pub mod session;
pub mod store;
