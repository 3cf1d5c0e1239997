//! Login and signup screens for both roles.
//!
//! # Design
//! - One form implementation serves both roles; the role selects endpoints, storage and routes.
//! - Validation and payload building are DOM-free; the view only wires events.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
