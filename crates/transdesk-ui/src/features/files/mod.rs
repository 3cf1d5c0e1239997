//! Role-scoped file list screens.
//!
//! # Design
//! - Each view fetches its list once on mount and owns it afterwards.
//! - In-flight requests are aborted when the view unmounts.

pub mod state;
#[cfg(target_arch = "wasm32")]
mod actions;
#[cfg(target_arch = "wasm32")]
pub mod admin_view;
#[cfg(target_arch = "wasm32")]
pub mod client_view;
