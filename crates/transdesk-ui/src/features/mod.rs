//! Feature slices: auth forms and file lists.
pub mod auth;
pub mod files;
