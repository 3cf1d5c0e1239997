//! Browser-facing services: REST client, downloads, picker bridge, abortable tasks.

pub(crate) mod api;
pub(crate) mod download;
pub(crate) mod picker;
pub(crate) mod task;
