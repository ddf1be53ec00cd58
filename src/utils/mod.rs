//! Browser-facing utilities: API client, configuration, dialogs, trace log

pub mod api;
pub mod config;
pub mod dialogs;
pub mod log_trace;
