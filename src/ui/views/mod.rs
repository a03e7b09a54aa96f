//! Per-command composition of headers, event lines, and summaries

pub mod build;
pub mod watch;
