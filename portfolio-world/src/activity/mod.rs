//! Append-only activity log mirrored to the on-screen terminal.

/// Timestamped log entries and the resource that collects them.
pub mod log;

pub use log::{ActivityLog, LogEntry};
