use bevy::prelude::*;
use chrono::Local;

/// Long-form local date and time, e.g. "Monday, October 19, 2026 at 3:04:05 PM".
const TIMESTAMP_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M:%S %p";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub timestamp: String,
}

impl LogEntry {
    /// Terminal line: `"<timestamp>: <message>"`.
    pub fn display(&self) -> String {
        format!("{}: {}", self.timestamp, self.message)
    }
}

/// Session activity, oldest first. Entries are never edited or removed.
#[derive(Resource, Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, message: impl Into<String>) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.push_at(message, timestamp);
    }

    pub fn push_at(&mut self, message: impl Into<String>, timestamp: impl Into<String>) {
        let entry = LogEntry {
            message: message.into(),
            timestamp: timestamp.into(),
        };
        info!("{}", entry.message);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `count` entries, oldest first.
    pub fn tail(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }
}
