//! Bounded log storage for the debug overlay.
//!
//! Pure data; the wasm side only feeds it already-stringified entries, so
//! the eviction and export behavior is unit-tested on the host.

use std::collections::VecDeque;

/// Maximum number of retained entries; the oldest are evicted past this.
pub const LOG_CAPACITY: usize = 50;

/// The four intercepted console severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,
    Warn,
    Error,
    Info,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Log => "LOG",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Log => "log-level log",
            LogLevel::Warn => "log-level warn",
            LogLevel::Error => "log-level error",
            LogLevel::Info => "log-level info",
        }
    }

    pub fn all() -> &'static [LogLevel] {
        &[LogLevel::Log, LogLevel::Warn, LogLevel::Error, LogLevel::Info]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    /// Pretty-printed arguments beyond the first, when any.
    pub payload: Option<String>,
}

impl LogEntry {
    /// `[timestamp] LEVEL: message`, with the payload block on following
    /// lines when present.
    pub fn format_line(&self) -> String {
        match &self.payload {
            Some(payload) => format!(
                "[{}] {}: {}\n{}",
                self.timestamp,
                self.level.label(),
                self.message,
                payload
            ),
            None => format!("[{}] {}: {}", self.timestamp, self.level.label(), self.message),
        }
    }
}

/// Fixed-capacity, append-only ring: newest at the back, oldest evicted
/// first once the cap is exceeded.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    pub fn push(
        &mut self,
        level: LogLevel,
        timestamp: String,
        message: String,
        payload: Option<String>,
    ) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(LogEntry {
            id,
            timestamp,
            level,
            message,
            payload,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest-first copy for rendering.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Newline-delimited formatted text, oldest first.
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::format_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_n(buf: &mut LogBuffer, n: usize) {
        for i in 0..n {
            buf.push(
                LogLevel::Log,
                format!("00:00:{i:02}"),
                format!("message {i}"),
                None,
            );
        }
    }

    #[test]
    fn keeps_only_the_newest_fifty() {
        let mut buf = LogBuffer::new(LOG_CAPACITY);
        push_n(&mut buf, 60);

        assert_eq!(buf.len(), 50);
        let snap = buf.snapshot();
        assert_eq!(snap.first().map(|e| e.message.as_str()), Some("message 10"));
        assert_eq!(snap.last().map(|e| e.message.as_str()), Some("message 59"));
    }

    #[test]
    fn eviction_preserves_order_and_ids() {
        let mut buf = LogBuffer::new(5);
        push_n(&mut buf, 12);

        let snap = buf.snapshot();
        assert_eq!(snap.len(), 5);
        for pair in snap.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
        assert_eq!(snap[0].id, 7);
    }

    #[test]
    fn clear_empties_and_accepts_new_entries() {
        let mut buf = LogBuffer::new(LOG_CAPACITY);
        push_n(&mut buf, 10);

        buf.clear();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());

        buf.push(LogLevel::Info, "12:00:00".to_string(), "after clear".to_string(), None);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn export_formats_levels_and_payload() {
        let mut buf = LogBuffer::new(LOG_CAPACITY);
        buf.push(LogLevel::Warn, "09:15:00".to_string(), "slow handshake".to_string(), None);
        buf.push(
            LogLevel::Error,
            "09:15:01".to_string(),
            "init failed".to_string(),
            Some("[\n  \"detail\"\n]".to_string()),
        );

        let text = buf.export_text();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("[09:15:00] WARN: slow handshake"));
        assert_eq!(lines.next(), Some("[09:15:01] ERROR: init failed"));
        assert_eq!(lines.next(), Some("["));
        assert!(text.ends_with(']'));
    }

    #[test]
    fn level_inventory_is_stable() {
        let all = LogLevel::all();
        assert_eq!(all.len(), 4);

        let mut labels: Vec<&'static str> = all.iter().copied().map(LogLevel::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 4);

        for level in all {
            assert!(!level.css_class().trim().is_empty());
        }
    }
}
