//! In-app debug log for session diagnostics.
//!
//! A small ring buffer of recent events (status transitions, rejected input,
//! drag activity) rendered by the debug overlay. Developer-facing only; the
//! presentation contract never depends on it.

use heapless::{Deque, String};

/// Maximum number of log lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line; longer messages are truncated.
pub const LOG_LINE_LENGTH: usize = 48;

/// Ring buffer of recent debug messages, oldest first.
pub struct DebugLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub fn new() -> Self { Self { lines: Deque::new() } }

    /// Append a message, evicting the oldest line when the buffer is full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for ch in msg.chars().take(LOG_LINE_LENGTH) {
            let _ = line.push(ch);
        }
        let _ = self.lines.push_back(line);
    }

    /// Iterate lines oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|l| l.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let log = DebugLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_push_and_iter_order() {
        let mut log = DebugLog::new();
        log.push("first");
        log.push("second");
        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, ["first", "second"]);
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut log = DebugLog::new();
        for i in 0..LOG_BUFFER_SIZE + 2 {
            let msg = format!("line {i}");
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        let first = log.iter().next().unwrap();
        assert_eq!(first, "line 2", "oldest lines are evicted first");
    }

    #[test]
    fn test_long_message_truncated() {
        let mut log = DebugLog::new();
        let long = "x".repeat(LOG_LINE_LENGTH + 10);
        log.push(&long);
        assert_eq!(log.iter().next().unwrap().len(), LOG_LINE_LENGTH);
    }
}
