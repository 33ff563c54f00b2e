//! Debug event log.
//!
//! Fixed-capacity ring of recent cluster events (gear changes, demo
//! toggles, link-up, provisioning requests). The core only pushes; the
//! platform decides where the lines go (the simulator mirrors them to
//! stdout and draws them in its debug overlay). No timestamps here, the
//! platform prefixes its own if it wants them.

use heapless::{Deque, String};

/// Lines kept before the oldest is dropped.
pub const LOG_LINES: usize = 8;

/// Capacity of one line in bytes.
pub const LOG_LINE_LEN: usize = 40;

/// Ring buffer of recent event lines, oldest first.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LEN>, LOG_LINES>,
    dropped: u32,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            dropped: 0,
        }
    }

    /// Append a line, truncated to capacity. Drops the oldest line when
    /// the ring is full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
            self.dropped += 1;
        }

        let mut line: String<LOG_LINE_LEN> = String::new();
        for c in msg.chars().take(LOG_LINE_LEN) {
            if line.push(c).is_err() {
                break;
            }
        }
        self.buffer.push_back(line).ok();
    }

    /// Lines currently held, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line, if any.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    /// Total lines that have fallen out of the ring.
    #[inline]
    pub const fn dropped(&self) -> u32 { self.dropped }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_push_and_read_back() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("GEAR 1");
        log.push("DEMO ON");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next(), Some("GEAR 1"));
        assert_eq!(log.last(), Some("DEMO ON"));
    }

    #[test]
    fn test_ring_drops_oldest_when_full() {
        let mut log = DebugLog::new();
        for i in 0..=LOG_LINES {
            let mut line: String<16> = String::new();
            write!(line, "EVENT {i}").unwrap();
            log.push(&line);
        }

        assert_eq!(log.len(), LOG_LINES);
        assert_eq!(log.dropped(), 1);
        assert_eq!(log.iter().next(), Some("EVENT 1"));
    }

    #[test]
    fn test_long_line_truncated() {
        let mut log = DebugLog::new();
        let long = "a line far longer than the ring keeps per entry, by a lot";
        log.push(long);
        assert_eq!(log.last().map(str::len), Some(LOG_LINE_LEN));
    }
}
