//! Wireless RPM ingest: a single-slot lock-free mailbox.
//!
//! The radio delivery context runs outside the main loop and may
//! interleave anywhere. It performs exactly one action per received
//! frame: publish the sample. Value, arrival time and a validity bit are
//! packed into one `AtomicU64`, so the reader can never observe a torn
//! sample. Strict single-writer/single-reader; no locks, no retries, no
//! timeouts. If no frame ever arrives the mailbox simply stays empty and
//! the local RPM simulation runs forever.
//!
//! Bit layout: `[63] valid | [47:16] arrival ms (u32) | [15:0] rpm (u16)`.

use core::sync::atomic::{AtomicU64, Ordering};

/// Wire size of one RPM frame: a little-endian u16 in rpm.
pub const RPM_FRAME_LEN: usize = 2;

const VALID_BIT: u64 = 1 << 63;

/// The latest received sample and its arrival time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteSample {
    /// Engine speed in rpm as sent on the wire.
    pub rpm: u16,
    /// Monotonic arrival time, truncated to 32 bits of milliseconds.
    pub at_ms: u32,
}

/// Lock-free single-slot sample mailbox.
pub struct RpmMailbox(AtomicU64);

impl RpmMailbox {
    pub const fn new() -> Self { Self(AtomicU64::new(0)) }

    /// Publish a sample. Called only from the delivery context.
    pub fn publish(
        &self,
        rpm: u16,
        now_ms: u64,
    ) {
        let packed = VALID_BIT | (u64::from(now_ms as u32) << 16) | u64::from(rpm);
        self.0.store(packed, Ordering::Release);
    }

    /// Ingest one raw frame from the transport. Undersized frames are
    /// dropped; the return value only exists for observability.
    pub fn ingest_frame(
        &self,
        payload: &[u8],
        now_ms: u64,
    ) -> bool {
        if payload.len() < RPM_FRAME_LEN {
            return false;
        }
        let rpm = u16::from_le_bytes([payload[0], payload[1]]);
        self.publish(rpm, now_ms);
        true
    }

    /// Latest published sample, or `None` if nothing ever arrived.
    pub fn latest(&self) -> Option<RemoteSample> {
        let packed = self.0.load(Ordering::Acquire);
        if packed & VALID_BIT == 0 {
            return None;
        }
        Some(RemoteSample {
            rpm: packed as u16,
            at_ms: (packed >> 16) as u32,
        })
    }
}

impl Default for RpmMailbox {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mailbox_reports_nothing() {
        let mailbox = RpmMailbox::new();
        assert_eq!(mailbox.latest(), None);
    }

    #[test]
    fn test_publish_round_trips_value_and_time() {
        let mailbox = RpmMailbox::new();
        mailbox.publish(6450, 123_456);
        assert_eq!(mailbox.latest(), Some(RemoteSample { rpm: 6450, at_ms: 123_456 }));
    }

    #[test]
    fn test_newer_sample_replaces_older() {
        let mailbox = RpmMailbox::new();
        mailbox.publish(900, 100);
        mailbox.publish(3200, 180);
        assert_eq!(mailbox.latest(), Some(RemoteSample { rpm: 3200, at_ms: 180 }));
    }

    #[test]
    fn test_short_frame_dropped_silently() {
        let mailbox = RpmMailbox::new();
        assert!(!mailbox.ingest_frame(&[0x42], 50));
        assert_eq!(mailbox.latest(), None);
    }

    #[test]
    fn test_frame_is_little_endian() {
        let mailbox = RpmMailbox::new();
        assert!(mailbox.ingest_frame(&[0x4C, 0x1D], 10));
        assert_eq!(mailbox.latest().unwrap().rpm, 0x1D4C);
    }

    #[test]
    fn test_oversized_frame_uses_leading_record() {
        let mailbox = RpmMailbox::new();
        assert!(mailbox.ingest_frame(&[0x10, 0x27, 0xFF, 0xFF], 10));
        assert_eq!(mailbox.latest().unwrap().rpm, 10_000);
    }

    #[test]
    fn test_zero_rpm_sample_still_valid() {
        // A value of 0 must be distinguishable from "never received".
        let mailbox = RpmMailbox::new();
        mailbox.publish(0, 0);
        assert_eq!(mailbox.latest(), Some(RemoteSample { rpm: 0, at_ms: 0 }));
    }
}
