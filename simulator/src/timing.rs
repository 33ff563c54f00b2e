//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 ticks per second). The main loop sleeps if a
/// frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

/// Minimum interval between banner clock refreshes.
pub const CLOCK_REFRESH: Duration = Duration::from_secs(1);

/// Publish cadence of the synthetic wireless RPM feed.
pub const FEED_PERIOD: Duration = Duration::from_millis(80);
