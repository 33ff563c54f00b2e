//! Gesture detection on top of debounced button edges.
//!
//! Three small state machines:
//!
//! - [`ClickSequenceDetector`]: double click over release edges. A click
//!   only exists once the button has come back up, so two counted clicks
//!   necessarily bracket a full release; no separate continuous-release
//!   tracking is needed.
//! - [`LongPressDetector`]: fires once per hold after a threshold.
//! - [`DemoMode`]: the toggle driven by the double click, with a minimum
//!   hold before it can be switched off again (hysteresis against rapid
//!   flicker).

/// Double-click detection over release edges.
///
/// Counts qualifying releases; at two, fires and resets. A lone click is
/// discarded once it ages past the maximum gap, checked on every poll so
/// a stale click cannot pair with a much later one.
pub struct ClickSequenceDetector {
    clicks: u8,
    last_release_ms: u64,
    max_gap_ms: u64,
}

impl ClickSequenceDetector {
    pub const fn new(max_gap_ms: u64) -> Self {
        Self {
            clicks: 0,
            last_release_ms: 0,
            max_gap_ms,
        }
    }

    /// Feed one poll. `released` is true when the bound button produced a
    /// release edge this tick. Returns true when a double click completes.
    pub fn poll(
        &mut self,
        released: bool,
        now_ms: u64,
    ) -> bool {
        // Discard a stale lone click even when no edge arrives.
        if self.clicks > 0 && now_ms.saturating_sub(self.last_release_ms) > self.max_gap_ms {
            self.clicks = 0;
        }

        if !released {
            return false;
        }

        if self.clicks > 0 && now_ms.saturating_sub(self.last_release_ms) <= self.max_gap_ms {
            self.clicks += 1;
        } else {
            self.clicks = 1;
        }
        self.last_release_ms = now_ms;

        if self.clicks >= 2 {
            self.clicks = 0;
            return true;
        }
        false
    }
}

/// Long-press detection. Arms on the press edge, fires once while the
/// button stays held past the threshold, rearms only after a release.
pub struct LongPressDetector {
    started_ms: Option<u64>,
    fired: bool,
    threshold_ms: u64,
}

impl LongPressDetector {
    pub const fn new(threshold_ms: u64) -> Self {
        Self {
            started_ms: None,
            fired: false,
            threshold_ms,
        }
    }

    /// Feed one poll. `press_edge` is true on the tick the button went
    /// down; `held` is the debounced level. Returns true on the single
    /// tick the hold crosses the threshold.
    pub fn poll(
        &mut self,
        press_edge: bool,
        held: bool,
        now_ms: u64,
    ) -> bool {
        if press_edge {
            self.started_ms = Some(now_ms);
            self.fired = false;
        }

        if !held {
            self.started_ms = None;
            return false;
        }

        if let Some(start) = self.started_ms
            && !self.fired
            && now_ms.saturating_sub(start) > self.threshold_ms
        {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Demo ("random") mode toggle with asymmetric transitions: switching on
/// is always honored, switching off only after the mode has been active
/// for the minimum hold.
pub struct DemoMode {
    active: bool,
    activated_ms: u64,
    min_hold_ms: u64,
}

impl DemoMode {
    pub const fn new(min_hold_ms: u64) -> Self {
        Self {
            active: false,
            activated_ms: 0,
            min_hold_ms,
        }
    }

    /// Handle a completed double click. Returns the new state when the
    /// toggle was honored, `None` when a too-early toggle-off was refused.
    pub fn on_double_click(
        &mut self,
        now_ms: u64,
    ) -> Option<bool> {
        if !self.active {
            self.active = true;
            self.activated_ms = now_ms;
            return Some(true);
        }

        if now_ms.saturating_sub(self.activated_ms) >= self.min_hold_ms {
            self.active = false;
            return Some(false);
        }
        None
    }

    #[inline]
    pub const fn is_active(&self) -> bool { self.active }
}

// =============================================================================
// Tests
// =============================================================================
