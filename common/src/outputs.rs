//! Turn signals and the per-tick output contract.
//!
//! The cluster core never touches pins. Each tick it recomputes an
//! [`OutputState`]; the platform applies it (binary writes for the
//! indicator lamps and horn, 8-bit PWM duty for backlight and headlight).
//! Lamp blinking is derived straight from the monotonic clock, so the
//! phase stays steady regardless of when a signal was armed.

/// Turn-signal latches. Arming one side cancels the other; both off is
/// the idle state.
pub struct TurnSignals {
    left: bool,
    right: bool,
}

impl TurnSignals {
    pub const fn new() -> Self { Self { left: false, right: false } }

    /// Toggle the left signal. Returns the new left state.
    pub fn toggle_left(&mut self) -> bool {
        self.left = !self.left;
        self.right = false;
        self.left
    }

    /// Toggle the right signal. Returns the new right state.
    pub fn toggle_right(&mut self) -> bool {
        self.right = !self.right;
        self.left = false;
        self.right
    }

    #[inline]
    pub const fn left(&self) -> bool { self.left }

    #[inline]
    pub const fn right(&self) -> bool { self.right }
}

impl Default for TurnSignals {
    fn default() -> Self { Self::new() }
}

/// Everything the platform must drive after a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputState {
    pub left_lamp: bool,
    pub right_lamp: bool,
    pub horn: bool,
    pub backlight_duty: u8,
    pub headlight_duty: u8,
}

/// Lamp phase for a full on+off cycle of `period_ms`: on for the first
/// half, off for the second.
#[inline]
pub fn blink_phase_on(
    now_ms: u64,
    period_ms: u64,
) -> bool {
    (now_ms % period_ms) < period_ms / 2
}

// =============================================================================
// Tests
// =============================================================================
