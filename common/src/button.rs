//! Button debounce handling.
//!
//! Time-based edge detection over raw level reads. The platform samples
//! each input once per tick and hands the level here together with the
//! monotonic clock; an edge is reported only if the previous accepted
//! edge is older than the debounce window, so contact bounce inside the
//! window never produces extra transitions.
//!
//! Buttons are wired active-low; the platform converts the pin read to
//! `pressed: bool` before calling in, so this module never sees pin
//! polarity.

/// A level transition accepted by the debouncer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Press,
    Release,
}

/// Debounce state for one physical input channel.
pub struct ButtonChannel {
    pressed: bool,
    last_edge_ms: Option<u64>,
    debounce_window_ms: u64,
}

impl ButtonChannel {
    /// New channel in the idle (released) state.
    pub const fn new(debounce_window_ms: u64) -> Self {
        Self {
            pressed: false,
            last_edge_ms: None,
            debounce_window_ms,
        }
    }

    /// Feed one level sample. Returns the accepted edge, if any.
    ///
    /// A changed level inside the debounce window is suppressed and leaves
    /// all state untouched, so the suppressed bounce does not restart the
    /// window either.
    pub fn poll(
        &mut self,
        pressed: bool,
        now_ms: u64,
    ) -> Option<Edge> {
        if pressed == self.pressed {
            return None;
        }

        if let Some(last) = self.last_edge_ms
            && now_ms.saturating_sub(last) <= self.debounce_window_ms
        {
            return None;
        }

        self.pressed = pressed;
        self.last_edge_ms = Some(now_ms);

        Some(if pressed { Edge::Press } else { Edge::Release })
    }

    /// Debounced level as of the last accepted edge.
    #[inline]
    pub const fn is_pressed(&self) -> bool { self.pressed }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 30;

    #[test]
    fn test_first_edge_accepted_immediately() {
        let mut btn = ButtonChannel::new(WINDOW);
        assert_eq!(btn.poll(true, 5), Some(Edge::Press));
        assert!(btn.is_pressed());
    }

    #[test]
    fn test_bounce_inside_window_suppressed() {
        let mut btn = ButtonChannel::new(WINDOW);
        assert_eq!(btn.poll(true, 0), Some(Edge::Press));

        // Contact bounce 15 ms later: suppressed, state unchanged.
        assert_eq!(btn.poll(false, 15), None);
        assert!(btn.is_pressed());

        // Level settles back pressed: no transition either.
        assert_eq!(btn.poll(true, 25), None);

        // Real release after the window.
        assert_eq!(btn.poll(false, 80), Some(Edge::Release));
        assert!(!btn.is_pressed());
    }

    #[test]
    fn test_edge_exactly_at_window_boundary_suppressed() {
        let mut btn = ButtonChannel::new(WINDOW);
        btn.poll(true, 0);
        assert_eq!(btn.poll(false, WINDOW), None);
        assert_eq!(btn.poll(false, WINDOW + 1), Some(Edge::Release));
    }

    #[test]
    fn test_steady_level_reports_nothing() {
        let mut btn = ButtonChannel::new(WINDOW);
        for t in 0..10 {
            assert_eq!(btn.poll(false, t * 20), None);
        }
        btn.poll(true, 300);
        for t in 16..26 {
            assert_eq!(btn.poll(true, t * 20), None);
        }
    }

    #[test]
    fn test_suppressed_bounce_does_not_extend_window() {
        let mut btn = ButtonChannel::new(WINDOW);
        btn.poll(true, 0);
        // Bounces at 10 and 20 are dropped without touching the window start,
        // so an edge at 31 is already clean.
        assert_eq!(btn.poll(false, 10), None);
        assert_eq!(btn.poll(false, 20), None);
        assert_eq!(btn.poll(false, 31), Some(Edge::Release));
    }
}
