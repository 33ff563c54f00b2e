//! Gear selection state machine.
//!
//! Seven positions, ordinal 0..=6 mapping to R, N, 1, 2, 3, 4, 5. Two
//! physical controls mutate it: the sequential-cycle button walks up and
//! down the forward gears by a remembered direction, the gear-down button
//! steps straight toward reverse. Both run through the same transition
//! table and both maintain the direction flag, so the two controls can
//! never leave it out of sync with the last movement.
//!
//! | Ordinal | 0 | 1 | 2 | 3 | 4 | 5 | 6 |
//! |---------|---|---|---|---|---|---|---|
//! | Gear    | R | N | 1 | 2 | 3 | 4 | 5 |

/// Display letters by gear ordinal.
pub const GEAR_LABELS: [&str; 7] = ["R", "N", "1", "2", "3", "4", "5"];

/// Number of gear positions.
pub const GEAR_COUNT: usize = 7;

/// Direction the sequential cycle moves through the forward gears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GearDirection {
    Ascending,
    Descending,
}

/// Current gear selection. Starts in neutral.
pub struct GearState {
    ordinal: u8,
    direction: GearDirection,
}

impl GearState {
    pub const fn new() -> Self {
        Self {
            ordinal: 1,
            direction: GearDirection::Ascending,
        }
    }

    /// Gear ordinal, always in `0..=6`.
    #[inline]
    pub const fn ordinal(&self) -> usize { self.ordinal as usize }

    /// Display letter of the selected gear.
    #[inline]
    pub const fn label(&self) -> &'static str { GEAR_LABELS[self.ordinal as usize] }

    #[inline]
    pub const fn direction(&self) -> GearDirection { self.direction }

    /// Single-button sequential cycle: R to N, N into first, then up and
    /// down the forward gears, bouncing at fifth. Returns true when the
    /// selection changed.
    pub fn cycle_sequential(&mut self) -> bool {
        let before = self.ordinal;

        match self.ordinal {
            0 => self.ordinal = 1,
            1 => {
                self.ordinal = 2;
                self.direction = GearDirection::Ascending;
            }
            6 => {
                self.ordinal = 5;
                self.direction = GearDirection::Descending;
            }
            2..=5 => {
                self.ordinal = match self.direction {
                    GearDirection::Ascending => self.ordinal + 1,
                    GearDirection::Descending => self.ordinal - 1,
                };
            }
            // Anything out of range falls back to neutral.
            _ => {
                self.ordinal = 1;
                self.direction = GearDirection::Ascending;
            }
        }

        self.settle_on_neutral();
        self.ordinal != before
    }

    /// Step one position toward reverse. Returns true when the selection
    /// changed (false when already in R).
    pub fn retreat(&mut self) -> bool {
        if self.ordinal == 0 {
            return false;
        }
        self.ordinal -= 1;
        self.direction = GearDirection::Descending;
        self.settle_on_neutral();
        true
    }

    /// Landing on neutral always points the next cycle at first gear.
    fn settle_on_neutral(&mut self) {
        if self.ordinal == 1 {
            self.direction = GearDirection::Ascending;
        }
    }
}

impl Default for GearState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_walks_up_then_bounces_down() {
        let mut gear = GearState::new();

        // N -> 1 -> 2 -> 3 -> 4 -> 5
        for expected in 2..=6 {
            assert!(gear.cycle_sequential());
            assert_eq!(gear.ordinal(), expected);
        }
        assert_eq!(gear.direction(), GearDirection::Ascending);

        // From fifth the cycle turns around.
        assert!(gear.cycle_sequential());
        assert_eq!(gear.ordinal(), 5);
        assert_eq!(gear.direction(), GearDirection::Descending);

        // 4 -> 3 -> 2 -> 1
        for expected in [4, 3, 2] {
            gear.cycle_sequential();
            assert_eq!(gear.ordinal(), expected);
        }

        // Landing back on neutral rearms ascending.
        gear.cycle_sequential();
        assert_eq!(gear.ordinal(), 1);
        assert_eq!(gear.direction(), GearDirection::Ascending);
    }

    #[test]
    fn test_cycle_from_neutral_ascends_regardless_of_direction() {
        let mut gear = GearState {
            ordinal: 1,
            direction: GearDirection::Descending,
        };
        gear.cycle_sequential();
        assert_eq!(gear.ordinal(), 2);
        assert_eq!(gear.direction(), GearDirection::Ascending);
    }

    #[test]
    fn test_cycle_from_reverse_goes_to_neutral() {
        let mut gear = GearState {
            ordinal: 0,
            direction: GearDirection::Descending,
        };
        gear.cycle_sequential();
        assert_eq!(gear.ordinal(), 1);
        assert_eq!(gear.direction(), GearDirection::Ascending);
    }

    #[test]
    fn test_out_of_range_falls_back_to_neutral() {
        let mut gear = GearState {
            ordinal: 9,
            direction: GearDirection::Descending,
        };
        gear.cycle_sequential();
        assert_eq!(gear.ordinal(), 1);
        assert_eq!(gear.direction(), GearDirection::Ascending);
    }

    #[test]
    fn test_retreat_steps_toward_reverse_and_stops() {
        let mut gear = GearState::new();
        for _ in 0..3 {
            gear.cycle_sequential();
        }
        assert_eq!(gear.ordinal(), 4);

        // 3 -> 2 -> 1 with the direction following the movement.
        assert!(gear.retreat());
        assert_eq!(gear.ordinal(), 3);
        assert_eq!(gear.direction(), GearDirection::Descending);

        assert!(gear.retreat());
        assert!(gear.retreat());
        assert_eq!(gear.ordinal(), 1);
        assert_eq!(gear.direction(), GearDirection::Ascending);

        assert!(gear.retreat());
        assert_eq!(gear.ordinal(), 0);

        // Already in reverse: nothing to do.
        assert!(!gear.retreat());
        assert_eq!(gear.ordinal(), 0);
    }

    #[test]
    fn test_retreat_then_cycle_stays_coherent() {
        let mut gear = GearState::new();
        for _ in 0..4 {
            gear.cycle_sequential();
        }
        assert_eq!(gear.ordinal(), 5);

        gear.retreat();
        assert_eq!(gear.ordinal(), 4);

        // The cycle continues in the direction the retreat established.
        gear.cycle_sequential();
        assert_eq!(gear.ordinal(), 3);
        assert_eq!(gear.direction(), GearDirection::Descending);
    }

    #[test]
    fn test_labels_line_up_with_ordinals() {
        let mut gear = GearState::new();
        assert_eq!(gear.label(), "N");
        gear.retreat();
        assert_eq!(gear.label(), "R");
        gear.cycle_sequential();
        gear.cycle_sequential();
        assert_eq!(gear.label(), "1");
    }
}
