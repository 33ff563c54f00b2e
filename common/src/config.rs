//! Cluster configuration: runtime thresholds and fixed screen layout.
//!
//! Every timing threshold the input and animation state machines depend on
//! lives in [`ClusterConfig`] with documented units, so none of them appear
//! as bare numbers inside the state machines. Layout geometry (dial centers,
//! radii, gear ladder positions) is `const`: it describes one physical
//! 320x240 panel and is baked into the geometry tables at startup.

use embedded_graphics::geometry::Point;

// =============================================================================
// Screen Layout
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Main loop cadence in milliseconds (~50 ticks per second).
pub const TICK_MS: u64 = 20;

// =============================================================================
// Dial Layout
// =============================================================================

/// Tachometer face center.
pub const TACH_CENTER: Point = Point::new(78, 112);

/// Speedometer face center.
pub const SPEED_CENTER: Point = Point::new(242, 112);

/// Radius of both main dial faces in pixels.
pub const DIAL_RADIUS: i32 = 70;

/// Radius tiers for the main dials, as offsets inward from the rim:
/// rim, minor tick end, major tick end (also the needle trim), label anchor.
pub const DIAL_TIER_OFFSETS: [i32; 4] = [0, 8, 14, 26];

/// Auxiliary mini-gauge center (fuel / coolant).
pub const AUX_CENTER: Point = Point::new(160, 46);

/// Auxiliary mini-gauge radius in pixels.
pub const AUX_RADIUS: i32 = 26;

/// Radius tiers for the mini-gauge, same roles as [`DIAL_TIER_OFFSETS`].
pub const AUX_TIER_OFFSETS: [i32; 4] = [0, 5, 8, 14];

/// Angle where a dial's zero value sits, in screen degrees
/// (0 = east of center, increasing clockwise on screen).
pub const DIAL_SWEEP_START_DEG: f32 = 135.0;

/// Angular span from zero to full scale, swept clockwise.
pub const DIAL_SWEEP_DEG: f32 = 270.0;

// =============================================================================
// Dial Scales
// =============================================================================

/// Tachometer full scale, in dial units of 100 rpm (75 = 7500 rpm).
pub const RPM_ANGLE_MAX: f32 = 75.0;

/// Tachometer redline in dial units (60 = 6000 rpm).
pub const RPM_REDLINE: f32 = 60.0;

/// Speedometer full scale in km/h.
pub const SPEED_MAX: f32 = 280.0;

/// Dial units between labeled major ticks.
pub const MAJOR_TICK_STEP: u32 = 20;

/// Dial units between minor ticks.
pub const MINOR_TICK_STEP: u32 = 10;

/// Top speed reachable in each gear (R, N, 1..5), km/h.
/// Neutral is 0: revving in neutral moves the tach, never the speedo.
pub const GEAR_MAX_SPEED: [f32; 7] = [40.0, 0.0, 60.0, 110.0, 160.0, 210.0, 280.0];

// =============================================================================
// Gear Ladder Layout
// =============================================================================

/// Screen y of the gear node row.
pub const GEAR_ROW_Y: i32 = 196;

/// Screen x of the leftmost gear node (reverse).
pub const GEAR_NODE_X0: i32 = 100;

/// Pixel spacing between adjacent gear nodes.
pub const GEAR_NODE_SPACING: i32 = 20;

/// Baseline y of the gear letter row under the nodes.
pub const GEAR_LABEL_Y: i32 = 212;

// =============================================================================
// Banner / Indicator Layout
// =============================================================================

/// Baseline y of the scrolling banner strip.
pub const BANNER_BASELINE_Y: i32 = 232;

/// Anchor of the demo-mode indicator text (top center).
pub const MODE_TEXT_POS: Point = Point::new(160, 20);

/// Tips of the left and right turn-indicator arrows.
pub const TURN_ARROW_LEFT_TIP: Point = Point::new(18, 16);
pub const TURN_ARROW_RIGHT_TIP: Point = Point::new(302, 16);

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Tunable thresholds for input handling and animation.
///
/// Defaults match the shipped cluster behavior. All durations are in
/// milliseconds of the monotonic tick clock.
#[derive(Clone, Debug)]
pub struct ClusterConfig {
    /// Minimum time between accepted edges on one button.
    pub debounce_window_ms: u64,
    /// Maximum gap between the two release edges of a double click.
    pub double_click_max_gap_ms: u64,
    /// Minimum time demo mode stays active before a toggle-off is honored.
    pub demo_min_hold_ms: u64,
    /// Minimum time between random perturbations while demo mode is active.
    pub jitter_period_ms: u64,
    /// Hold time on the gear-down button that requests provisioning.
    pub long_press_threshold_ms: u64,
    /// Full on+off cycle of the turn-indicator lamps.
    pub blinker_period_ms: u64,
    /// One-shot speed reduction applied on every gear change, km/h.
    pub shift_speed_drop: f32,
    /// Pixels the banner strip moves left per frame.
    pub banner_scroll_step_px: i32,
    /// Backlight PWM duty (0-255).
    pub backlight_duty: u8,
    /// Headlight PWM duty (0-255).
    pub headlight_duty: u8,
    /// Vehicle name shown in the banner strip.
    pub vehicle_name: &'static str,
}

impl ClusterConfig {
    pub const fn new() -> Self {
        Self {
            debounce_window_ms: 30,
            double_click_max_gap_ms: 350,
            demo_min_hold_ms: 5500,
            jitter_period_ms: 120,
            long_press_threshold_ms: 2000,
            blinker_period_ms: 700,
            shift_speed_drop: 5.0,
            banner_scroll_step_px: 2,
            backlight_duty: 216,
            headlight_duty: 140,
            vehicle_name: "LEON CUPRA 280",
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let cfg = ClusterConfig::new();
        assert_eq!(cfg.debounce_window_ms, 30);
        assert_eq!(cfg.double_click_max_gap_ms, 350);
        assert_eq!(cfg.demo_min_hold_ms, 5500);
        assert_eq!(cfg.jitter_period_ms, 120);
        assert_eq!(cfg.long_press_threshold_ms, 2000);
    }

    #[test]
    fn test_gear_speed_table() {
        // One cap per gear ordinal, neutral dead, none above full scale.
        assert_eq!(GEAR_MAX_SPEED.len(), 7);
        assert!(GEAR_MAX_SPEED[1] == 0.0);
        for cap in GEAR_MAX_SPEED {
            assert!(cap <= SPEED_MAX);
        }
    }

    #[test]
    fn test_gear_ladder_fits_between_dials() {
        // The node row sits below both dial faces and inside the screen.
        let last_node_x = GEAR_NODE_X0 + 6 * GEAR_NODE_SPACING;
        assert!(last_node_x < SCREEN_WIDTH as i32);
        assert!(GEAR_ROW_Y > TACH_CENTER.y + DIAL_RADIUS);
        assert!(GEAR_LABEL_Y < BANNER_BASELINE_Y);
    }
}
