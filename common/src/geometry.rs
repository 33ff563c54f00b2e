//! Precomputed polar-to-cartesian tables for the dial faces.
//!
//! Trigonometry runs exactly once, at startup: for every integer degree of
//! a dial face the table stores one pixel coordinate per radius tier (rim,
//! minor tick end, major tick end, label anchor). The renderer afterwards
//! only does table lookups, never `sin`/`cos`, which keeps the per-frame
//! cost flat no matter how many ticks and labels a face carries.
//!
//! Degrees are screen degrees: 0 points east of the dial center and angles
//! grow clockwise on screen (the y axis points down). Lookups wrap modulo
//! 360, so callers may pass angles outside `[0, 360)` freely.

use embedded_graphics::geometry::Point;

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{
    AUX_CENTER,
    AUX_RADIUS,
    AUX_TIER_OFFSETS,
    DIAL_RADIUS,
    DIAL_SWEEP_DEG,
    DIAL_SWEEP_START_DEG,
    DIAL_TIER_OFFSETS,
    SPEED_CENTER,
    TACH_CENTER,
};

// =============================================================================
// Table Dimensions
// =============================================================================

/// One table row per integer degree.
pub const DEGREE_STEPS: usize = 360;

/// Radius tiers stored per degree.
pub const TIER_COUNT: usize = 4;

/// Tier index of the dial rim (full radius).
pub const TIER_RIM: usize = 0;

/// Tier index of the inner end of a minor tick.
pub const TIER_MINOR: usize = 1;

/// Tier index of the inner end of a major tick; also the needle tip,
/// which is the rim endpoint trimmed inward by a fixed pixel amount.
pub const TIER_MAJOR: usize = 2;

/// Tier index of the scale label anchor.
pub const TIER_LABEL: usize = 3;

// =============================================================================
// Per-Dial Table
// =============================================================================

/// Lookup table for one dial face. Immutable after construction.
pub struct DialGeometry {
    points: [[Point; TIER_COUNT]; DEGREE_STEPS],
    center: Point,
    radius: i32,
}

impl DialGeometry {
    /// Build the table for a face at `center` with the given rim radius.
    ///
    /// `tier_offsets` are inward offsets from the rim, one per tier.
    pub fn new(
        center: Point,
        radius: i32,
        tier_offsets: [i32; TIER_COUNT],
    ) -> Self {
        let mut points = [[Point::zero(); TIER_COUNT]; DEGREE_STEPS];

        for (deg, tiers) in points.iter_mut().enumerate() {
            let rad = (deg as f32).to_radians();
            let (cos, sin) = (rad.cos(), rad.sin());

            for (tier, point) in tiers.iter_mut().enumerate() {
                let r = (radius - tier_offsets[tier]) as f32;
                *point = Point::new(
                    center.x + (r * cos).round() as i32,
                    center.y + (r * sin).round() as i32,
                );
            }
        }

        Self { points, center, radius }
    }

    /// Pixel coordinate at `degree` (wrapped into `[0, 360)`) and `tier`.
    #[inline]
    pub fn point(
        &self,
        degree: i32,
        tier: usize,
    ) -> Point {
        self.points[degree.rem_euclid(DEGREE_STEPS as i32) as usize][tier]
    }

    /// Dial center in pixels.
    #[inline]
    pub const fn center(&self) -> Point { self.center }

    /// Rim radius in pixels.
    #[inline]
    pub const fn radius(&self) -> i32 { self.radius }
}

// =============================================================================
// Full Cluster Geometry
// =============================================================================

/// All three face tables. Built once in `main`, then passed by shared
/// reference to the frame composer.
pub struct Geometry {
    pub tach: DialGeometry,
    pub speed: DialGeometry,
    pub aux: DialGeometry,
}

impl Geometry {
    pub fn new() -> Self {
        Self {
            tach: DialGeometry::new(TACH_CENTER, DIAL_RADIUS, DIAL_TIER_OFFSETS),
            speed: DialGeometry::new(SPEED_CENTER, DIAL_RADIUS, DIAL_TIER_OFFSETS),
            aux: DialGeometry::new(AUX_CENTER, AUX_RADIUS, AUX_TIER_OFFSETS),
        }
    }
}

impl Default for Geometry {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Angle Mapping
// =============================================================================

/// Map `t` in `[0, 1]` onto an arc starting at `start_deg` spanning
/// `span_deg` (negative spans run counterclockwise). Rounded to the
/// nearest integer degree; wrapping is left to the table lookup.
pub fn sweep_degree(
    start_deg: f32,
    span_deg: f32,
    t: f32,
) -> i32 {
    (start_deg + span_deg * t).round() as i32
}

/// Degree of a main dial needle for `value` on a `0..=max` scale.
/// Zero sits at 135 screen degrees, full scale 270 degrees clockwise
/// from there.
pub fn value_to_degree(
    value: f32,
    max: f32,
) -> i32 {
    sweep_degree(DIAL_SWEEP_START_DEG, DIAL_SWEEP_DEG, value / max)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn dials() -> [(DialGeometry, Point, i32, [i32; TIER_COUNT]); 3] {
        [
            (
                DialGeometry::new(TACH_CENTER, DIAL_RADIUS, DIAL_TIER_OFFSETS),
                TACH_CENTER,
                DIAL_RADIUS,
                DIAL_TIER_OFFSETS,
            ),
            (
                DialGeometry::new(SPEED_CENTER, DIAL_RADIUS, DIAL_TIER_OFFSETS),
                SPEED_CENTER,
                DIAL_RADIUS,
                DIAL_TIER_OFFSETS,
            ),
            (
                DialGeometry::new(AUX_CENTER, AUX_RADIUS, AUX_TIER_OFFSETS),
                AUX_CENTER,
                AUX_RADIUS,
                AUX_TIER_OFFSETS,
            ),
        ]
    }

    #[test]
    fn test_table_matches_direct_recomputation() {
        // Every stored point must equal center + (radius - offset) * (cos, sin)
        // recomputed directly, for all 360 degrees, all tiers, all faces.
        for (geo, center, radius, offsets) in dials() {
            for deg in 0..DEGREE_STEPS as i32 {
                let rad = (deg as f32).to_radians();
                for (tier, offset) in offsets.iter().enumerate() {
                    let r = (radius - offset) as f32;
                    let expected = Point::new(
                        center.x + (r * rad.cos()).round() as i32,
                        center.y + (r * rad.sin()).round() as i32,
                    );
                    assert_eq!(geo.point(deg, tier), expected, "deg {deg} tier {tier}");
                }
            }
        }
    }

    #[test]
    fn test_recovered_radius_within_rounding() {
        for (geo, center, radius, offsets) in dials() {
            for deg in 0..DEGREE_STEPS as i32 {
                for (tier, offset) in offsets.iter().enumerate() {
                    let p = geo.point(deg, tier);
                    let (dx, dy) = ((p.x - center.x) as f32, (p.y - center.y) as f32);
                    let recovered = (dx * dx + dy * dy).sqrt();
                    let expected = (radius - offset) as f32;
                    assert!(
                        (recovered - expected).abs() < 1.0,
                        "deg {deg} tier {tier}: radius {recovered} vs {expected}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_lookup_wraps_degrees() {
        let geo = DialGeometry::new(TACH_CENTER, DIAL_RADIUS, DIAL_TIER_OFFSETS);
        assert_eq!(geo.point(405, TIER_RIM), geo.point(45, TIER_RIM));
        assert_eq!(geo.point(-10, TIER_RIM), geo.point(350, TIER_RIM));
        assert_eq!(geo.point(720, TIER_LABEL), geo.point(0, TIER_LABEL));
    }

    #[test]
    fn test_all_points_inside_screen() {
        for (geo, _, _, _) in dials() {
            for deg in 0..DEGREE_STEPS as i32 {
                for tier in 0..TIER_COUNT {
                    let p = geo.point(deg, tier);
                    assert!(p.x >= 0 && p.x < SCREEN_WIDTH as i32, "x {} at deg {deg}", p.x);
                    assert!(p.y >= 0 && p.y < SCREEN_HEIGHT as i32, "y {} at deg {deg}", p.y);
                }
            }
        }
    }

    #[test]
    fn test_value_to_degree_endpoints() {
        assert_eq!(value_to_degree(0.0, 75.0), 135);
        assert_eq!(value_to_degree(37.5, 75.0), 270);
        assert_eq!(value_to_degree(75.0, 75.0), 405);
        assert_eq!(value_to_degree(280.0, 280.0), 405);
    }

    #[test]
    fn test_sweep_degree_negative_span() {
        // The coolant side of the mini-gauge runs counterclockwise.
        assert_eq!(sweep_degree(395.0, -70.0, 0.0), 395);
        assert_eq!(sweep_degree(395.0, -70.0, 1.0), 325);
        assert_eq!(sweep_degree(395.0, -70.0, 0.5), 360);
    }
}
