//! Auxiliary dual-needle mini-gauge: fuel on the left arc, coolant on
//! the right, mirrored about the vertical.
//!
//! Both arcs span 70 degrees. The fuel side sweeps clockwise from its
//! lower end (E, empty) to its upper end (F, full); the coolant side
//! runs the same path mirrored, counterclockwise from C (cold) up to H
//! (hot), so the two needles rise in opposite screen directions like a
//! twin cockpit gauge.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::colors::{CYAN, GRAY, WHITE, YELLOW};
use crate::geometry::{DialGeometry, TIER_LABEL, TIER_MAJOR, TIER_MINOR, TIER_RIM, sweep_degree};
use crate::styles::{CENTERED_MIDDLE, LABEL_STYLE_WHITE};

/// Fuel arc start (the E end), screen degrees.
const FUEL_START_DEG: f32 = 145.0;

/// Coolant arc start (the C end). Kept above 360 so the whole sweep
/// stays positive; lookups wrap.
const COOLANT_START_DEG: f32 = 395.0;

/// Angular span of each arc. The coolant side uses it negated.
const GAUGE_SPAN_DEG: f32 = 70.0;

/// Chord length of the arc polylines, in degrees per segment.
const ARC_STEP_DEG: i32 = 5;

/// Needle stroke width in pixels.
const NEEDLE_STROKE: u32 = 2;

/// Pivot cap diameter in pixels.
const PIVOT_DIAMETER: u32 = 4;

/// One side of the gauge: arc, end ticks, end letters, needle.
fn draw_side<D>(
    display: &mut D,
    geo: &DialGeometry,
    start_deg: f32,
    span_deg: f32,
    letters: [&str; 2],
    fraction: f32,
    needle_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (lo, hi) = (
        sweep_degree(start_deg, span_deg, 0.0),
        sweep_degree(start_deg, span_deg, 1.0),
    );
    let (lo, hi) = (lo.min(hi), lo.max(hi));

    let mut deg = lo;
    while deg < hi {
        let next = (deg + ARC_STEP_DEG).min(hi);
        Line::new(geo.point(deg, TIER_RIM), geo.point(next, TIER_RIM))
            .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
            .draw(display)
            .ok();
        deg = next;
    }

    // End and midpoint ticks, letters on the end anchors.
    for t in [0.0, 0.5, 1.0] {
        let deg = sweep_degree(start_deg, span_deg, t);
        Line::new(geo.point(deg, TIER_RIM), geo.point(deg, TIER_MINOR))
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
            .draw(display)
            .ok();
    }
    for (letter, t) in letters.iter().zip([0.0, 1.0]) {
        Text::with_text_style(
            letter,
            geo.point(sweep_degree(start_deg, span_deg, t), TIER_LABEL),
            LABEL_STYLE_WHITE,
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();
    }

    let deg = sweep_degree(start_deg, span_deg, fraction.clamp(0.0, 1.0));
    Line::new(geo.center(), geo.point(deg, TIER_MAJOR))
        .into_styled(PrimitiveStyle::with_stroke(needle_color, NEEDLE_STROKE))
        .draw(display)
        .ok();
}

/// Draw the whole mini-gauge from the two value fractions in `[0, 1]`.
pub fn draw_aux_gauge<D>(
    display: &mut D,
    geo: &DialGeometry,
    fuel_fraction: f32,
    coolant_fraction: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_side(
        display,
        geo,
        FUEL_START_DEG,
        GAUGE_SPAN_DEG,
        ["E", "F"],
        fuel_fraction,
        YELLOW,
    );
    draw_side(
        display,
        geo,
        COOLANT_START_DEG,
        -GAUGE_SPAN_DEG,
        ["C", "H"],
        coolant_fraction,
        CYAN,
    );

    Circle::with_center(geo.center(), PIVOT_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AUX_CENTER, AUX_RADIUS, AUX_TIER_OFFSETS};

    #[test]
    fn test_arcs_mirror_about_the_vertical() {
        // Corresponding fractions of the two sweeps land at x positions
        // mirrored about the gauge center, same y.
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            // 145 + 70 t  mirrors to  395 - 70 t  across the 270 axis.
            let fuel = FUEL_START_DEG + GAUGE_SPAN_DEG * t;
            let cool = COOLANT_START_DEG - GAUGE_SPAN_DEG * t;
            assert_eq!((fuel + cool).rem_euclid(360.0), 180.0, "t {t}");

            // The table degrees round each side independently, so the
            // mirror may be off by one degree, never more.
            let fuel = sweep_degree(FUEL_START_DEG, GAUGE_SPAN_DEG, t);
            let cool = sweep_degree(COOLANT_START_DEG, -GAUGE_SPAN_DEG, t);
            let folded = (fuel + cool).rem_euclid(360);
            assert!((folded - 180).abs() <= 1, "t {t}: folded {folded}");
        }
    }

    #[test]
    fn test_fuel_rises_up_the_left_side() {
        let geo = DialGeometry::new(AUX_CENTER, AUX_RADIUS, AUX_TIER_OFFSETS);
        let empty = geo.point(sweep_degree(FUEL_START_DEG, GAUGE_SPAN_DEG, 0.0), TIER_RIM);
        let full = geo.point(sweep_degree(FUEL_START_DEG, GAUGE_SPAN_DEG, 1.0), TIER_RIM);
        assert!(empty.x < AUX_CENTER.x && full.x < AUX_CENTER.x);
        assert!(full.y < empty.y, "F must sit above E");
    }
}
