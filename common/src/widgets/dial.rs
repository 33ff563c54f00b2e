//! Main dial faces: ring, tick marks, scale labels, needle and pivot.
//!
//! Everything here reads pixel coordinates out of a [`DialGeometry`] table
//! by integer degree; no trigonometry runs per frame. The ring is drawn as
//! short chords between successive table points, which at a few degrees per
//! step is indistinguishable from a true arc at these radii.

use core::fmt::Write;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{GRAY, RED, WHITE};
use crate::config::{MAJOR_TICK_STEP, MINOR_TICK_STEP};
use crate::geometry::{DialGeometry, TIER_LABEL, TIER_MAJOR, TIER_MINOR, TIER_RIM, value_to_degree};
use crate::styles::CENTERED_MIDDLE;

/// Chord length of the ring polyline, in degrees per segment.
const RING_STEP_DEG: i32 = 3;

/// Needle stroke width in pixels.
const NEEDLE_STROKE: u32 = 3;

/// Pivot cap diameter in pixels.
const PIVOT_DIAMETER: u32 = 10;

/// Scale color at `value`: red at and above the redline, white below.
fn scale_color(
    value: f32,
    redline_from: Option<f32>,
) -> Rgb565 {
    match redline_from {
        Some(redline) if value >= redline => RED,
        _ => WHITE,
    }
}

/// Draw a dial face: ring, minor ticks every 10 units, labeled major
/// ticks every 20 units.
///
/// `redline_from` switches the ring and everything on the scale to red
/// from that value upward (the tachometer's redline; `None` for the
/// speedometer). `label_font` varies per face: the speedometer carries
/// fifteen labels on the same sweep the tachometer covers with four, so
/// it gets the tiny font.
pub fn draw_dial_face<D>(
    display: &mut D,
    geo: &DialGeometry,
    max_value: f32,
    redline_from: Option<f32>,
    label_font: &'static MonoFont<'static>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let zero_deg = value_to_degree(0.0, max_value);
    let full_deg = value_to_degree(max_value, max_value);
    let redline_deg = redline_from.map(|v| value_to_degree(v, max_value));

    // Ring, as chords between successive table points.
    let mut deg = zero_deg;
    while deg < full_deg {
        let next = (deg + RING_STEP_DEG).min(full_deg);
        let color = match redline_deg {
            Some(redline) if deg >= redline => RED,
            _ => GRAY,
        };
        Line::new(geo.point(deg, TIER_RIM), geo.point(next, TIER_RIM))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(display)
            .ok();
        deg = next;
    }

    // Minor ticks between the majors.
    let mut value = MINOR_TICK_STEP;
    while (value as f32) < max_value {
        if value % MAJOR_TICK_STEP != 0 {
            let deg = value_to_degree(value as f32, max_value);
            Line::new(geo.point(deg, TIER_RIM), geo.point(deg, TIER_MINOR))
                .into_styled(PrimitiveStyle::with_stroke(scale_color(value as f32, redline_from), 1))
                .draw(display)
                .ok();
        }
        value += MINOR_TICK_STEP;
    }

    // Labeled major ticks.
    let mut value = 0;
    while (value as f32) <= max_value {
        let deg = value_to_degree(value as f32, max_value);
        let color = scale_color(value as f32, redline_from);

        Line::new(geo.point(deg, TIER_RIM), geo.point(deg, TIER_MAJOR))
            .into_styled(PrimitiveStyle::with_stroke(color, 2))
            .draw(display)
            .ok();

        let mut label: String<8> = String::new();
        write!(label, "{value}").ok();
        Text::with_text_style(
            &label,
            geo.point(deg, TIER_LABEL),
            MonoTextStyle::new(label_font, color),
            CENTERED_MIDDLE,
        )
        .draw(display)
        .ok();

        value += MAJOR_TICK_STEP;
    }
}

/// Draw a needle for `value` on a `0..=max_value` scale.
///
/// The tip is the trimmed-rim table point, so the needle always ends a
/// fixed pixel amount short of the ring.
pub fn draw_needle<D>(
    display: &mut D,
    geo: &DialGeometry,
    value: f32,
    max_value: f32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let deg = value_to_degree(value.clamp(0.0, max_value), max_value);
    Line::new(geo.center(), geo.point(deg, TIER_MAJOR))
        .into_styled(PrimitiveStyle::with_stroke(color, NEEDLE_STROKE))
        .draw(display)
        .ok();
}

/// Draw the pivot cap over the needle base.
pub fn draw_pivot<D>(
    display: &mut D,
    geo: &DialGeometry,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(geo.center(), PIVOT_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DIAL_RADIUS, DIAL_TIER_OFFSETS, RPM_ANGLE_MAX, RPM_REDLINE, TACH_CENTER};

    #[test]
    fn test_scale_color_redline_boundary() {
        assert_eq!(scale_color(59.9, Some(RPM_REDLINE)), WHITE);
        assert_eq!(scale_color(60.0, Some(RPM_REDLINE)), RED);
        assert_eq!(scale_color(75.0, Some(RPM_REDLINE)), RED);
        assert_eq!(scale_color(275.0, None), WHITE);
    }

    #[test]
    fn test_needle_tip_stays_inside_ring() {
        // The trimmed tier keeps every possible needle tip strictly
        // inside the rim radius.
        let geo = DialGeometry::new(TACH_CENTER, DIAL_RADIUS, DIAL_TIER_OFFSETS);
        for v in 0..=75 {
            let deg = value_to_degree(v as f32, RPM_ANGLE_MAX);
            let tip = geo.point(deg, TIER_MAJOR);
            let (dx, dy) = (
                (tip.x - TACH_CENTER.x) as f32,
                (tip.y - TACH_CENTER.y) as f32,
            );
            assert!((dx * dx + dy * dy).sqrt() < DIAL_RADIUS as f32);
        }
    }
}
