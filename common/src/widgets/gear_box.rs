//! Gear indicator: frame, one node marker per gear, letter row underneath
//! and the spring-animated selection dot.

#[cfg(not(test))]
use micromath::F32Ext;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::cluster::gear_node_point;
use crate::colors::{GRAY, PINK};
use crate::config::{GEAR_LABEL_Y, GEAR_NODE_SPACING, GEAR_NODE_X0, GEAR_ROW_Y};
use crate::gear::{GEAR_COUNT, GEAR_LABELS, GearState};
use crate::styles::{CENTERED, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE};

/// Node marker diameter in pixels.
const NODE_DIAMETER: u32 = 6;

/// Selection dot diameter in pixels.
const DOT_DIAMETER: u32 = 8;

/// Frame margin around the node row in pixels.
const FRAME_MARGIN: i32 = 10;

/// Draw the gear indicator. `dot` is the animated dot center in pixels;
/// it trails the selected gear, so it is drawn wherever the spring put
/// it, not on the node.
pub fn draw_gear_box<D>(
    display: &mut D,
    gear: &GearState,
    dot: (f32, f32),
) where
    D: DrawTarget<Color = Rgb565>,
{
    let top_left = Point::new(GEAR_NODE_X0 - FRAME_MARGIN, GEAR_ROW_Y - FRAME_MARGIN);
    let bottom_right = Point::new(
        GEAR_NODE_X0 + (GEAR_COUNT as i32 - 1) * GEAR_NODE_SPACING + FRAME_MARGIN,
        GEAR_LABEL_Y + 1,
    );
    Rectangle::with_corners(top_left, bottom_right)
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();

    for ordinal in 0..GEAR_COUNT {
        let node = gear_node_point(ordinal);

        Circle::with_center(node, NODE_DIAMETER)
            .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
            .draw(display)
            .ok();

        let style = if ordinal == gear.ordinal() {
            LABEL_STYLE_WHITE
        } else {
            LABEL_STYLE_GRAY
        };
        Text::with_text_style(
            GEAR_LABELS[ordinal],
            Point::new(node.x, GEAR_LABEL_Y),
            style,
            CENTERED,
        )
        .draw(display)
        .ok();
    }

    let center = Point::new(dot.0.round() as i32, dot.1.round() as i32);
    Circle::with_center(center, DOT_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(PINK))
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BANNER_BASELINE_Y, SCREEN_WIDTH};

    #[test]
    fn test_frame_clears_neighbors() {
        // The frame must fit the screen and stay out of the banner strip
        // scrolling right below it.
        let left = GEAR_NODE_X0 - FRAME_MARGIN;
        let right = GEAR_NODE_X0 + (GEAR_COUNT as i32 - 1) * GEAR_NODE_SPACING + FRAME_MARGIN;
        assert!(left > 0 && right < SCREEN_WIDTH as i32);
        assert!(GEAR_LABEL_Y + 1 < BANNER_BASELINE_Y - 17);
    }
}
