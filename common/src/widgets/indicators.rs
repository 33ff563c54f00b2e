//! Mode indicator text and the turn-signal arrows.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use embedded_graphics::text::Text;

use crate::colors::GREEN;
use crate::config::{MODE_TEXT_POS, TURN_ARROW_LEFT_TIP, TURN_ARROW_RIGHT_TIP};
use crate::styles::{CENTERED, MODE_STYLE_ACTIVE, MODE_STYLE_IDLE};

/// Arrow length from tip to base in pixels.
const ARROW_LENGTH: i32 = 14;

/// Half the arrow base height in pixels.
const ARROW_HALF_BASE: i32 = 8;

/// Demo-mode indicator at the top center; color keyed to the mode.
pub fn draw_mode_text<D>(
    display: &mut D,
    demo_active: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = if demo_active { MODE_STYLE_ACTIVE } else { MODE_STYLE_IDLE };
    Text::with_text_style("DEMO", MODE_TEXT_POS, style, CENTERED)
        .draw(display)
        .ok();
}

/// Turn-signal arrows in the top corners. Lamps are already
/// blink-phased by the tick, so this just draws what is lit.
pub fn draw_turn_arrows<D>(
    display: &mut D,
    left_lamp: bool,
    right_lamp: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if left_lamp {
        let tip = TURN_ARROW_LEFT_TIP;
        Triangle::new(
            tip,
            Point::new(tip.x + ARROW_LENGTH, tip.y - ARROW_HALF_BASE),
            Point::new(tip.x + ARROW_LENGTH, tip.y + ARROW_HALF_BASE),
        )
        .into_styled(PrimitiveStyle::with_fill(GREEN))
        .draw(display)
        .ok();
    }
    if right_lamp {
        let tip = TURN_ARROW_RIGHT_TIP;
        Triangle::new(
            tip,
            Point::new(tip.x - ARROW_LENGTH, tip.y - ARROW_HALF_BASE),
            Point::new(tip.x - ARROW_LENGTH, tip.y + ARROW_HALF_BASE),
        )
        .into_styled(PrimitiveStyle::with_fill(GREEN))
        .draw(display)
        .ok();
    }
}
