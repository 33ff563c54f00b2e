//! Event log overlay, toggled with the V key.
//!
//! Draws the debug log ring over the live face so gesture and link events
//! can be watched without leaving the window. Lines also go to stdout;
//! this is the last-eight view.

use cluster_common::colors::{BLACK, GRAY};
use cluster_common::profiling::{DebugLog, LOG_LINES};
use cluster_common::styles::{LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LEFT_ALIGNED};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

const PANEL_POS: Point = Point::new(8, 28);
const PANEL_SIZE: Size = Size::new(170, 132);
const TEXT_X: i32 = 14;
const TITLE_Y: i32 = 40;
const FIRST_LINE_Y: i32 = 52;
const LINE_HEIGHT: i32 = 12;

pub fn draw_log_overlay<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(PANEL_POS, PANEL_SIZE)
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();
    Rectangle::new(PANEL_POS, PANEL_SIZE)
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();

    Text::with_text_style("EVENTS", Point::new(TEXT_X, TITLE_Y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    for (i, line) in log.iter().enumerate() {
        Text::with_text_style(
            line,
            Point::new(TEXT_X, FIRST_LINE_Y + i as i32 * LINE_HEIGHT),
            LABEL_STYLE_WHITE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    if log.dropped() > 0 {
        let note = format!("({} older dropped)", log.dropped());
        Text::with_text_style(
            &note,
            Point::new(TEXT_X, FIRST_LINE_Y + LOG_LINES as i32 * LINE_HEIGHT),
            LABEL_STYLE_GRAY,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}
