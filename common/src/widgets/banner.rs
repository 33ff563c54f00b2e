//! Scrolling banner strip along the bottom edge.
//!
//! Layout lives in [`BannerState`]; this widget just places each segment
//! at `cursor + segment offset` with the segment's own font and color.
//! Segments fully outside the screen are skipped rather than clipped by
//! the draw target, which saves rasterizing glyphs nobody sees.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::banner::BannerState;
use crate::config::{BANNER_BASELINE_Y, SCREEN_WIDTH};
use crate::styles::LEFT_ALIGNED;

pub fn draw_banner<D>(
    display: &mut D,
    banner: &BannerState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (offset, segment) in banner.segments() {
        let x = banner.cursor() + offset;
        if x >= SCREEN_WIDTH as i32 || x + segment.width() <= 0 {
            continue;
        }
        Text::with_text_style(
            segment.text(),
            Point::new(x, BANNER_BASELINE_Y),
            MonoTextStyle::new(segment.font, segment.color),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}
