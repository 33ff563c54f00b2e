//! Scrolling banner strip: five segments, measured widths, one cursor.
//!
//! Segment order is fixed: vehicle name, spacer, date, spacer, time.
//! Each segment keeps its own font and color, so the renderer just walks
//! the segments at `cursor + running offset`. Widths are measured from
//! font metrics whenever a text changes (the clock strings refresh at
//! most once per second); the scroll cursor moves every frame and wraps
//! back to the right screen edge once the whole strip has passed the
//! left one.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{CYAN, GRAY, PINK, YELLOW};
use crate::config::SCREEN_WIDTH;
use crate::styles::{BANNER_FONT, TEXT_FONT};

/// Number of banner segments.
pub const SEGMENT_COUNT: usize = 5;

/// Capacity of one segment's text, in bytes.
pub const SEGMENT_TEXT_LEN: usize = 32;

const SPACER: &str = "  //  ";

/// Shown until the platform delivers real clock strings.
pub const DATE_PLACEHOLDER: &str = "--- -- ---";
pub const TIME_PLACEHOLDER: &str = "--:--:--";

/// Pixel advance of one character in a monospace font.
#[inline]
fn glyph_advance(font: &MonoFont<'_>) -> i32 {
    (font.character_size.width + font.character_spacing) as i32
}

/// Rendered width of `text` in `font`.
pub fn text_width(
    font: &MonoFont<'_>,
    text: &str,
) -> i32 {
    text.chars().count() as i32 * glyph_advance(font)
}

// =============================================================================
// Segments
// =============================================================================

/// One banner segment: text plus its fixed font/color and cached width.
pub struct BannerSegment {
    text: String<SEGMENT_TEXT_LEN>,
    pub font: &'static MonoFont<'static>,
    pub color: Rgb565,
    width: i32,
}

impl BannerSegment {
    fn new(
        text: &str,
        font: &'static MonoFont<'static>,
        color: Rgb565,
    ) -> Self {
        let mut segment = Self {
            text: String::new(),
            font,
            color,
            width: 0,
        };
        segment.set_text(text);
        segment
    }

    /// Replace the text, truncating to capacity. Returns true when the
    /// stored text actually changed.
    fn set_text(
        &mut self,
        text: &str,
    ) -> bool {
        if self.text.as_str() == text {
            return false;
        }
        self.text.clear();
        for c in text.chars().take(SEGMENT_TEXT_LEN) {
            self.text.push(c).ok();
        }
        self.width = text_width(self.font, self.text.as_str());
        true
    }

    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }

    #[inline]
    pub const fn width(&self) -> i32 { self.width }
}

// =============================================================================
// Banner State
// =============================================================================

/// The whole strip: segments, cached total width, scroll cursor.
pub struct BannerState {
    segments: [BannerSegment; SEGMENT_COUNT],
    total_width: i32,
    cursor: i32,
}

impl BannerState {
    pub fn new(vehicle_name: &str) -> Self {
        let segments = [
            BannerSegment::new(vehicle_name, BANNER_FONT, PINK),
            BannerSegment::new(SPACER, TEXT_FONT, GRAY),
            BannerSegment::new(DATE_PLACEHOLDER, TEXT_FONT, CYAN),
            BannerSegment::new(SPACER, TEXT_FONT, GRAY),
            BannerSegment::new(TIME_PLACEHOLDER, TEXT_FONT, YELLOW),
        ];
        let total_width = segments.iter().map(BannerSegment::width).sum();

        Self {
            segments,
            total_width,
            cursor: SCREEN_WIDTH as i32,
        }
    }

    /// Update the date/time segments. Widths and the cached total are
    /// recomputed only when a string actually changed.
    pub fn set_clock(
        &mut self,
        date: &str,
        time: &str,
    ) {
        let date_changed = self.segments[2].set_text(date);
        let time_changed = self.segments[4].set_text(time);
        if date_changed || time_changed {
            self.total_width = self.segments.iter().map(BannerSegment::width).sum();
        }
    }

    /// Move the strip `step_px` left; wrap to the right edge once it has
    /// fully scrolled past the left edge.
    pub fn advance(
        &mut self,
        step_px: i32,
    ) {
        self.cursor -= step_px;
        if self.cursor < -self.total_width {
            self.cursor = SCREEN_WIDTH as i32;
        }
    }

    #[inline]
    pub const fn cursor(&self) -> i32 { self.cursor }

    #[inline]
    pub const fn total_width(&self) -> i32 { self.total_width }

    /// Segments with their pixel offsets from the cursor.
    pub fn segments(&self) -> impl Iterator<Item = (i32, &BannerSegment)> {
        self.segments.iter().scan(0, |offset, segment| {
            let x = *offset;
            *offset += segment.width;
            Some((x, segment))
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_segment_widths() {
        let banner = BannerState::new("LEON CUPRA 280");
        let sum: i32 = banner.segments().map(|(_, s)| s.width()).sum();
        assert_eq!(banner.total_width(), sum);
        assert!(banner.total_width() > 0);
    }

    #[test]
    fn test_segment_offsets_are_prefix_sums() {
        let banner = BannerState::new("GT");
        let mut expected = 0;
        for (offset, segment) in banner.segments() {
            assert_eq!(offset, expected);
            expected += segment.width();
        }
    }

    #[test]
    fn test_clock_change_updates_total_width() {
        let mut banner = BannerState::new("GT");
        let before = banner.total_width();

        // Same text: nothing recomputed, total unchanged.
        banner.set_clock(DATE_PLACEHOLDER, TIME_PLACEHOLDER);
        assert_eq!(banner.total_width(), before);

        // A longer date stretches the strip by whole glyph advances.
        banner.set_clock("Mon 24 August 2026", TIME_PLACEHOLDER);
        let grown = banner.total_width() - before;
        let advance = text_width(TEXT_FONT, "A");
        assert_eq!(grown, (18 - DATE_PLACEHOLDER.len() as i32) * advance);
    }

    #[test]
    fn test_cursor_wraps_to_right_edge_after_full_pass() {
        let mut banner = BannerState::new("CLUSTER");
        let total = banner.total_width();
        let mut prev = banner.cursor();
        let mut wrapped = false;

        for _ in 0..5000 {
            banner.advance(2);
            let cursor = banner.cursor();
            if cursor > prev {
                // The only rightward jump allowed is the wrap itself,
                // and it may happen only once the strip is fully off.
                assert_eq!(cursor, SCREEN_WIDTH as i32);
                assert!(prev - 2 < -total);
                wrapped = true;
            }
            prev = cursor;
        }
        assert!(wrapped);
    }

    #[test]
    fn test_overlong_text_truncated_to_capacity() {
        let mut banner = BannerState::new("GT");
        let long = "0123456789012345678901234567890123456789";
        banner.set_clock(long, TIME_PLACEHOLDER);
        let (_, date) = banner.segments().nth(2).unwrap();
        assert_eq!(date.text().len(), SEGMENT_TEXT_LEN);
    }
}
