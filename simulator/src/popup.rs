//! Popup state management with time-based expiration.
//!
//! Each popup variant holds its start time for expiration checking.

use std::time::Instant;

use cluster_common::colors::{RED, WHITE};
use cluster_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use cluster_common::styles::{CENTERED, TITLE_STYLE_WHITE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::timing::POPUP_DURATION;

const CENTER_X: i32 = SCREEN_WIDTH as i32 / 2;
const CENTER_Y: i32 = SCREEN_HEIGHT as i32 / 2;

/// Two-line popup box (provisioning).
const LARGE_WIDTH: u32 = 200;
const LARGE_HEIGHT: u32 = 60;

/// One-line popup box (link up, demo toggle).
const SMALL_WIDTH: u32 = 150;
const SMALL_HEIGHT: u32 = 50;

/// Active popup with its start time.
///
/// Consolidates popup state into a single enum. Each variant holds the
/// `Instant` when the popup was triggered, making expiration checks
/// straightforward and mutual exclusion impossible to violate.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// Provisioning portal requested (long press on gear down).
    Provisioning(Instant),
    /// First wireless RPM sample arrived.
    Link(Instant),
    /// Demo mode toggled; the flag is the new state.
    Demo(Instant, bool),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Provisioning(t) | Self::Link(t) | Self::Demo(t, _) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }
}

/// White border and red body, centered on screen.
fn draw_box<D>(
    display: &mut D,
    width: u32,
    height: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let x = (SCREEN_WIDTH - width) as i32 / 2;
    let y = (SCREEN_HEIGHT - height) as i32 / 2;

    Rectangle::new(Point::new(x - 3, y - 3), Size::new(width + 6, height + 6))
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
    Rectangle::new(Point::new(x, y), Size::new(width, height))
        .into_styled(PrimitiveStyle::with_fill(RED))
        .draw(display)
        .ok();
}

pub fn draw_popup<D>(
    display: &mut D,
    popup: &Popup,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match popup {
        Popup::Provisioning(_) => {
            draw_box(display, LARGE_WIDTH, LARGE_HEIGHT);
            Text::with_text_style(
                "PROVISIONING",
                Point::new(CENTER_X, CENTER_Y - 5),
                TITLE_STYLE_WHITE,
                CENTERED,
            )
            .draw(display)
            .ok();
            Text::with_text_style(
                "PORTAL REQUESTED",
                Point::new(CENTER_X, CENTER_Y + 15),
                TITLE_STYLE_WHITE,
                CENTERED,
            )
            .draw(display)
            .ok();
        }
        Popup::Link(_) => {
            draw_box(display, SMALL_WIDTH, SMALL_HEIGHT);
            Text::with_text_style(
                "RPM LINK UP",
                Point::new(CENTER_X, CENTER_Y + 5),
                TITLE_STYLE_WHITE,
                CENTERED,
            )
            .draw(display)
            .ok();
        }
        Popup::Demo(_, on) => {
            draw_box(display, SMALL_WIDTH, SMALL_HEIGHT);
            let text = if *on { "DEMO ON" } else { "DEMO OFF" };
            Text::with_text_style(
                text,
                Point::new(CENTER_X, CENTER_Y + 5),
                TITLE_STYLE_WHITE,
                CENTERED,
            )
            .draw(display)
            .ok();
        }
    }
}
