//! Pre-computed text styles, built once at compile time.
//!
//! `MonoTextStyle` and `TextStyle` construction is cheap but happens in
//! every draw call if done inline; as `const` items the compiler places
//! the finished structs in read-only data instead. Styles whose color
//! varies at runtime (banner segments, redline labels) are built from the
//! exposed font references with `MonoTextStyle::new(FONT, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_4X6, FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{GRAY, PINK, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text on the alphabetic baseline. Popups, mode indicator.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Centered on both axes. Scale labels and gear letters anchored on
/// geometry table points.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned text. Banner segments and the debug overlay.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References (for dynamic-color styles)
// =============================================================================

/// Tiny 4x6 font. Speedometer scale labels (15 of them fit the sweep).
pub const TINY_FONT: &MonoFont = &FONT_4X6;

/// Small 6x10 font. Tach labels, gear letters, gauge letters, overlay text.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium 10x20 font. Banner date/time segments and popup text.
pub const TEXT_FONT: &MonoFont = &FONT_10X20;

/// Large banner font for the vehicle name.
pub const BANNER_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for dial and gear labels.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for inactive gear letters.
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Tiny white text for the dense speedometer scale.
pub const TINY_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_4X6, WHITE);

/// Medium white text for popup messages.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Demo-mode indicator while active.
pub const MODE_STYLE_ACTIVE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, PINK);

/// Demo-mode indicator while idle.
pub const MODE_STYLE_IDLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, GRAY);
