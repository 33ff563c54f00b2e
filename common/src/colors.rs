//! Color constants for the cluster.
//!
//! Rgb565 uses 16 bits per pixel (5 bits red, 6 bits green, 5 bits blue),
//! the native format of the target panel, so no conversion happens on the
//! way to the display buffer. Standard colors come from the `RgbColor`
//! trait; the rest are picked for this face layout.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Background of the whole face.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Ticks, labels, the speed needle.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Redline arc and over-redline ticks.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Turn-indicator arrows.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Fuel needle and banner time segment.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan (0, 63, 31). Coolant needle and banner date segment.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Magenta/pink (31, 0, 31). Gear dot, banner vehicle name, demo indicator.
pub const PINK: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange for the tach needle. RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for dial rims, pivot caps, gear nodes and idle indicator
/// text. RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
